//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Every option has a stock
//! default equal to the published Skyline site's values, so a site with no
//! config file builds without one; a config file overrides just the values
//! it names.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the site root, next to the meets directory:
//!
//! ```text
//! site/
//! ├── config.toml          # Optional — stock defaults apply without it
//! ├── css/                 # Stylesheets (supplied, not generated)
//! ├── images/profiles/     # Runner photos referenced by result cards
//! └── meets/
//!     └── Rock_Creek_Invite.csv
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only rename the team
//! team_name = "Ridgeline"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have stock defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory scanned for meet CSVs, relative to the site root. Also
    /// the link prefix used by the index page.
    pub meets_dir: String,
    /// Output path of the index page, relative to the site root.
    pub index_file: String,
    /// Stylesheet directory referenced (not generated) by the pages.
    pub css_dir: String,
    /// Image directory; runner photos live in `<images_dir>/profiles/`.
    pub images_dir: String,
    /// Title of the index page.
    pub site_title: String,
    /// Team name interpolated into the race summary prose.
    pub team_name: String,
    /// Date line shown in every meet page header.
    pub race_date: String,
    /// Footer line on every page.
    pub footer: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            meets_dir: "meets".to_string(),
            index_file: "index.html".to_string(),
            css_dir: "css".to_string(),
            images_dir: "images".to_string(),
            site_title: "Skyline High School Cross Country Meet Results".to_string(),
            team_name: "Skyline".to_string(),
            race_date: "Thu Aug 29 2024".to_string(),
            footer: "© 2024 Skyline High School Cross Country".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values. Every field is a path segment or a line of
    /// page text; none of them may be empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("meets_dir", &self.meets_dir),
            ("index_file", &self.index_file),
            ("css_dir", &self.css_dir),
            ("images_dir", &self.images_dir),
            ("site_title", &self.site_title),
            ("team_name", &self.team_name),
            ("race_date", &self.race_date),
            ("footer", &self.footer),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Load the site config for a root directory.
///
/// An explicit path is read unconditionally; otherwise `<root>/config.toml`
/// is read if it exists, and stock defaults apply if it doesn't.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let default = root.join("config.toml");
            default.exists().then_some(default)
        }
    };

    let config = match path {
        Some(p) => toml::from_str(&fs::read_to_string(p)?)?,
        None => SiteConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// A stock `config.toml` with every option documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    r#"# meetgen site configuration
# All options are optional - defaults shown below.

# Directory scanned for meet CSVs, relative to the site root.
# Generated meet pages land next to their CSVs, and index links
# go through this directory name.
meets_dir = "meets"

# Output path of the index page, relative to the site root.
index_file = "index.html"

# Stylesheet directory. Pages reference reset.css, style.css and
# (index only) homepage.css inside it. Supplied by the site, not
# generated.
css_dir = "css"

# Image directory. Runner photos are looked up in
# <images_dir>/profiles/<Runner_Name>.jpg.
images_dir = "images"

# Title of the index page.
site_title = "Skyline High School Cross Country Meet Results"

# Team name interpolated into the race summary prose.
team_name = "Skyline"

# Date line shown in every meet page header.
race_date = "Thu Aug 29 2024"

# Footer line on every page.
footer = "© 2024 Skyline High School Cross Country"
"#
    .to_string()
}
