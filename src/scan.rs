//! Meet discovery.
//!
//! Stage 1 of the build. Lists the meets directory, keeps the `.csv`
//! entries, and derives each meet's display title and output path,
//! producing a [`Manifest`] the renderer consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! site/                            # Site root
//! ├── config.toml                  # Site configuration (optional)
//! ├── index.html                   # Generated meet index
//! └── meets/
//!     ├── Rock_Creek_Invite.csv    # One CSV per meet
//!     ├── Rock_Creek_Invite.html   # Generated next to its CSV
//!     └── City_Championships.csv
//! ```
//!
//! A missing meets directory is created empty rather than reported — a
//! fresh site scans to an empty manifest. Meets are sorted by filename:
//! directory listing order is platform-dependent, and sorted input is what
//! makes repeated builds byte-identical.

use crate::config::SiteConfig;
use crate::naming;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything the renderer needs: the discovered meets in render order
/// plus the config in effect.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub meets: Vec<Meet>,
    pub config: SiteConfig,
}

/// One discovered meet: a CSV source and where its page goes.
#[derive(Debug, Clone, Serialize)]
pub struct Meet {
    /// Display title (file stem with underscores as spaces).
    pub title: String,
    /// The meet CSV.
    pub source_path: PathBuf,
    /// Sibling path of `source_path` with the extension swapped to `.html`.
    pub output_path: PathBuf,
    /// Output filename alone, for index links (`<meets_dir>/<html_file>`).
    pub html_file: String,
}

/// Scan the meets directory under `root` into a [`Manifest`].
pub fn scan(root: &Path, config: &SiteConfig) -> Result<Manifest, ScanError> {
    let meets_dir = root.join(&config.meets_dir);
    // First run on a fresh site: create the directory, scan it empty.
    fs::create_dir_all(&meets_dir)?;

    let mut meets = Vec::new();
    for entry in fs::read_dir(&meets_dir)? {
        let path = entry?.path();
        if !is_meet_csv(&path) {
            continue;
        }
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        meets.push(Meet {
            title: naming::meet_title(&stem),
            output_path: path.with_extension("html"),
            html_file: format!("{stem}.html"),
            source_path: path,
        });
    }

    meets.sort_by(|a, b| a.source_path.file_name().cmp(&b.source_path.file_name()));

    Ok(Manifest {
        meets,
        config: config.clone(),
    })
}

fn is_meet_csv(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{find_meet, meet_titles, setup_fixtures};
    use tempfile::TempDir;

    #[test]
    fn scan_finds_all_meets() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(manifest.meets.len(), 3);
        let rock_creek = find_meet(&manifest, "Rock Creek Invite");
        assert_eq!(rock_creek.html_file, "Rock_Creek_Invite.html");
    }

    #[test]
    fn meets_sorted_by_filename() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(
            meet_titles(&manifest),
            vec!["City Championships", "Rock Creek Invite", "Twilight Relays"]
        );
    }

    #[test]
    fn title_and_paths_derived_from_filename() {
        let tmp = TempDir::new().unwrap();
        let meets = tmp.path().join("meets");
        fs::create_dir_all(&meets).unwrap();
        fs::write(meets.join("Rock_Creek_Invite.csv"), "Name,Place,Time,Grade\n").unwrap();

        let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
        let meet = &manifest.meets[0];
        assert_eq!(meet.title, "Rock Creek Invite");
        assert_eq!(meet.html_file, "Rock_Creek_Invite.html");
        assert_eq!(meet.source_path, meets.join("Rock_Creek_Invite.csv"));
        assert_eq!(meet.output_path, meets.join("Rock_Creek_Invite.html"));
    }

    #[test]
    fn non_csv_entries_ignored() {
        let tmp = TempDir::new().unwrap();
        let meets = tmp.path().join("meets");
        fs::create_dir_all(meets.join("photos")).unwrap();
        fs::write(meets.join("notes.txt"), "not a meet").unwrap();
        fs::write(meets.join("Old_Meet.html"), "<html></html>").unwrap();
        fs::write(meets.join("Dual.csv"), "Name,Place,Time,Grade\n").unwrap();

        let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(meet_titles(&manifest), vec!["Dual"]);
    }

    #[test]
    fn csv_extension_matched_case_insensitively() {
        let tmp = TempDir::new().unwrap();
        let meets = tmp.path().join("meets");
        fs::create_dir_all(&meets).unwrap();
        fs::write(meets.join("Dual.CSV"), "Name,Place,Time,Grade\n").unwrap();

        let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(manifest.meets.len(), 1);
    }

    #[test]
    fn missing_meets_dir_created_and_scans_empty() {
        let tmp = TempDir::new().unwrap();
        let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
        assert!(manifest.meets.is_empty());
        assert!(tmp.path().join("meets").is_dir());
    }

    #[test]
    fn custom_meets_dir_respected() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig {
            meets_dir: "races".to_string(),
            ..SiteConfig::default()
        };
        fs::create_dir_all(tmp.path().join("races")).unwrap();
        fs::write(
            tmp.path().join("races/Dual.csv"),
            "Name,Place,Time,Grade\n",
        )
        .unwrap();

        let manifest = scan(tmp.path(), &config).unwrap();
        assert_eq!(manifest.meets.len(), 1);
        assert!(manifest.meets[0].source_path.starts_with(tmp.path().join("races")));
    }

    #[test]
    fn manifest_serializes_to_json() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        assert!(json.contains("Rock Creek Invite"));
        assert!(json.contains("meets_dir"));
    }
}
