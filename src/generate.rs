//! HTML page generation.
//!
//! Stage 2 of the build. Takes the scanned [`Manifest`] and writes one
//! results page per meet plus the index page linking to all of them.
//!
//! ## Generated Pages
//!
//! - **Meet page** (`meets/<Meet_Name>.html`): header with section nav,
//!   race summary, the full CSV as a team-results table, and one card per
//!   runner with a profile photo reference
//! - **Index page** (`index.html`): the site title and a list with one
//!   link per meet, in scan order
//!
//! ## Output Structure
//!
//! ```text
//! site/
//! ├── index.html                   # Generated
//! ├── css/                         # Referenced, supplied by the site
//! ├── images/profiles/             # Referenced, supplied by the site
//! └── meets/
//!     ├── Rock_Creek_Invite.csv
//!     └── Rock_Creek_Invite.html   # Generated
//! ```
//!
//! Meet pages live inside the meets directory, so their stylesheet,
//! home-link and photo references all go through `../`. The index page
//! sits at the site root and reaches meets through the directory name.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolation is auto-escaped, so CSV cell content lands in the
//! page as text even when it contains markup.
//!
//! Writes are whole-file overwrites with no atomic rename; an interrupted
//! run leaves the file being written truncated.

use crate::config::SiteConfig;
use crate::naming;
use crate::results::{IndividualResult, ResultTable, ResultsError};
use crate::scan::{Manifest, Meet};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Results(#[from] ResultsError),
}

/// Render every meet page, then the index page.
///
/// Failures propagate immediately: pages already written stay on disk,
/// pages not yet reached are never produced. There is no rollback.
pub fn generate(root: &Path, manifest: &Manifest) -> Result<(), GenerateError> {
    for meet in &manifest.meets {
        let table = ResultTable::load(&meet.source_path)?;
        let individuals = table.individual_results()?;
        let page = render_meet_page(meet, &table, &individuals, &manifest.config);
        fs::write(&meet.output_path, page.into_string())?;
    }

    let index = render_index(manifest);
    fs::write(root.join(&manifest.config.index_file), index.into_string())?;
    Ok(())
}

/// Parse every meet CSV and resolve the result columns, writing nothing.
///
/// Surfaces the same errors a build would, so `check` can vet a site's
/// data before touching its pages.
pub fn check(manifest: &Manifest) -> Result<(), GenerateError> {
    for meet in &manifest.meets {
        let table = ResultTable::load(&meet.source_path)?;
        table.individual_results()?;
    }
    Ok(())
}

// ============================================================================
// Meet page
// ============================================================================

/// Renders one meet's results page.
pub fn render_meet_page(
    meet: &Meet,
    table: &ResultTable,
    individuals: &[IndividualResult],
    config: &SiteConfig,
) -> Markup {
    let page_title = format!("{} Results", meet.title);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page_title) }
                link rel="stylesheet" href={ "../" (config.css_dir) "/reset.css" };
                link rel="stylesheet" href={ "../" (config.css_dir) "/style.css" };
            }
            body {
                (meet_header(meet, config))
                main {
                    (summary_section(config))
                    (team_results_section(table))
                    (individual_results_section(individuals, config))
                }
                footer {
                    p { (config.footer) }
                }
            }
        }
    }
}

/// Meet page header: section nav, title, date line.
fn meet_header(meet: &Meet, config: &SiteConfig) -> Markup {
    html! {
        header {
            nav {
                a.button href={ "../" (config.index_file) } { "Home Page" }
                a.button href="#summary" { "Summary" }
                a.button href="#team-results" { "Team Results" }
                a.button href="#individual-results" { "Individual Results" }
                a.button href="#gallery" { "Gallery" }
            }
            h1 { (meet.title) }
            p { (config.race_date) }
        }
    }
}

fn summary_section(config: &SiteConfig) -> Markup {
    // The {meet_name} token is emitted literally, matching the published
    // pages, which never substitute it in this prose.
    let prose = format!(
        "The {} team performed admirably at the {{meet_name}}. \
         Additional race summary content can go here.",
        config.team_name
    );
    html! {
        section id="summary" {
            h2.section-title { "Race Summary" }
            p { (prose) }
        }
    }
}

/// The whole CSV as a table: headers verbatim, every row as-is whatever
/// its cell count.
fn team_results_section(table: &ResultTable) -> Markup {
    html! {
        section id="team-results" {
            h2.section-title { "Team Results" }
            table {
                thead {
                    tr {
                        @for header in &table.headers {
                            th { (header) }
                        }
                    }
                }
                tbody {
                    @for row in &table.rows {
                        tr {
                            @for cell in row {
                                td { (cell) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn individual_results_section(individuals: &[IndividualResult], config: &SiteConfig) -> Markup {
    html! {
        section id="individual-results" {
            h2.section-title { "Individual Results" }
            div.individual-results {
                @for result in individuals {
                    (individual_card(result, config))
                }
            }
        }
    }
}

/// One runner card. The photo path is derived from the runner's name;
/// whether the file exists is the site's business, not ours.
fn individual_card(result: &IndividualResult, config: &SiteConfig) -> Markup {
    let photo = format!(
        "../{}/profiles/{}",
        config.images_dir,
        naming::profile_image(&result.name)
    );
    html! {
        div.individual-result {
            img src=(photo) alt=(result.name);
            div {
                p { strong { "Name:" } " " (result.name) }
                p { strong { "Place:" } " " (result.place) }
                p { strong { "Time:" } " " (result.time) }
                p { strong { "Grade:" } " " (result.grade) }
            }
        }
    }
}

// ============================================================================
// Index page
// ============================================================================

/// Renders the index page: one link per meet, in manifest order.
pub fn render_index(manifest: &Manifest) -> Markup {
    let config = &manifest.config;
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.site_title) }
                link rel="stylesheet" href={ (config.css_dir) "/reset.css" };
                link rel="stylesheet" href={ (config.css_dir) "/style.css" };
                link rel="stylesheet" href={ (config.css_dir) "/homepage.css" };
            }
            body {
                a.skip-link href="#main-content" { "Skip to Main Content" }
                header {
                    h1 { (config.site_title) }
                }
                nav {
                    ul {
                        @for meet in &manifest.meets {
                            li {
                                a href={ (config.meets_dir) "/" (meet.html_file) } { (meet.title) }
                            }
                        }
                    }
                }
                footer {
                    p { (config.footer) }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
