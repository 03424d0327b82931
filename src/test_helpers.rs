//! Shared test utilities for the meetgen test suite.
//!
//! Provides fixture setup and lookup helpers over scan-phase data
//! structures (`Manifest`, `Meet`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path(), &SiteConfig::default()).unwrap();
//!
//! let meet = find_meet(&manifest, "Rock Creek Invite");
//! assert_eq!(meet.html_file, "Rock_Creek_Invite.html");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::{Manifest, Meet};

/// Copy `fixtures/meets/` into a fresh site root in a temp directory.
///
/// Tests get an isolated copy they can mutate without affecting other
/// tests or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/meets");
    let meets = tmp.path().join("meets");
    std::fs::create_dir_all(&meets).unwrap();
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), meets.join(entry.file_name())).unwrap();
    }
    tmp
}

/// Find a meet by title. Panics with the available titles on a miss.
pub fn find_meet<'a>(manifest: &'a Manifest, title: &str) -> &'a Meet {
    manifest
        .meets
        .iter()
        .find(|m| m.title == title)
        .unwrap_or_else(|| {
            let titles = meet_titles(manifest);
            panic!("meet '{title}' not found. Available: {titles:?}")
        })
}

/// All meet titles in manifest order.
pub fn meet_titles(manifest: &Manifest) -> Vec<&str> {
    manifest.meets.iter().map(|m| m.title.as_str()).collect()
}
