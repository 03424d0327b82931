//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric, not file-centric: every meet leads with
//! its positional index and display title, with the filesystem path shown
//! as an indented `Source:` context line.
//!
//! ## Scan
//!
//! ```text
//! Meets
//!     001 City Championships
//!         Source: meets/City_Championships.csv
//!     002 Rock Creek Invite
//!         Source: meets/Rock_Creek_Invite.csv
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 City Championships → meets/City_Championships.html
//! 002 Rock Creek Invite → meets/Rock_Creek_Invite.html
//! Index → index.html
//! Generated 2 meet pages
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format scan output: the discovered meets, in render order.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Meets".to_string()];
    if manifest.meets.is_empty() {
        lines.push("    (none)".to_string());
        return lines;
    }
    for (i, meet) in manifest.meets.iter().enumerate() {
        lines.push(format!("    {} {}", format_index(i + 1), meet.title));
        lines.push(format!("        Source: {}", meet.source_path.display()));
    }
    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

/// Format build output: `title → output` per meet, the index page, and a
/// summary count.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, meet) in manifest.meets.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}/{}",
            format_index(i + 1),
            meet.title,
            manifest.config.meets_dir,
            meet.html_file
        ));
    }
    lines.push(format!("Index \u{2192} {}", manifest.config.index_file));
    let count = manifest.meets.len();
    let plural = if count == 1 { "" } else { "s" };
    lines.push(format!("Generated {count} meet page{plural}"));
    lines
}

/// Print build output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}
