//! # meetgen
//!
//! A minimal static site generator for cross country race results.
//! Your filesystem is the data source: every CSV in the meets directory
//! becomes a results page, and the index page links to all of them.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      meets/*.csv  →  Manifest    (filesystem → structured data)
//! 2. Generate  Manifest     →  *.html      (meet pages + index page)
//! ```
//!
//! One synchronous pass, no state between runs: every page is re-rendered
//! and overwritten on each build. The scan result is plain serializable
//! data (`meetgen scan --json` prints it), so what the renderer will see
//! is always inspectable.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — lists the meets directory, derives titles and output paths |
//! | [`results`] | Meet CSV parsing: verbatim table plus header-keyed runner extraction |
//! | [`generate`] | Stage 2 — renders meet pages and the index page using Maud |
//! | [`config`] | `config.toml` loading, validation, and stock defaults |
//! | [`naming`] | Underscore/space filename conventions shared by scan and generate |
//! | [`output`] | CLI output formatting — positional display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped, which matters
//!   when page content comes straight out of CSV cells.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Header-Keyed Result Columns
//!
//! The individual-results cards need `Name`, `Place`, `Time` and `Grade`.
//! Those columns are resolved by header name (case-insensitive), not by
//! position, so a meet CSV can carry extra columns or reorder them. When a
//! column is missing or a row is short, the error says which file and
//! which row — the run still stops, but it stops legibly.
//!
//! ## Sorted Scan Order
//!
//! Directory listing order is filesystem-dependent. Meets are sorted by
//! filename before rendering, which pins the index-page link order and
//! makes repeated builds byte-identical.
//!
//! ## Configuration Over Constants
//!
//! Paths and page text (meets directory, asset directories, titles, the
//! date line, the footer) live in a [`config::SiteConfig`] passed into
//! both stages, with stock defaults matching the published Skyline site.
//! A site with no `config.toml` builds exactly those pages.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod results;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
