//! Utilities for rendering a curated GitHub repository list as Markdown.
//!
//! The library exposes the catalog loader, the repository host seam with its
//! octocrab-backed GitHub implementation, the sequential collection pass, and
//! the Markdown renderer. Public APIs are documented with invariants, error
//! semantics, and minimal examples to facilitate integration in automation
//! tooling.

mod catalog;
mod collect;
mod document;
mod error;
mod github;
mod render;
mod stars;

pub use catalog::{CatalogConfig, RepoId, SectionEntry, load_catalog, parse_catalog};
pub use collect::collect_sections;
pub use document::{COLUMN_PAD_WIDTHS, Document, RepoEntry, Section, update_stamp};
pub use error::{Error, catalog_io_error, render_io_error};
pub use github::{GithubHost, RepoMetadata, RepositoryHost, SEARCH_PAGE_SIZE};
pub use render::{render_markdown, write_document};
pub use stars::format_stars;
