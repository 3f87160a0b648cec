// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Populated document model consumed by the renderer.
///
/// Entries are constructed exactly once from fetched metadata and never
/// mutated afterwards; the document is assembled once the collection pass
/// completes and is immutable thereafter.
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{catalog::{CatalogConfig, RepoId}, github::RepoMetadata, stars::format_stars};

/// Non-breaking-space repetitions padding the Repo, Description, and Stars
/// column headers. Cosmetic constant for fixed-width rendering in viewers.
pub const COLUMN_PAD_WIDTHS: [usize; 3] = [40, 90, 7];

const NBSP: &str = "&nbsp;";

/// Display data for a single repository row.
#[derive(Debug, Clone, Serialize, Deserialize,)]
pub struct RepoEntry
{
    /// Catalog identifier for curated entries. Search-augmented entries are
    /// display-only and carry no identifier to re-fetch from.
    pub origin:      Option<RepoId,>,
    /// Canonical `owner/name` form.
    pub full_name:   String,
    /// Description text as rendered into the table cell.
    pub description: String,
    /// Star count formatted with thousands grouping.
    pub stars:       String,
    /// Canonical web URL of the repository.
    pub link:        String,
}

impl RepoEntry
{
    /// Builds an entry for a curated catalog identifier.
    ///
    /// The description is kept verbatim; curated descriptions are trusted
    /// not to contain table-breaking characters.
    pub fn curated(id: RepoId, metadata: RepoMetadata,) -> Self
    {
        Self {
            origin:      Some(id,),
            full_name:   metadata.full_name,
            description: metadata.description,
            stars:       format_stars(metadata.stars,),
            link:        metadata.link,
        }
    }

    /// Builds a synthetic entry from a search result.
    ///
    /// Literal pipe characters in the description are replaced by spaces so
    /// uncurated text cannot corrupt the Markdown table.
    pub fn search(metadata: RepoMetadata,) -> Self
    {
        Self {
            origin:      None,
            full_name:   metadata.full_name,
            description: metadata.description.replace('|', " ",),
            stars:       format_stars(metadata.stars,),
            link:        metadata.link,
        }
    }
}

/// Ordered group of populated entries under one heading.
#[derive(Debug, Clone, Serialize, Deserialize,)]
pub struct Section
{
    /// Section heading.
    pub title:   String,
    /// Entries in catalog order, followed by search results for the
    /// augmented section.
    pub entries: Vec<RepoEntry,>,
}

/// Fully populated document handed to the renderer.
#[derive(Debug, Clone, Serialize, Deserialize,)]
pub struct Document
{
    /// Document heading.
    pub title:       String,
    /// Introductory line rendered below the update timestamp.
    pub intro:       String,
    /// Optional license footer.
    pub footer:      Option<String,>,
    /// Generation timestamp line.
    pub updated_at:  String,
    /// Header paddings derived from [`COLUMN_PAD_WIDTHS`].
    pub column_pads: [String; 3],
    /// Sections in catalog order.
    pub sections:    Vec<Section,>,
}

impl Document
{
    /// Assembles the document from catalog presentation fields, a timestamp,
    /// and collected sections.
    ///
    /// The timestamp is injected by the caller so tests can pin it; the CLI
    /// passes [`update_stamp`].
    pub fn new(catalog: &CatalogConfig, updated_at: String, sections: Vec<Section,>,) -> Self
    {
        Self {
            title: catalog.title.clone(),
            intro: catalog.intro.clone(),
            footer: catalog.footer.clone(),
            updated_at,
            column_pads: COLUMN_PAD_WIDTHS.map(|width| NBSP.repeat(width,),),
            sections,
        }
    }
}

/// Formats the current UTC date for the update-timestamp line, e.g.
/// `2025 Jan 2`.
pub fn update_stamp() -> String
{
    Utc::now().format("%Y %b %-d",).to_string()
}
