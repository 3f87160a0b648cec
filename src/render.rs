// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Renders a populated document into Markdown.
///
/// The template is fixed: heading, update timestamp, intro line, then one
/// table per section with Repo, Description, and Stars columns, and an
/// optional license footer. The document is rendered to a string first and
/// written in a single call so a failed run never leaves partial output.
use std::io;

use tracing::debug;

use crate::{
    document::Document,
    error::{render_io_error, Error}
};

/// Renders the document using the fixed Markdown template.
///
/// Sections appear in document order; rows appear in entry order with cell
/// values `[full_name](link)`, `description`, `stars`.
///
/// # Example
///
/// ```
/// use starboard::{parse_catalog, render_markdown, Document};
///
/// # fn main() -> Result<(), starboard::Error> {
/// let catalog = parse_catalog("sections:\n  - title: Testing\n")?;
/// let document = Document::new(&catalog, "2025 Jan 2".to_string(), Vec::new());
/// let markdown = render_markdown(&document);
/// assert!(markdown.starts_with("# Awesome Rust"));
/// # Ok(())
/// # }
/// ```
pub fn render_markdown(document: &Document) -> String {
    debug!("Rendering {} sections", document.sections.len());

    let mut output = String::with_capacity(estimated_length(document));

    output.push_str(&format!("# {}\n\n", document.title));
    output.push_str(&format!("**Last update:** {}\n\n", document.updated_at));
    output.push_str(&document.intro);
    output.push('\n');

    for section in &document.sections {
        output.push_str(&format!("\n## {}\n", section.title));
        output.push_str(&format!(
            "|Repo{}|Description{}|Stars{}|\n",
            document.column_pads[0], document.column_pads[1], document.column_pads[2]
        ));
        output.push_str("|---|---|---|\n");

        for entry in &section.entries {
            output.push_str(&format!(
                "|[{}]({})|{}|{}|\n",
                entry.full_name, entry.link, entry.description, entry.stars
            ));
        }
    }

    if let Some(footer) = &document.footer {
        output.push_str("\n## LICENSE\n");
        output.push_str(footer);
        output.push('\n');
    }

    output
}

/// Renders the document and writes it to the provided sink in one call.
///
/// # Errors
///
/// Returns [`Error::Render`] when the write fails; the run aborts rather
/// than emitting a truncated document.
pub fn write_document<W: io::Write>(writer: &mut W, document: &Document) -> Result<(), Error> {
    let markdown = render_markdown(document);
    writer.write_all(markdown.as_bytes()).map_err(render_io_error)?;

    Ok(())
}

fn estimated_length(document: &Document) -> usize {
    let rows: usize = document.sections.iter().map(|section| section.entries.len()).sum();
    1024 + rows * 160
}
