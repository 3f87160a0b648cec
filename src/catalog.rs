//! Catalog document types describing the curated repository list.
//!
//! The types in this module mirror the structure of the YAML catalog consumed
//! by the CLI. The catalog is data, not code: a default document is embedded
//! in the binary and an alternative file can be supplied for runs against a
//! different curation (or mock catalogs in tests). Parsing always validates
//! the document so downstream stages can rely on well-formed identifiers.

use std::{collections::HashSet, fmt, fs, path::Path};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// Catalog document compiled into the binary.
const DEFAULT_CATALOG: &str = include_str!("../catalog.yaml");

/// Root catalog document describing the rendered list.
///
/// # Examples
///
/// ```
/// use starboard::parse_catalog;
///
/// let yaml = r#"
/// sections:
///   - title: Testing
///     repos:
///       - owner: ory
///         name: dockertest
/// "#;
/// let catalog = parse_catalog(yaml,).expect("valid catalog",);
/// assert_eq!(catalog.sections.len(), 1);
/// assert_eq!(catalog.language, "rust");
/// ```
#[derive(Debug, Deserialize, Serialize, Clone,)]
pub struct CatalogConfig
{
    /// Heading of the rendered document.
    #[serde(default = "default_title")]
    pub title: String,

    /// Introductory line rendered below the update timestamp.
    #[serde(default = "default_intro")]
    pub intro: String,

    /// Language used for the popular-repositories search query.
    #[serde(default = "default_language")]
    pub language: String,

    /// Optional license footer rendered at the end of the document.
    #[serde(default)]
    pub footer: Option<String,>,

    /// Ordered sections of curated repository identifiers.
    #[serde(default)]
    pub sections: Vec<SectionEntry,>,
}

impl CatalogConfig
{
    /// Parses the catalog document embedded in the binary.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::Parse`] and [`Error::Validation`] when the
    /// compiled-in document is malformed.
    pub fn embedded() -> Result<Self, Error,>
    {
        parse_catalog(DEFAULT_CATALOG,)
    }

    /// Returns the number of curated identifiers across all sections.
    pub fn repo_count(&self,) -> usize
    {
        self.sections.iter().map(|section| section.repos.len(),).sum()
    }
}

/// Single named section of the catalog.
#[derive(Debug, Deserialize, Serialize, Clone,)]
pub struct SectionEntry
{
    /// Section heading rendered above the repository table.
    pub title: String,

    /// Ordered curated identifiers. The list may be empty; the final section
    /// usually is, serving as the destination for search augmentation.
    #[serde(default)]
    pub repos: Vec<RepoId,>,
}

/// Static identifier of a curated repository.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Hash,)]
pub struct RepoId
{
    /// GitHub account that owns the repository.
    #[serde(alias = "org")]
    pub owner: String,

    /// Repository name within the owning account.
    #[serde(alias = "repo")]
    pub name: String,
}

impl fmt::Display for RepoId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Loads and validates a catalog from the provided YAML file.
///
/// # Errors
///
/// Returns [`Error::Catalog`] when the file cannot be read and propagates
/// parse or validation failures from [`parse_catalog`].
pub fn load_catalog(path: &Path,) -> Result<CatalogConfig, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::catalog_io_error(path, source,),)?;
    parse_catalog(&contents,)
}

/// Parses a catalog from the provided YAML document string.
///
/// This function is suitable for unit tests and higher-level callers that
/// already obtained the document contents.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// and [`Error::Validation`](Error::Validation) when sections or identifiers
/// violate invariants.
pub fn parse_catalog(contents: &str,) -> Result<CatalogConfig, Error,>
{
    let catalog: CatalogConfig = serde_yaml::from_str(contents,)?;
    validate_catalog(&catalog,)?;
    Ok(catalog,)
}

/// Validates section titles and repository identifiers.
///
/// Identifiers must match the GitHub account and repository shape and must
/// not repeat anywhere in the catalog: a duplicate would render the same
/// repository twice and double the fetch cost.
fn validate_catalog(catalog: &CatalogConfig,) -> Result<(), Error,>
{
    if catalog.sections.is_empty() {
        return Err(Error::validation("catalog must include at least one section",),);
    }

    let pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$",)
        .map_err(|e| Error::validation(format!("invalid identifier pattern: {e}"),),)?;

    let mut seen = HashSet::with_capacity(catalog.repo_count(),);

    for section in &catalog.sections {
        if section.title.trim().is_empty() {
            return Err(Error::validation("section title must not be blank",),);
        }

        for id in &section.repos {
            if !pattern.is_match(&id.owner,) {
                return Err(Error::validation(format!(
                    "invalid repository owner '{}' in section '{}'",
                    id.owner, section.title
                ),),);
            }
            if !pattern.is_match(&id.name,) {
                return Err(Error::validation(format!(
                    "invalid repository name '{}' in section '{}'",
                    id.name, section.title
                ),),);
            }
            if !seen.insert((id.owner.clone(), id.name.clone(),),) {
                return Err(Error::validation(format!("duplicate repository '{id}'",),),);
            }
        }
    }

    Ok((),)
}


fn default_title() -> String
{
    "Awesome Rust".to_string()
}

fn default_intro() -> String
{
    "A list of my personally frequently used crates.".to_string()
}

fn default_language() -> String
{
    "rust".to_string()
}
