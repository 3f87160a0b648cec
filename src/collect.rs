// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Sequential collection pass populating the catalog with live metadata.
///
/// Fetches every curated identifier one call at a time, then issues the
/// single search query and appends its results to the last section. Any
/// failure aborts the pass; no partially populated section set is returned.
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::{
    catalog::CatalogConfig,
    document::{RepoEntry, Section},
    error::Error,
    github::RepositoryHost,
};

/// Collects populated sections for the provided catalog.
///
/// Every identifier is fetched sequentially in catalog order; the search
/// query `language: <language>` then augments the final section with up to
/// one page of the most-starred results, in API order.
///
/// # Errors
///
/// Propagates the first [`Error`] returned by the host. Nothing is returned
/// on failure, preserving the no-partial-output guarantee.
///
/// # Example
///
/// ```no_run
/// use starboard::{CatalogConfig, GithubHost, collect_sections};
///
/// # async fn example() -> Result<(), starboard::Error> {
/// let catalog = CatalogConfig::embedded()?;
/// let host = GithubHost::from_token("ghp_token",)?;
/// let sections = collect_sections(&host, &catalog,).await?;
/// assert_eq!(sections.len(), catalog.sections.len());
/// # Ok(())
/// # }
/// ```
pub async fn collect_sections<H,>(
    host: &H,
    catalog: &CatalogConfig,
) -> Result<Vec<Section,>, Error,>
where
    H: RepositoryHost,
{
    let total = catalog.repo_count();
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
            .expect("valid template",),
    );

    let mut sections = Vec::with_capacity(catalog.sections.len(),);
    let mut fetched = 0usize;

    for section in &catalog.sections {
        let mut entries = Vec::with_capacity(section.repos.len(),);

        for id in &section.repos {
            pb.set_message(format!("Fetching {id} ({}/{})...", fetched + 1, total),);
            debug!("Fetching metadata for {}", id);

            let metadata = host.repository(&id.owner, &id.name,).await?;
            entries.push(RepoEntry::curated(id.clone(), metadata,),);
            fetched += 1;
        }

        sections.push(Section {
            title: section.title.clone(),
            entries,
        },);
    }

    info!("queried repos");

    pb.set_message(format!("Searching popular {} repositories...", catalog.language),);
    info!("searching and sorting repos...");

    let query = format!("language: {}", catalog.language);
    let results = host.search(&query,).await?;
    let found = results.len();

    if let Some(last,) = sections.last_mut() {
        for metadata in results {
            last.entries.push(RepoEntry::search(metadata,),);
        }
    }

    info!("searched: {}", found);
    pb.finish_with_message(format!("Collected {} repositories", total + found),);

    Ok(sections,)
}

#[cfg(test)]
mod tests
{
    use std::collections::HashMap;

    use super::collect_sections;
    use crate::{
        Document, parse_catalog, render_markdown,
        error::Error,
        github::{RepoMetadata, RepositoryHost},
    };

    /// In-memory host serving canned responses.
    struct FakeHost
    {
        repositories: HashMap<(String, String,), RepoMetadata,>,
        search:       Vec<RepoMetadata,>,
    }

    impl FakeHost
    {
        fn new() -> Self
        {
            Self {
                repositories: HashMap::new(), search: Vec::new(),
            }
        }

        fn with_repository(mut self, owner: &str, name: &str, metadata: RepoMetadata,) -> Self
        {
            self.repositories.insert((owner.to_string(), name.to_string(),), metadata,);
            self
        }

        fn with_search(mut self, results: Vec<RepoMetadata,>,) -> Self
        {
            self.search = results;
            self
        }
    }

    impl RepositoryHost for FakeHost
    {
        async fn repository(&self, owner: &str, name: &str,) -> Result<RepoMetadata, Error,>
        {
            self.repositories
                .get(&(owner.to_string(), name.to_string(),),)
                .cloned()
                .ok_or_else(|| Error::api(format!("{owner}/{name} not found"),),)
        }

        async fn search(&self, _query: &str,) -> Result<Vec<RepoMetadata,>, Error,>
        {
            Ok(self.search.clone(),)
        }
    }

    fn metadata(full_name: &str, description: &str, stars: u64,) -> RepoMetadata
    {
        RepoMetadata {
            full_name:   full_name.to_string(),
            description: description.to_string(),
            stars,
            link:        format!("https://github.com/{full_name}"),
        }
    }

    const TWO_SECTION_CATALOG: &str = r"
sections:
  - title: Testing
    repos:
      - owner: ory
        name: dockertest
  - title: Popular
";

    #[tokio::test]
    async fn collects_entries_in_catalog_order_and_appends_search_results()
    {
        let yaml = r"
sections:
  - title: Logging
    repos:
      - owner: tokio-rs
        name: tracing
      - owner: serde-rs
        name: serde
  - title: Popular
";
        let catalog = parse_catalog(yaml,).expect("valid catalog",);
        let host = FakeHost::new()
            .with_repository("tokio-rs", "tracing", metadata("tokio-rs/tracing", "scoped tracing", 5000,),)
            .with_repository("serde-rs", "serde", metadata("serde-rs/serde", "serialization", 9000,),)
            .with_search(vec![
                metadata("rust-lang/rust", "the compiler", 100000,),
                metadata("denoland/deno", "a runtime", 90000,),
            ],);

        let sections = collect_sections(&host, &catalog,).await.expect("collection failed",);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Logging");
        assert_eq!(sections[0].entries[0].full_name, "tokio-rs/tracing");
        assert_eq!(sections[0].entries[1].full_name, "serde-rs/serde");

        let popular = &sections[1];
        assert_eq!(popular.entries.len(), 2);
        assert_eq!(popular.entries[0].full_name, "rust-lang/rust");
        assert_eq!(popular.entries[1].full_name, "denoland/deno");
        assert!(popular.entries.iter().all(|entry| entry.origin.is_none()));
    }

    #[tokio::test]
    async fn populated_entries_satisfy_non_empty_invariant()
    {
        let catalog = parse_catalog(TWO_SECTION_CATALOG,).expect("valid catalog",);
        let host = FakeHost::new()
            .with_repository("ory", "dockertest", metadata("ory/dockertest", "", 3000,),)
            .with_search(vec![metadata("rust-lang/rust", "the compiler", 100000,)],);

        let sections = collect_sections(&host, &catalog,).await.expect("collection failed",);

        for section in &sections {
            for entry in &section.entries {
                assert!(!entry.full_name.is_empty());
                assert!(!entry.stars.is_empty());
                assert!(!entry.link.is_empty());
            }
        }
    }

    #[tokio::test]
    async fn search_results_are_sanitized_before_append()
    {
        let catalog = parse_catalog(TWO_SECTION_CATALOG,).expect("valid catalog",);
        let host = FakeHost::new()
            .with_repository("ory", "dockertest", metadata("ory/dockertest", "SQL database testing", 3000,),)
            .with_search(vec![metadata("rust-lang/rust", "a | piped | description", 100000,)],);

        let sections = collect_sections(&host, &catalog,).await.expect("collection failed",);
        let popular = sections.last().expect("expected popular section",);

        assert!(!popular.entries[0].description.contains('|'));
    }

    #[tokio::test]
    async fn missing_repository_aborts_collection()
    {
        let catalog = parse_catalog(TWO_SECTION_CATALOG,).expect("valid catalog",);
        let host = FakeHost::new().with_search(vec![metadata("rust-lang/rust", "x", 1,)],);

        let result = collect_sections(&host, &catalog,).await;

        match result {
            Err(Error::Api {
                message,
            },) => {
                assert!(message.contains("ory/dockertest"));
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn end_to_end_render_produces_expected_row()
    {
        let catalog = parse_catalog(TWO_SECTION_CATALOG,).expect("valid catalog",);
        let host = FakeHost::new()
            .with_repository(
                "ory",
                "dockertest",
                RepoMetadata {
                    full_name:   "ory/dockertest".to_string(),
                    description: "SQL database testing".to_string(),
                    stars:       3000,
                    link:        "https://github.com/ory/dockertest".to_string(),
                },
            )
            .with_search(Vec::new(),);

        let sections = collect_sections(&host, &catalog,).await.expect("collection failed",);
        let document = Document::new(&catalog, "2025 Jan 2".to_string(), sections,);
        let markdown = render_markdown(&document,);

        assert!(markdown.contains(
            "|[ory/dockertest](https://github.com/ory/dockertest)|SQL database testing|3,000|"
        ));
    }

    #[tokio::test]
    async fn rendered_documents_differ_only_in_timestamp_line()
    {
        let catalog = parse_catalog(TWO_SECTION_CATALOG,).expect("valid catalog",);
        let host = FakeHost::new()
            .with_repository("ory", "dockertest", metadata("ory/dockertest", "SQL database testing", 3000,),)
            .with_search(vec![metadata("rust-lang/rust", "the compiler", 100000,)],);

        let first = collect_sections(&host, &catalog,).await.expect("collection failed",);
        let second = collect_sections(&host, &catalog,).await.expect("collection failed",);

        let rendered_first =
            render_markdown(&Document::new(&catalog, "2025 Jan 2".to_string(), first,),);
        let rendered_second =
            render_markdown(&Document::new(&catalog, "2025 Feb 3".to_string(), second,),);

        let differing: Vec<(&str, &str,),> = rendered_first
            .lines()
            .zip(rendered_second.lines(),)
            .filter(|(a, b,)| a != b,)
            .collect();

        assert_eq!(differing.len(), 1);
        assert!(differing[0].0.starts_with("**Last update:**"));
    }
}
