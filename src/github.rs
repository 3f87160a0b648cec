// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Remote repository host access.
///
/// Defines the trait seam the collector works against and the octocrab-backed
/// GitHub implementation used by the CLI. Keeping the seam narrow lets tests
/// drive the pipeline with an in-memory host.
use std::time::Duration;

use octocrab::{Octocrab, models::Repository};

use crate::error::Error;

/// Number of search results requested from the first result page.
pub const SEARCH_PAGE_SIZE: u8 = 100;

/// Uniform client-level timeout applied to every API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120,);

/// Metadata fetched for a single repository.
///
/// `stars` stays numeric here; display formatting happens when entries are
/// constructed for the document.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct RepoMetadata
{
    /// Canonical `owner/name` form reported by the host.
    pub full_name:   String,
    /// Raw description text. Empty when the repository has none.
    pub description: String,
    /// Stargazer count.
    pub stars:       u64,
    /// Canonical web URL of the repository.
    pub link:        String,
}

/// Read-only view of a repository hosting API.
///
/// Both operations are issued sequentially by the collector and awaited to
/// completion; any error aborts the run.
#[allow(async_fn_in_trait)]
pub trait RepositoryHost
{
    /// Fetches metadata for the repository identified by `owner`/`name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] on network, not-found, or authentication
    /// failures.
    async fn repository(&self, owner: &str, name: &str,) -> Result<RepoMetadata, Error,>;

    /// Searches repositories matching `query`, most-starred first, returning
    /// up to [`SEARCH_PAGE_SIZE`] results from the first page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the search request fails.
    async fn search(&self, query: &str,) -> Result<Vec<RepoMetadata,>, Error,>;
}

/// GitHub-backed [`RepositoryHost`] implementation.
#[derive(Clone,)]
pub struct GithubHost
{
    client: Octocrab,
}

impl GithubHost
{
    /// Builds a host authenticated with the provided personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the underlying client cannot be
    /// constructed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use starboard::GithubHost;
    ///
    /// # fn example() -> Result<(), starboard::Error> {
    /// let token = std::env::var("GH_TOKEN",).unwrap();
    /// let host = GithubHost::from_token(&token,)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_token(token: &str,) -> Result<Self, Error,>
    {
        let client = Octocrab::builder()
            .personal_token(token,)
            .set_connect_timeout(Some(REQUEST_TIMEOUT,),)
            .set_read_timeout(Some(REQUEST_TIMEOUT,),)
            .build()
            .map_err(|e| Error::api(format!("failed to initialize GitHub client: {e}"),),)?;

        Ok(Self {
            client,
        },)
    }
}

impl RepositoryHost for GithubHost
{
    async fn repository(&self, owner: &str, name: &str,) -> Result<RepoMetadata, Error,>
    {
        let repository = self
            .client
            .repos(owner, name,)
            .get()
            .await
            .map_err(|e| Error::api(format!("failed to fetch {owner}/{name}: {e}"),),)?;

        Ok(curated_metadata(repository, owner, name,),)
    }

    async fn search(&self, query: &str,) -> Result<Vec<RepoMetadata,>, Error,>
    {
        let page = self
            .client
            .search()
            .repositories(query,)
            .sort("stars",)
            .order("desc",)
            .page(1u32,)
            .per_page(SEARCH_PAGE_SIZE,)
            .send()
            .await
            .map_err(|e| Error::api(format!("repository search failed: {e}"),),)?;

        Ok(page.items.into_iter().map(search_metadata,).collect(),)
    }
}

/// Maps a fetched repository onto [`RepoMetadata`], falling back to the
/// catalog identifier when the host omits canonical fields.
fn curated_metadata(repository: Repository, owner: &str, name: &str,) -> RepoMetadata
{
    let full_name = repository
        .full_name
        .filter(|value| !value.is_empty(),)
        .unwrap_or_else(|| format!("{owner}/{name}"),);
    let link = repository
        .html_url
        .map(|url| url.to_string(),)
        .unwrap_or_else(|| format!("https://github.com/{full_name}"),);

    RepoMetadata {
        full_name,
        description: repository.description.unwrap_or_default(),
        stars: u64::from(repository.stargazers_count.unwrap_or(0,),),
        link,
    }
}

/// Maps a search result onto [`RepoMetadata`]. Search entries have no
/// catalog identifier, so the bare repository name is the last resort.
fn search_metadata(repository: Repository,) -> RepoMetadata
{
    let full_name = repository.full_name.unwrap_or_else(|| repository.name.clone(),);
    let link = repository
        .html_url
        .map(|url| url.to_string(),)
        .unwrap_or_else(|| format!("https://github.com/{full_name}"),);

    RepoMetadata {
        full_name,
        description: repository.description.unwrap_or_default(),
        stars: u64::from(repository.stargazers_count.unwrap_or(0,),),
        link,
    }
}
