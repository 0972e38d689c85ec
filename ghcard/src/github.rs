// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! GitHub GraphQL implementation of [`StatsSource`].
//!
//! Queries are sent with variables through [`octocrab`]. The `{ data, errors }`
//! envelope is interpreted by [`interpret_response`], which separates missing
//! entities from other upstream failures.

use octocrab::{Octocrab, service::middleware::retry::RetryConfig};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use tracing::debug;

use crate::{
    config::Credentials,
    error::Error,
    source::{OrganizationStats, RepositoryStats, StatsSource, UserStats},
};

const REPOSITORY_QUERY: &str = r"
query RepoStats($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    name
    description
    stargazerCount
    forkCount
    openIssues: issues(states: OPEN) { totalCount }
    watchers { totalCount }
    owner { login avatarUrl }
    languages(first: 10, orderBy: { field: SIZE, direction: DESC }) {
      totalSize
      edges { size node { name color } }
    }
    defaultBranchRef {
      target { ... on Commit { history { totalCount } } }
    }
  }
}
";

const USER_QUERY: &str = r"
query UserStats($login: String!) {
  user(login: $login) {
    name
    login
    avatarUrl
    bio
    location
    company
    twitterUsername
    followers { totalCount }
    following { totalCount }
    repositories(
      first: 100
      ownerAffiliations: OWNER
      orderBy: { field: STARGAZERS, direction: DESC }
      isFork: false
    ) {
      totalCount
      nodes { stargazerCount forkCount primaryLanguage { name color } }
    }
    contributionsCollection {
      totalCommitContributions
      totalPullRequestContributions
      totalIssueContributions
      contributionCalendar {
        totalContributions
        weeks { contributionDays { contributionCount date color } }
      }
    }
  }
}
";

const ORGANIZATION_QUERY: &str = r"
query OrgStats($login: String!) {
  organization(login: $login) {
    name
    login
    avatarUrl
    description
    location
    websiteUrl
    twitterUsername
    repositories(
      first: 100
      orderBy: { field: STARGAZERS, direction: DESC }
      isFork: false
    ) {
      totalCount
      nodes { stargazerCount forkCount primaryLanguage { name color } }
    }
  }
}
";

const NOT_FOUND_ERROR_TYPE: &str = "NOT_FOUND";

/// GraphQL response envelope.
#[derive(Debug, Deserialize,)]
pub struct GraphQlResponse<T,>
{
    #[serde(default)]
    pub data:   Option<T,>,
    #[serde(default)]
    pub errors: Vec<GraphQlError,>,
}

/// Error entry of a GraphQL response.
#[derive(Debug, Clone, Deserialize,)]
pub struct GraphQlError
{
    #[serde(rename = "type", default)]
    pub kind:    Option<String,>,
    pub message: String,
}

#[derive(Debug, Deserialize,)]
struct RepositoryData
{
    repository: Option<RepositoryStats,>,
}

#[derive(Debug, Deserialize,)]
struct UserData
{
    user: Option<UserStats,>,
}

#[derive(Debug, Deserialize,)]
struct OrganizationData
{
    organization: Option<OrganizationStats,>,
}

/// Turns a GraphQL envelope into the selected entity.
///
/// An error typed `NOT_FOUND` or a `null` entity yields [`Error::NotFound`];
/// any other reported error yields [`Error::Upstream`] with the joined
/// messages.
///
/// # Parameters
///
/// * `response` - Decoded envelope.
/// * `subject` - Description of the looked-up entity used in messages.
/// * `select` - Extracts the entity from the `data` object.
pub fn interpret_response<D, T, F,>(
    response: GraphQlResponse<D,>,
    subject: &str,
    select: F,
) -> Result<T, Error,>
where
    F: FnOnce(D,) -> Option<T,>,
{
    if !response.errors.is_empty() {
        let message = response
            .errors
            .iter()
            .map(|error| error.message.as_str(),)
            .collect::<Vec<_,>>()
            .join("; ",);

        let missing = response
            .errors
            .iter()
            .any(|error| error.kind.as_deref() == Some(NOT_FOUND_ERROR_TYPE,),);

        return Err(if missing { Error::not_found(message,) } else { Error::upstream(message,) },);
    }

    response
        .data
        .and_then(select,)
        .ok_or_else(|| Error::not_found(format!("could not resolve {subject}"),),)
}

/// [`StatsSource`] backed by the GitHub GraphQL API.
#[derive(Clone,)]
pub struct GithubSource
{
    client: Octocrab,
}

impl GithubSource
{
    /// Builds an authenticated client.
    ///
    /// No request is sent; credentials are validated by [`Credentials`].
    /// Transport retries are disabled so each lookup is a single attempt.
    /// Must be called within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the API URL is invalid or the
    /// client cannot be built.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ghcard::{Credentials, GithubSource, resolve};
    ///
    /// # async fn example() -> Result<(), ghcard::Error> {
    /// let credentials = Credentials::from_env()?;
    /// let source = GithubSource::new(&credentials,)?;
    /// let card = resolve(&source, "rust-lang",).await?;
    /// println!("{}", card.kind());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(credentials: &Credentials,) -> Result<Self, Error,>
    {
        let mut builder = Octocrab::builder()
            .personal_token(credentials.token().to_owned(),)
            .add_retry_config(RetryConfig::None,);

        if let Some(api_url,) = credentials.api_url() {
            builder = builder.base_uri(api_url,).map_err(|error| {
                Error::configuration(format!("invalid GitHub API URL '{api_url}': {error}"),)
            },)?;
        }

        let client = builder.build().map_err(|error| {
            Error::configuration(format!("failed to initialize GitHub client: {error}"),)
        },)?;

        Ok(Self {
            client,
        },)
    }

    async fn query<D,>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<GraphQlResponse<D,>, Error,>
    where
        D: DeserializeOwned,
    {
        let payload = json!({ "query": query, "variables": variables });
        let response: GraphQlResponse<D,> = self.client.graphql(&payload,).await?;
        Ok(response,)
    }
}

impl StatsSource for GithubSource
{
    async fn repository(&self, owner: &str, name: &str,) -> Result<RepositoryStats, Error,>
    {
        debug!("Querying repository {}/{}", owner, name);
        let response: GraphQlResponse<RepositoryData,> =
            self.query(REPOSITORY_QUERY, json!({ "owner": owner, "name": name }),).await?;
        interpret_response(response, &format!("repository {owner}/{name}"), |data| {
            data.repository
        },)
    }

    async fn user(&self, login: &str,) -> Result<UserStats, Error,>
    {
        debug!("Querying user {}", login);
        let response: GraphQlResponse<UserData,> =
            self.query(USER_QUERY, json!({ "login": login }),).await?;
        interpret_response(response, &format!("user {login}"), |data| data.user,)
    }

    async fn organization(&self, login: &str,) -> Result<OrganizationStats, Error,>
    {
        debug!("Querying organization {}", login);
        let response: GraphQlResponse<OrganizationData,> =
            self.query(ORGANIZATION_QUERY, json!({ "login": login }),).await?;
        interpret_response(response, &format!("organization {login}"), |data| data.organization,)
    }
}
