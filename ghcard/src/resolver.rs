// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolution of card inputs to entities.
//!
//! Repository references are looked up directly. Logins are tried as a user
//! first and as an organization second; when both lookups fail the user
//! error is returned and the organization error is only logged. Every lookup
//! is attempted exactly once.

use tracing::{debug, info, warn};

use crate::{
    card::{organization_card, repository_card, user_card},
    config::Credentials,
    error::Error,
    github::GithubSource,
    identifier::Identifier,
    model::CardData,
    source::{OrganizationStats, StatsSource, UserStats},
};

/// Entity a login resolved to.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum LoginMatch
{
    User(UserStats,),
    Organization(OrganizationStats,),
}

/// Resolves an ambiguous input into card data.
///
/// # Errors
///
/// Returns [`Error::Validation`] for blank input, [`Error::NotFound`] when no
/// entity matches and [`Error::Upstream`] for other source failures. For a
/// login whose user and organization lookups both fail, the user lookup
/// error is returned.
pub async fn resolve<S,>(source: &S, input: &str,) -> Result<CardData, Error,>
where
    S: StatsSource,
{
    let card = match Identifier::parse(input,)? {
        Identifier::Repo {
            owner,
            name,
        } => resolve_repository(source, &owner, &name,).await?,
        Identifier::Login(login,) => match resolve_login(source, &login,).await? {
            LoginMatch::User(stats,) => user_card(stats,),
            LoginMatch::Organization(stats,) => organization_card(stats,),
        },
    };

    info!("Resolved '{}' to a {} card", input.trim(), card.kind());
    Ok(card,)
}

/// Looks up a login as a user, falling back to an organization.
///
/// # Errors
///
/// Returns the user lookup error when the organization lookup fails too.
pub async fn resolve_login<S,>(source: &S, login: &str,) -> Result<LoginMatch, Error,>
where
    S: StatsSource,
{
    let user_error = match source.user(login,).await {
        Ok(stats,) => return Ok(LoginMatch::User(stats,),),
        Err(error,) => error,
    };

    debug!("User lookup for {} failed ({}), trying organization", login, user_error);

    match source.organization(login,).await {
        Ok(stats,) => Ok(LoginMatch::Organization(stats,),),
        Err(organization_error,) => {
            warn!(
                "Failed to fetch {} as user and organization: {}",
                login, organization_error
            );
            Err(user_error,)
        }
    }
}

/// Builds a repository card without any fallback.
pub async fn resolve_repository<S,>(
    source: &S,
    owner: &str,
    name: &str,
) -> Result<CardData, Error,>
where
    S: StatsSource,
{
    let stats = source.repository(owner, name,).await?;
    Ok(repository_card(stats,),)
}

/// Builds a user card without any fallback.
pub async fn resolve_user<S,>(source: &S, login: &str,) -> Result<CardData, Error,>
where
    S: StatsSource,
{
    let stats = source.user(login,).await?;
    Ok(user_card(stats,),)
}

/// Builds an organization card without any fallback.
pub async fn resolve_organization<S,>(source: &S, login: &str,) -> Result<CardData, Error,>
where
    S: StatsSource,
{
    let stats = source.organization(login,).await?;
    Ok(organization_card(stats,),)
}

/// Validates credentials, builds a GitHub source and resolves `input`.
///
/// # Errors
///
/// Returns [`Error::Configuration`] before any request when the client cannot
/// be built, and the errors of [`resolve`] otherwise.
///
/// # Example
///
/// ```no_run
/// use ghcard::{Credentials, fetch_card};
///
/// # async fn example() -> Result<(), ghcard::Error> {
/// let credentials = Credentials::new(Some("ghp_token",), None,)?;
/// let card = fetch_card(&credentials, "octocat/Hello-World",).await?;
/// assert_eq!(card.kind(), "repo");
/// # Ok(())
/// # }
/// ```
pub async fn fetch_card(credentials: &Credentials, input: &str,) -> Result<CardData, Error,>
{
    let source = GithubSource::new(credentials,)?;
    resolve(&source, input,).await
}
