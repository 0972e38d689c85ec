// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Upstream statistics shapes and the lookup seam used by the resolver.
//!
//! The structs mirror the GitHub GraphQL selections issued by
//! [`GithubSource`](crate::GithubSource) and deserialize from camelCase
//! payloads.

use std::future::Future;

use serde::Deserialize;

use crate::{
    error::Error,
    model::{ContributionWeek, PrimaryLanguage, RawRepoSummary},
};

/// Data source able to look up the three entity kinds.
///
/// Each call is a single attempt. Implementations report a missing entity
/// with [`Error::NotFound`] and any other failure with [`Error::Upstream`].
pub trait StatsSource
{
    /// Looks up a repository by owner and name.
    fn repository(
        &self,
        owner: &str,
        name: &str,
    ) -> impl Future<Output = Result<RepositoryStats, Error,>,> + Send;

    /// Looks up a user by login.
    fn user(&self, login: &str,) -> impl Future<Output = Result<UserStats, Error,>,> + Send;

    /// Looks up an organization by login.
    fn organization(
        &self,
        login: &str,
    ) -> impl Future<Output = Result<OrganizationStats, Error,>,> + Send;
}

/// Wrapper for GraphQL `{ totalCount }` selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount
{
    pub total_count: u64,
}

/// Repository statistics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryStats
{
    pub name:               String,
    #[serde(default)]
    pub description:        Option<String,>,
    pub stargazer_count:    u64,
    pub fork_count:         u64,
    pub open_issues:        TotalCount,
    pub watchers:           TotalCount,
    pub owner:              RepositoryOwner,
    pub languages:          LanguageConnection,
    #[serde(default)]
    pub default_branch_ref: Option<BranchRef,>,
}

impl RepositoryStats
{
    /// Commit count of the default branch, zero when the repository is empty.
    pub fn commit_count(&self,) -> u64
    {
        self.default_branch_ref
            .as_ref()
            .and_then(|branch| branch.target.as_ref(),)
            .and_then(|target| target.history.as_ref(),)
            .map_or(0, |history| history.total_count,)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryOwner
{
    pub login:      String,
    pub avatar_url: String,
}

/// Languages of a repository with their byte sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConnection
{
    pub total_size: u64,
    #[serde(default)]
    pub edges:      Vec<LanguageEdge,>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct LanguageEdge
{
    pub size: u64,
    pub node: PrimaryLanguage,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct BranchRef
{
    #[serde(default)]
    pub target: Option<CommitTarget,>,
}

/// Head of the default branch; `history` is absent for non-commit targets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct CommitTarget
{
    #[serde(default)]
    pub history: Option<TotalCount,>,
}

/// First page of non-fork repositories with the overall count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection
{
    pub total_count: u64,
    #[serde(default)]
    pub nodes:       Vec<RawRepoSummary,>,
}

/// User profile statistics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct UserStats
{
    #[serde(default)]
    pub name:                     Option<String,>,
    pub login:                    String,
    pub avatar_url:               String,
    #[serde(default)]
    pub bio:                      Option<String,>,
    #[serde(default)]
    pub location:                 Option<String,>,
    #[serde(default)]
    pub company:                  Option<String,>,
    #[serde(default)]
    pub twitter_username:         Option<String,>,
    pub followers:                TotalCount,
    pub following:                TotalCount,
    pub repositories:             RepositoryConnection,
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection
{
    pub total_commit_contributions:       u64,
    pub total_pull_request_contributions: u64,
    pub total_issue_contributions:        u64,
    pub contribution_calendar:            ContributionCalendar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar
{
    pub total_contributions: u64,
    #[serde(default)]
    pub weeks:               Vec<ContributionWeek,>,
}

/// Organization profile statistics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationStats
{
    #[serde(default)]
    pub name:             Option<String,>,
    pub login:            String,
    pub avatar_url:       String,
    #[serde(default)]
    pub description:      Option<String,>,
    #[serde(default)]
    pub location:         Option<String,>,
    #[serde(default)]
    pub website_url:      Option<String,>,
    #[serde(default)]
    pub twitter_username: Option<String,>,
    pub repositories:     RepositoryConnection,
}
