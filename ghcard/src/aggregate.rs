// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Reduction of a repository collection into card totals.
///
/// Forks of other repositories are excluded by the upstream query, so every
/// summary handed to [`aggregate`] counts.
use crate::model::{LanguageTally, RawRepoSummary};

/// Totals derived from the repositories of a user or organization.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct RepositoryTotals
{
    pub total_stars:    u64,
    pub total_forks:    u64,
    pub language_tally: LanguageTally,
}

/// Sums stars and forks and tallies primary languages.
///
/// Repositories without a primary language still count towards the star and
/// fork totals.
///
/// # Example
///
/// ```
/// use ghcard::{PrimaryLanguage, RawRepoSummary, aggregate};
///
/// let repos = vec![
///     RawRepoSummary {
///         stargazer_count:  10,
///         fork_count:       2,
///         primary_language: Some(PrimaryLanguage {
///             name:  "Rust".to_owned(),
///             color: Some("#dea584".to_owned(),),
///         },),
///     },
///     RawRepoSummary {
///         stargazer_count: 1, fork_count: 0, primary_language: None,
///     },
/// ];
///
/// let totals = aggregate(&repos,);
/// assert_eq!(totals.total_stars, 11);
/// assert_eq!(totals.language_tally.count("Rust"), Some(1));
/// ```
pub fn aggregate(repos: &[RawRepoSummary],) -> RepositoryTotals
{
    let mut totals = RepositoryTotals::default();

    for repo in repos {
        totals.total_stars += repo.stargazer_count;
        totals.total_forks += repo.fork_count;

        if let Some(language,) = &repo.primary_language {
            totals.language_tally.record(language,);
        }
    }

    totals
}
