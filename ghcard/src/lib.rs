//! Data resolution and aggregation for shareable GitHub profile cards.
//!
//! The library resolves an input string to a GitHub repository, user or
//! organization, aggregates its public statistics and derives a top-five
//! language distribution whose percentages sum to exactly 100. The result is
//! a tagged [`CardData`] document consumed by an external renderer.
//!
//! Pipeline: [`Identifier`] parsing and user-then-organization fallback in
//! [`resolve`], repository totals in [`aggregate`], percentages in
//! [`distribute`], and card assembly per entity kind.

mod aggregate;
mod batch;
mod card;
mod config;
mod error;
mod github;
mod identifier;
mod languages;
mod model;
mod resolver;
mod source;

pub use aggregate::{RepositoryTotals, aggregate};
pub use batch::{BatchOutcome, resolve_batch};
pub use card::{CONTRIBUTION_WEEKS, organization_card, repository_card, user_card};
pub use config::{API_URL_ENV, CardsConfig, Credentials, TOKEN_ENV, load_cards, parse_cards};
pub use error::{Error, io_error};
pub use github::{GithubSource, GraphQlError, GraphQlResponse, interpret_response};
pub use identifier::Identifier;
pub use languages::{MAX_LANGUAGES, distribute, largest_remainder};
pub use model::{
    CardData, ContributionDay, ContributionWeek, Contributions, FALLBACK_LANGUAGE_COLOR,
    LanguageShare, LanguageTally, OrganizationCard, PrimaryLanguage, RawRepoSummary, RepoCard,
    TallyEntry, UserCard, WeightedLanguage,
};
pub use resolver::{
    LoginMatch, fetch_card, resolve, resolve_login, resolve_organization, resolve_repository,
    resolve_user,
};
pub use source::{
    BranchRef, CommitTarget, ContributionCalendar, ContributionsCollection, LanguageConnection,
    LanguageEdge, OrganizationStats, RepositoryConnection, RepositoryOwner, RepositoryStats,
    StatsSource, TotalCount, UserStats,
};
