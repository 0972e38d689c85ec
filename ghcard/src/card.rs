// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Assembly of [`CardData`] from upstream statistics.
//!
//! Pure data shaping: picks the fields each card kind shows, runs the
//! aggregation and language distribution, and sets the discriminant. Text
//! fields are passed through untouched; truncation belongs to the renderer.

use crate::{
    aggregate::aggregate,
    languages::distribute,
    model::{
        CardData, Contributions, OrganizationCard, RepoCard, UserCard, WeightedLanguage,
    },
    source::{OrganizationStats, RepositoryStats, UserStats},
};

/// Number of trailing contribution weeks kept on user cards.
pub const CONTRIBUTION_WEEKS: usize = 10;

/// Builds a repository card; languages are weighted by byte size.
pub fn repository_card(stats: RepositoryStats,) -> CardData
{
    let commits = stats.commit_count();
    let weighted = stats
        .languages
        .edges
        .into_iter()
        .map(|edge| WeightedLanguage {
            color:  edge.node.display_color().to_owned(),
            name:   edge.node.name,
            weight: edge.size,
        },)
        .collect();

    CardData::Repo(RepoCard {
        name: stats.name,
        description: stats.description,
        owner: stats.owner.login,
        avatar_url: stats.owner.avatar_url,
        stars: stats.stargazer_count,
        forks: stats.fork_count,
        issues: stats.open_issues.total_count,
        watchers: stats.watchers.total_count,
        commits,
        languages: distribute(weighted,),
    },)
}

/// Builds a user card; languages are weighted by repository count.
pub fn user_card(stats: UserStats,) -> CardData
{
    let totals = aggregate(&stats.repositories.nodes,);
    let contributions = stats.contributions_collection;
    let mut weeks = contributions.contribution_calendar.weeks;
    let recent = weeks.len().saturating_sub(CONTRIBUTION_WEEKS,);
    let calendar = weeks.split_off(recent,);

    CardData::User(UserCard {
        name: display_name(stats.name, &stats.login,),
        username: stats.login,
        avatar_url: stats.avatar_url,
        bio: stats.bio,
        location: stats.location,
        company: stats.company,
        total_stars: totals.total_stars,
        total_forks: totals.total_forks,
        total_repos: stats.repositories.total_count,
        total_commits: contributions.total_commit_contributions,
        total_prs: contributions.total_pull_request_contributions,
        followers: stats.followers.total_count,
        following: stats.following.total_count,
        languages: distribute(totals.language_tally.into_weighted(),),
        contributions: Contributions {
            total: contributions.contribution_calendar.total_contributions,
            calendar,
        },
    },)
}

/// Builds an organization card; languages are weighted by repository count.
pub fn organization_card(stats: OrganizationStats,) -> CardData
{
    let totals = aggregate(&stats.repositories.nodes,);

    CardData::Organization(OrganizationCard {
        name:             display_name(stats.name, &stats.login,),
        username:         stats.login,
        avatar_url:       stats.avatar_url,
        description:      stats.description,
        location:         stats.location,
        website_url:      stats.website_url,
        twitter_username: stats.twitter_username,
        total_stars:      totals.total_stars,
        total_forks:      totals.total_forks,
        total_repos:      stats.repositories.total_count,
        languages:        distribute(totals.language_tally.into_weighted(),),
    },)
}

fn display_name(name: Option<String,>, login: &str,) -> String
{
    name.filter(|value| !value.is_empty(),).unwrap_or_else(|| login.to_owned(),)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{
        model::{ContributionDay, ContributionWeek, PrimaryLanguage, RawRepoSummary},
        source::{
            ContributionCalendar, ContributionsCollection, LanguageConnection, LanguageEdge,
            RepositoryConnection, RepositoryOwner, TotalCount,
        },
    };

    fn week(day: &str,) -> ContributionWeek
    {
        ContributionWeek {
            contribution_days: vec![ContributionDay {
                contribution_count: 1,
                date:               day.to_owned(),
                color:              "#9be9a8".to_owned(),
            }],
        }
    }

    fn node(stars: u64, language: Option<&str,>,) -> RawRepoSummary
    {
        RawRepoSummary {
            stargazer_count:  stars,
            fork_count:       1,
            primary_language: language.map(|name| PrimaryLanguage {
                name:  name.to_owned(),
                color: Some("#123456".to_owned(),),
            },),
        }
    }

    fn user(name: Option<&str,>, weeks: usize,) -> UserStats
    {
        UserStats {
            name:                     name.map(str::to_owned,),
            login:                    "octocat".to_owned(),
            avatar_url:               "https://avatars.example/octocat".to_owned(),
            bio:                      None,
            location:                 Some("San Francisco".to_owned(),),
            company:                  Some("@github".to_owned(),),
            twitter_username:         None,
            followers:                TotalCount {
                total_count: 20,
            },
            following:                TotalCount {
                total_count: 9,
            },
            repositories:             RepositoryConnection {
                total_count: 8,
                nodes:       vec![node(10, Some("Ruby",),), node(5, None,), node(1, Some("Ruby",),)],
            },
            contributions_collection: ContributionsCollection {
                total_commit_contributions:       120,
                total_pull_request_contributions: 7,
                total_issue_contributions:        3,
                contribution_calendar:            ContributionCalendar {
                    total_contributions: 300,
                    weeks:               (0..weeks).map(|index| week(&format!("w{index}"),),).collect(),
                },
            },
        }
    }

    #[test]
    fn user_card_maps_profile_and_totals()
    {
        let card = user_card(user(Some("The Octocat",), 3,),);
        let CardData::User(card,) = card else {
            panic!("expected user card");
        };

        assert_eq!(card.name, "The Octocat");
        assert_eq!(card.username, "octocat");
        assert_eq!(card.total_stars, 16);
        assert_eq!(card.total_forks, 3);
        assert_eq!(card.total_repos, 8);
        assert_eq!(card.total_commits, 120);
        assert_eq!(card.total_prs, 7);
        assert_eq!(card.followers, 20);
        assert_eq!(card.following, 9);
        assert_eq!(card.languages.len(), 1);
        assert_eq!(card.languages[0].name, "Ruby");
        assert_eq!(card.languages[0].percentage, 100);
        assert_eq!(card.contributions.total, 300);
        assert_eq!(card.contributions.calendar.len(), 3);
    }

    #[test]
    fn user_card_falls_back_to_login_for_missing_or_empty_name()
    {
        for name in [None, Some("",)] {
            let CardData::User(card,) = user_card(user(name, 0,),) else {
                panic!("expected user card");
            };
            assert_eq!(card.name, "octocat");
        }
    }

    #[test]
    fn user_card_keeps_last_ten_weeks()
    {
        let CardData::User(card,) = user_card(user(None, 52,),) else {
            panic!("expected user card");
        };

        let calendar = &card.contributions.calendar;
        assert_eq!(calendar.len(), CONTRIBUTION_WEEKS);
        assert_eq!(calendar[0].contribution_days[0].date, "w42");
        assert_eq!(calendar[9].contribution_days[0].date, "w51");
    }

    #[test]
    fn organization_card_with_no_repositories_has_no_languages()
    {
        let card = organization_card(OrganizationStats {
            name:             None,
            login:            "empty-org".to_owned(),
            avatar_url:       "https://avatars.example/org".to_owned(),
            description:      Some("Nothing yet".to_owned(),),
            location:         None,
            website_url:      None,
            twitter_username: Some("emptyorg".to_owned(),),
            repositories:     RepositoryConnection::default(),
        },);

        let CardData::Organization(card,) = card else {
            panic!("expected organization card");
        };
        assert_eq!(card.name, "empty-org");
        assert_eq!(card.total_stars, 0);
        assert_eq!(card.total_forks, 0);
        assert!(card.languages.is_empty());
        assert_eq!(card.twitter_username.as_deref(), Some("emptyorg"));
    }

    #[test]
    fn repository_card_distributes_by_byte_size()
    {
        let edge = |name: &str, size: u64| LanguageEdge {
            size,
            node: PrimaryLanguage {
                name:  name.to_owned(),
                color: None,
            },
        };

        let card = repository_card(RepositoryStats {
            name:               "Hello-World".to_owned(),
            description:        Some("My first repository".to_owned(),),
            stargazer_count:    2500,
            fork_count:         2100,
            open_issues:        TotalCount {
                total_count: 900,
            },
            watchers:           TotalCount {
                total_count: 1700,
            },
            owner:              RepositoryOwner {
                login:      "octocat".to_owned(),
                avatar_url: "https://avatars.example/octocat".to_owned(),
            },
            languages:          LanguageConnection {
                total_size: 100,
                edges:      vec![edge("C", 20,), edge("Rust", 50,), edge("Go", 30,)],
            },
            default_branch_ref: None,
        },);

        let CardData::Repo(card,) = card else {
            panic!("expected repository card");
        };
        assert_eq!(card.owner, "octocat");
        assert_eq!(card.issues, 900);
        assert_eq!(card.watchers, 1700);
        assert_eq!(card.commits, 0);
        let shares: Vec<(&str, u8,),> =
            card.languages.iter().map(|share| (share.name.as_str(), share.percentage,),).collect();
        assert_eq!(shares, [("Rust", 50,), ("Go", 30,), ("C", 20,)]);
        assert_eq!(card.languages[0].color, crate::model::FALLBACK_LANGUAGE_COLOR);
    }
}
