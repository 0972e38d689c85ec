// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Data shapes flowing through the card pipeline.
//!
//! Upstream summaries deserialize straight from GitHub GraphQL payloads
//! (camelCase). Card types serialize into the tagged JSON document consumed
//! by the renderer, also camelCase with a `type` discriminant.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Color used for languages GitHub does not assign a color to.
pub const FALLBACK_LANGUAGE_COLOR: &str = "#858585";

/// Language reported by GitHub for a repository or a language edge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct PrimaryLanguage
{
    pub name:  String,
    /// Hex color such as `#dea584`; GitHub leaves a few languages uncolored.
    #[serde(default)]
    pub color: Option<String,>,
}

impl PrimaryLanguage
{
    /// Returns the language color or [`FALLBACK_LANGUAGE_COLOR`].
    pub fn display_color(&self,) -> &str
    {
        self.color.as_deref().unwrap_or(FALLBACK_LANGUAGE_COLOR,)
    }
}

/// Per-repository summary produced by the upstream source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct RawRepoSummary
{
    pub stargazer_count:  u64,
    pub fork_count:       u64,
    #[serde(default)]
    pub primary_language: Option<PrimaryLanguage,>,
}

/// One language accumulated in a [`LanguageTally`].
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct TallyEntry
{
    pub name:  String,
    pub color: String,
    pub count: u64,
}

/// Language frequency table accumulated across a repository collection.
///
/// Names are unique. Entries remember the order in which languages were
/// first encountered so that ties in the language distribution resolve
/// deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct LanguageTally
{
    entries: Vec<TallyEntry,>,
    index:   HashMap<String, usize,>,
}

impl LanguageTally
{
    /// Creates an empty tally.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Counts one more repository for `language`.
    ///
    /// The color seen first for a name is kept.
    pub fn record(&mut self, language: &PrimaryLanguage,)
    {
        if let Some(&position,) = self.index.get(&language.name,) {
            self.entries[position].count += 1;
            return;
        }

        self.index.insert(language.name.clone(), self.entries.len(),);
        self.entries.push(TallyEntry {
            name:  language.name.clone(),
            color: language.display_color().to_owned(),
            count: 1,
        },);
    }

    /// Returns the repository count recorded for `name`.
    pub fn count(&self, name: &str,) -> Option<u64,>
    {
        self.index.get(name,).map(|&position| self.entries[position].count,)
    }

    /// Returns the number of distinct languages.
    pub fn len(&self,) -> usize
    {
        self.entries.len()
    }

    /// Returns `true` when no language was recorded.
    pub fn is_empty(&self,) -> bool
    {
        self.entries.is_empty()
    }

    /// Iterates entries in first-encounter order.
    pub fn iter(&self,) -> impl Iterator<Item = &TallyEntry,>
    {
        self.entries.iter()
    }

    /// Converts the tally into count-weighted languages, keeping encounter
    /// order.
    pub fn into_weighted(self,) -> Vec<WeightedLanguage,>
    {
        self.entries
            .into_iter()
            .map(|entry| WeightedLanguage {
                name:   entry.name,
                color:  entry.color,
                weight: entry.count,
            },)
            .collect()
    }
}

/// Language paired with a raw weight: a repository count for users and
/// organizations, a byte size for repositories.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct WeightedLanguage
{
    pub name:   String,
    pub color:  String,
    pub weight: u64,
}

/// Display-ready language entry with an integer percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct LanguageShare
{
    pub name:       String,
    pub color:      String,
    pub percentage: u8,
}

/// Normalized card document handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CardData
{
    Repo(RepoCard,),
    User(UserCard,),
    Organization(OrganizationCard,),
}

impl CardData
{
    /// Discriminant as serialized in the `type` field.
    pub fn kind(&self,) -> &'static str
    {
        match self {
            Self::Repo(_,) => "repo",
            Self::User(_,) => "user",
            Self::Organization(_,) => "organization",
        }
    }

    /// Language distribution carried by any card kind.
    pub fn languages(&self,) -> &[LanguageShare]
    {
        match self {
            Self::Repo(card,) => &card.languages,
            Self::User(card,) => &card.languages,
            Self::Organization(card,) => &card.languages,
        }
    }
}

/// Card describing a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct RepoCard
{
    pub name:        String,
    pub description: Option<String,>,
    pub owner:       String,
    pub avatar_url:  String,
    pub stars:       u64,
    pub forks:       u64,
    pub issues:      u64,
    pub watchers:    u64,
    pub commits:     u64,
    pub languages:   Vec<LanguageShare,>,
}

/// Card describing a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct UserCard
{
    pub name:          String,
    pub username:      String,
    pub avatar_url:    String,
    pub bio:           Option<String,>,
    pub location:      Option<String,>,
    pub company:       Option<String,>,
    pub total_stars:   u64,
    pub total_forks:   u64,
    pub total_repos:   u64,
    pub total_commits: u64,
    #[serde(rename = "totalPRs")]
    pub total_prs:     u64,
    pub followers:     u64,
    pub following:     u64,
    pub languages:     Vec<LanguageShare,>,
    pub contributions: Contributions,
}

/// Contribution summary shown on user cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
pub struct Contributions
{
    pub total:    u64,
    pub calendar: Vec<ContributionWeek,>,
}

/// One week of the contribution calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek
{
    pub contribution_days: Vec<ContributionDay,>,
}

/// One day of the contribution calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay
{
    pub contribution_count: u64,
    pub date:               String,
    pub color:              String,
}

/// Card describing an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationCard
{
    pub name:             String,
    pub username:         String,
    pub avatar_url:       String,
    pub description:      Option<String,>,
    pub location:         Option<String,>,
    pub website_url:      Option<String,>,
    pub twitter_username: Option<String,>,
    pub total_stars:      u64,
    pub total_forks:      u64,
    pub total_repos:      u64,
    pub languages:        Vec<LanguageShare,>,
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn language(name: &str, color: Option<&str,>,) -> PrimaryLanguage
    {
        PrimaryLanguage {
            name:  name.to_owned(),
            color: color.map(str::to_owned,),
        }
    }

    #[test]
    fn tally_keeps_first_seen_color()
    {
        let mut tally = LanguageTally::new();
        tally.record(&language("Rust", Some("#dea584",),),);
        tally.record(&language("Rust", Some("#000000",),),);

        let entry = tally.iter().next().expect("entry recorded",);
        assert_eq!(entry.color, "#dea584");
        assert_eq!(entry.count, 2);
    }

    #[test]
    fn tally_uses_fallback_color_for_uncolored_languages()
    {
        let mut tally = LanguageTally::new();
        tally.record(&language("Roff", None,),);

        let weighted = tally.into_weighted();
        assert_eq!(weighted[0].color, FALLBACK_LANGUAGE_COLOR);
    }

    #[test]
    fn tally_preserves_encounter_order()
    {
        let mut tally = LanguageTally::new();
        for name in ["Go", "Rust", "Go", "C"] {
            tally.record(&language(name, Some("#fff",),),);
        }

        let names: Vec<&str,> = tally.iter().map(|entry| entry.name.as_str(),).collect();
        assert_eq!(names, ["Go", "Rust", "C"]);
        assert_eq!(tally.count("Go"), Some(2));
        assert_eq!(tally.count("Zig"), None);
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn raw_repo_summary_accepts_null_primary_language()
    {
        let summary: RawRepoSummary = serde_json::from_str(
            r#"{"stargazerCount":3,"forkCount":1,"primaryLanguage":null}"#,
        )
        .expect("valid summary",);

        assert_eq!(summary.stargazer_count, 3);
        assert!(summary.primary_language.is_none());
    }

    #[test]
    fn card_data_serializes_with_type_tag()
    {
        let card = CardData::Organization(OrganizationCard {
            name:             "Rust".to_owned(),
            username:         "rust-lang".to_owned(),
            avatar_url:       "https://avatars.example/rust".to_owned(),
            description:      None,
            location:         None,
            website_url:      Some("https://www.rust-lang.org".to_owned(),),
            twitter_username: None,
            total_stars:      10,
            total_forks:      2,
            total_repos:      3,
            languages:        vec![LanguageShare {
                name:       "Rust".to_owned(),
                color:      "#dea584".to_owned(),
                percentage: 100,
            }],
        },);

        let json = serde_json::to_value(&card,).expect("serialization failed",);
        assert_eq!(json["type"], "organization");
        assert_eq!(json["websiteUrl"], "https://www.rust-lang.org");
        assert_eq!(json["languages"][0]["percentage"], 100);
        assert_eq!(card.kind(), "organization");
    }
}
