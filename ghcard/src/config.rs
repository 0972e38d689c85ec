// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime configuration: upstream credentials and batch documents.
//!
//! Credentials are checked once, before any client is built, so a missing
//! token never reaches the network. Batch documents are YAML files listing
//! the identifiers to resolve:
//!
//! ```yaml
//! cards:
//!   - octocat
//!   - rust-lang/rust
//! ```

use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;

use crate::error::{self, Error};

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Environment variable holding an optional GitHub API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Validated upstream credentials.
#[derive(Clone, PartialEq, Eq,)]
pub struct Credentials
{
    token:   String,
    api_url: Option<String,>,
}

impl Credentials
{
    /// Validates a token and an optional API base URL.
    ///
    /// Blank values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the token is absent or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghcard::Credentials;
    ///
    /// assert!(Credentials::new(None, None,).is_err());
    /// let credentials = Credentials::new(Some(" ghp_token ",), Some("",),)?;
    /// assert_eq!(credentials.token(), "ghp_token");
    /// assert_eq!(credentials.api_url(), None);
    /// # Ok::<(), ghcard::Error>(())
    /// ```
    pub fn new(token: Option<&str,>, api_url: Option<&str,>,) -> Result<Self, Error,>
    {
        let token = non_blank(token,)
            .ok_or_else(|| Error::configuration(format!("{TOKEN_ENV} is not defined"),),)?;

        Ok(Self {
            token:   token.to_owned(),
            api_url: non_blank(api_url,).map(str::to_owned,),
        },)
    }

    /// Reads [`TOKEN_ENV`] and [`API_URL_ENV`] from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the token is absent or blank.
    pub fn from_env() -> Result<Self, Error,>
    {
        let token = std::env::var(TOKEN_ENV,).ok();
        let api_url = std::env::var(API_URL_ENV,).ok();
        Self::new(token.as_deref(), api_url.as_deref(),)
    }

    /// Personal access token.
    pub fn token(&self,) -> &str
    {
        &self.token
    }

    /// GitHub API base URL override.
    pub fn api_url(&self,) -> Option<&str,>
    {
        self.api_url.as_deref()
    }
}

impl std::fmt::Debug for Credentials
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("Credentials",)
            .field("token", &"<redacted>",)
            .field("api_url", &self.api_url,)
            .finish()
    }
}

fn non_blank(value: Option<&str,>,) -> Option<&str,>
{
    value.map(str::trim,).filter(|value| !value.is_empty(),)
}

/// Batch document listing card inputs.
#[derive(Debug, Deserialize,)]
pub struct CardsConfig
{
    /// Raw identifiers, each a login or an `owner/name` reference.
    #[serde(default)]
    pub cards: Vec<String,>,
}

/// Loads and validates a batch document from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read, and the errors of
/// [`parse_cards`] otherwise.
pub fn load_cards(path: &Path,) -> Result<Vec<String,>, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_cards(&contents,)
}

/// Parses a batch document and returns its trimmed inputs in order.
///
/// # Errors
///
/// Propagates [`Error::Parse`] when the YAML cannot be decoded and
/// [`Error::Validation`] when the list is empty, contains blank entries, or
/// repeats an input.
///
/// # Examples
///
/// ```
/// use ghcard::parse_cards;
///
/// let cards = parse_cards("cards:\n  - ' octocat '\n  - rust-lang/rust\n",)?;
/// assert_eq!(cards, ["octocat", "rust-lang/rust"]);
/// # Ok::<(), ghcard::Error>(())
/// ```
pub fn parse_cards(contents: &str,) -> Result<Vec<String,>, Error,>
{
    let config: CardsConfig = serde_yaml::from_str(contents,)?;
    if config.cards.is_empty() {
        return Err(Error::validation("batch document must include at least one card",),);
    }

    let mut seen = HashSet::with_capacity(config.cards.len(),);
    let mut cards = Vec::with_capacity(config.cards.len(),);
    for raw in config.cards {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("card inputs cannot be empty strings",),);
        }

        if !seen.insert(trimmed.to_owned(),) {
            return Err(Error::validation(format!("duplicate card input '{trimmed}'"),),);
        }

        cards.push(trimmed.to_owned(),);
    }

    Ok(cards,)
}
