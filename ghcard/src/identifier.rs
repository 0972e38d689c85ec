// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Classification of raw card inputs.
//!
//! A trimmed input with exactly one `/` splitting it into two non-empty
//! segments is a repository reference. Anything else is a login that may
//! belong to a user or an organization.

use std::fmt;

use crate::error::Error;

/// Parsed card identifier.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum Identifier
{
    /// Repository reference written as `owner/name`.
    Repo
    {
        /// Login of the owning user or organization.
        owner: String,
        /// Repository name.
        name:  String,
    },
    /// Singular login of a user or an organization.
    Login(String,),
}

impl Identifier
{
    /// Parses a raw input string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the input is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghcard::Identifier;
    ///
    /// let repo = Identifier::parse(" octocat/Hello-World ",)?;
    /// assert_eq!(repo, Identifier::Repo {
    ///     owner: "octocat".to_owned(),
    ///     name:  "Hello-World".to_owned(),
    /// });
    ///
    /// let login = Identifier::parse("octocat",)?;
    /// assert_eq!(login, Identifier::Login("octocat".to_owned()));
    /// # Ok::<(), ghcard::Error>(())
    /// ```
    pub fn parse(input: &str,) -> Result<Self, Error,>
    {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("identifier cannot be empty",),);
        }

        match trimmed.split_once('/',) {
            Some((owner, name,),)
                if !owner.is_empty() && !name.is_empty() && !name.contains('/',) =>
            {
                Ok(Self::Repo {
                    owner: owner.to_owned(),
                    name:  name.to_owned(),
                },)
            }
            _ => Ok(Self::Login(trimmed.to_owned(),),),
        }
    }
}

impl fmt::Display for Identifier
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        match self {
            Self::Repo {
                owner,
                name,
            } => write!(f, "{owner}/{name}"),
            Self::Login(login,) => f.write_str(login,),
        }
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::Identifier;

    proptest! {
        #[test]
        fn single_separator_always_yields_repo(owner in "[A-Za-z0-9-]{1,39}", name in "[A-Za-z0-9._-]{1,100}") {
            let parsed = Identifier::parse(&format!("{owner}/{name}")).expect("valid input");
            prop_assert_eq!(parsed, Identifier::Repo { owner, name });
        }

        #[test]
        fn inputs_without_separator_are_logins(login in "[A-Za-z0-9-]{1,39}") {
            let parsed = Identifier::parse(&login).expect("valid input");
            prop_assert_eq!(parsed, Identifier::Login(login));
        }
    }

    #[test]
    fn trims_surrounding_whitespace()
    {
        let parsed = Identifier::parse("  rust-lang/rust\n",).expect("valid input",);
        assert_eq!(parsed.to_string(), "rust-lang/rust");
    }

    #[test]
    fn empty_segments_fall_back_to_login()
    {
        assert_eq!(
            Identifier::parse("octocat/",).expect("valid input",),
            Identifier::Login("octocat/".to_owned())
        );
        assert_eq!(
            Identifier::parse("/octocat",).expect("valid input",),
            Identifier::Login("/octocat".to_owned())
        );
    }

    #[test]
    fn multiple_separators_fall_back_to_login()
    {
        let parsed = Identifier::parse("a/b/c",).expect("valid input",);
        assert_eq!(parsed, Identifier::Login("a/b/c".to_owned()));
    }

    #[test]
    fn rejects_blank_input()
    {
        let error = Identifier::parse("   ",).expect_err("expected validation error",);
        match error {
            crate::Error::Validation {
                message,
            } => assert_eq!(message, "identifier cannot be empty"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
