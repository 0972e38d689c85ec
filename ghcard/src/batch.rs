// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Sequential resolution of many card inputs.
///
/// Each input runs through its own resolution; a failure is recorded in the
/// outcome list and does not stop the remaining inputs.
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use crate::{model::CardData, resolver::resolve, source::StatsSource};

/// Result of resolving one batch input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BatchOutcome
{
    Ok
    {
        input: String,
        card:  CardData,
    },
    Failed
    {
        input:       String,
        error:       String,
        #[serde(rename = "httpStatus")]
        http_status: u16,
    },
}

impl BatchOutcome
{
    /// Returns `true` for resolved inputs.
    pub fn is_ok(&self,) -> bool
    {
        matches!(self, Self::Ok { .. })
    }
}

/// Resolves `inputs` one after another.
///
/// # Arguments
///
/// * `source` - Data source shared by every lookup
/// * `inputs` - Identifiers in output order
/// * `progress` - Shows a spinner on stderr when `true`
///
/// # Example
///
/// ```no_run
/// use ghcard::{Credentials, GithubSource, resolve_batch};
///
/// # async fn example() -> Result<(), ghcard::Error> {
/// let source = GithubSource::new(&Credentials::from_env()?,)?;
/// let inputs = vec!["octocat".to_owned(), "rust-lang/rust".to_owned()];
/// let outcomes = resolve_batch(&source, &inputs, false,).await;
/// assert_eq!(outcomes.len(), 2);
/// # Ok(())
/// # }
/// ```
pub async fn resolve_batch<S,>(
    source: &S,
    inputs: &[String],
    progress: bool,
) -> Vec<BatchOutcome,>
where
    S: StatsSource,
{
    let pb = if progress { ProgressBar::new_spinner() } else { ProgressBar::hidden() };
    if let Ok(style,) =
        ProgressStyle::default_spinner().template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
    {
        pb.set_style(style,);
    }

    let mut outcomes = Vec::with_capacity(inputs.len(),);
    for (position, input,) in inputs.iter().enumerate() {
        pb.set_message(format!("Resolving {input} ({}/{})...", position + 1, inputs.len()),);

        let outcome = match resolve(source, input,).await {
            Ok(card,) => BatchOutcome::Ok {
                input: input.clone(),
                card,
            },
            Err(error,) => {
                warn!("Failed to resolve {}: {}", input, error);
                BatchOutcome::Failed {
                    input:       input.clone(),
                    http_status: error.http_status(),
                    error:       error.to_display_string(),
                }
            }
        };

        outcomes.push(outcome,);
        pb.tick();
    }

    let resolved = outcomes.iter().filter(|outcome| outcome.is_ok(),).count();
    pb.finish_with_message(format!("Resolved {resolved}/{} cards", inputs.len()),);
    info!("Resolved {} of {} batch inputs", resolved, inputs.len());

    outcomes
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::{
        error::Error,
        source::{OrganizationStats, RepositoryConnection, RepositoryStats, UserStats},
    };

    /// Source that only knows the organization `rust-lang`.
    struct SingleOrganization;

    impl StatsSource for SingleOrganization
    {
        async fn repository(&self, owner: &str, name: &str,) -> Result<RepositoryStats, Error,>
        {
            Err(Error::upstream(format!("{owner}/{name}: 502 Bad Gateway"),),)
        }

        async fn user(&self, login: &str,) -> Result<UserStats, Error,>
        {
            Err(Error::not_found(format!("no user {login}"),),)
        }

        async fn organization(&self, login: &str,) -> Result<OrganizationStats, Error,>
        {
            if login != "rust-lang" {
                return Err(Error::not_found(format!("no organization {login}"),),);
            }

            Ok(OrganizationStats {
                name:             Some("The Rust Programming Language".to_owned(),),
                login:            login.to_owned(),
                avatar_url:       "https://avatars.example/rust-lang".to_owned(),
                description:      None,
                location:         None,
                website_url:      Some("https://www.rust-lang.org".to_owned(),),
                twitter_username: None,
                repositories:     RepositoryConnection::default(),
            },)
        }
    }

    #[tokio::test]
    async fn failures_do_not_stop_remaining_inputs()
    {
        let inputs = vec!["ghost".to_owned(), "rust-lang".to_owned(), "rust-lang/rust".to_owned()];

        let outcomes = resolve_batch(&SingleOrganization, &inputs, false,).await;

        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].is_ok());
        assert!(outcomes[1].is_ok());
        match &outcomes[2] {
            BatchOutcome::Failed {
                input,
                error,
                http_status,
            } => {
                assert_eq!(input, "rust-lang/rust");
                assert_eq!(error, "upstream error: rust-lang/rust: 502 Bad Gateway");
                assert_eq!(*http_status, 502);
            }
            other => panic!("expected failed outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn outcomes_serialize_with_status_tag()
    {
        let inputs = vec!["rust-lang".to_owned(), "ghost".to_owned()];

        let outcomes = resolve_batch(&SingleOrganization, &inputs, false,).await;
        let json = serde_json::to_value(&outcomes,).expect("serialization failed",);

        assert_eq!(json[0]["status"], "ok");
        assert_eq!(json[0]["card"]["type"], "organization");
        assert_eq!(json[1]["status"], "failed");
        assert_eq!(json[1]["httpStatus"], 404);
        assert_eq!(json[1]["error"], "not found: no user ghost");
    }
}
