//! Command-line interface for the ghcard binary.
//!
//! The CLI resolves card inputs against the GitHub API and prints the
//! normalized card documents as JSON on stdout. Diagnostics go to stderr.

use std::{io, path::PathBuf, process};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use ghcard::{
    API_URL_ENV, CardData, Credentials, Error, GithubSource, Identifier, TOKEN_ENV, load_cards,
    resolve, resolve_batch, resolve_organization, resolve_repository, resolve_user,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Command line interface for generating profile card data.
#[derive(Debug, Parser,)]
#[command(name = "ghcard", version, about = "Resolve GitHub entities into profile card data")]
struct Cli
{
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    auth: AuthArgs,
}

/// Upstream credentials shared by every subcommand.
#[derive(Debug, Args,)]
struct AuthArgs
{
    /// GitHub token used for GraphQL requests.
    #[arg(long = "token", env = TOKEN_ENV, hide_env_values = true, global = true)]
    token: Option<String,>,

    /// GitHub API base URL, for GitHub Enterprise installations.
    #[arg(long = "api-url", env = API_URL_ENV, value_name = "URL", global = true)]
    api_url: Option<String,>,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Resolve a single login or `owner/name` reference.
    Card(CardArgs,),
    /// Resolve every input listed in a YAML batch document.
    Batch(BatchArgs,),
}

#[derive(Debug, Args,)]
struct CardArgs
{
    /// Login or `owner/name` repository reference.
    #[arg(value_name = "INPUT")]
    input: String,

    /// Entity kind to look up; `auto` falls back from user to organization.
    #[arg(long = "kind", value_enum, default_value_t = EntityKind::Auto)]
    kind: EntityKind,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args,)]
struct BatchArgs
{
    /// Path to the YAML document listing card inputs.
    #[arg(long = "config", value_name = "PATH")]
    config: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,

    /// Hide the progress spinner.
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum,)]
enum EntityKind
{
    Auto,
    User,
    Organization,
    Repo,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    init_tracing();

    if let Err(error,) = run().await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    tracing_subscriber::fmt().with_env_filter(filter,).with_writer(io::stderr,).init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, resolution and serialization errors.
async fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let credentials = Credentials::new(cli.auth.token.as_deref(), cli.auth.api_url.as_deref(),)?;
    let source = GithubSource::new(&credentials,)?;

    match cli.command {
        Command::Card(args,) => {
            let card = resolve_card(&source, &args.input, args.kind,).await?;
            write_json(&mut io::stdout().lock(), &card, args.pretty,)
        }
        Command::Batch(args,) => {
            let inputs = load_cards(&args.config,)?;
            let outcomes = resolve_batch(&source, &inputs, !args.quiet,).await;
            write_json(&mut io::stdout().lock(), &outcomes, args.pretty,)
        }
    }
}

async fn resolve_card(
    source: &GithubSource,
    input: &str,
    kind: EntityKind,
) -> Result<CardData, Error,>
{
    match kind {
        EntityKind::Auto => resolve(source, input,).await,
        EntityKind::User => resolve_user(source, &login_input(input,)?,).await,
        EntityKind::Organization => resolve_organization(source, &login_input(input,)?,).await,
        EntityKind::Repo => match Identifier::parse(input,)? {
            Identifier::Repo {
                owner,
                name,
            } => resolve_repository(source, &owner, &name,).await,
            Identifier::Login(login,) => Err(Error::validation(format!(
                "'{login}' is not an owner/name repository reference"
            ),),),
        },
    }
}

fn login_input(input: &str,) -> Result<String, Error,>
{
    match Identifier::parse(input,)? {
        Identifier::Login(login,) => Ok(login,),
        Identifier::Repo {
            ..
        } => Err(Error::validation(format!(
            "'{}' is a repository reference, not a login",
            input.trim()
        ),),),
    }
}

fn write_json<W, T,>(writer: &mut W, value: &T, pretty: bool,) -> Result<(), Error,>
where
    W: io::Write,
    T: Serialize + ?Sized,
{
    if pretty {
        serde_json::to_writer_pretty(writer, value,)?;
    } else {
        serde_json::to_writer(writer, value,)?;
    }

    Ok((),)
}
