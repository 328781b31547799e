//! Headless command-line front end for the TwitCasting client.
//!
//! Loads credentials from the environment (or a `.env` file), runs one
//! endpoint call, and prints the decoded response as JSON.

mod args;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use twitcasting_client::{AccessToken, ServiceLocator, TracingLogger, TwitCastingError};

use args::{Args, Command, auth};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Step 1: Tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Step 2: Environment, then arguments (which may read it)
    let explicit = std::env::var_os(ENV_FILE_VAR).map(PathBuf::from);
    let loaded = load_env_file(explicit.as_deref())
        .with_context(|| format!("failed to load the file named by {ENV_FILE_VAR}"))?;
    match loaded {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded env file"),
        None => tracing::debug!("No .env found, using process environment"),
    }
    let args = Args::parse();

    // Step 3: Client
    let token = AccessToken::from_env().context("CLIENT_ID and CLIENT_SECRET must be set")?;
    let locator = ServiceLocator::with_base_url(
        reqwest::Client::new(),
        Arc::new(TracingLogger),
        &token,
        args.base_url,
    )?;

    // Step 4: Call
    match run(&locator, &token, args.command).await {
        Ok(()) => Ok(()),
        Err(TwitCastingError::Api { status, error }) => {
            anyhow::bail!("API returned {status}: {error}")
        }
        Err(e) => Err(e.into()),
    }
}

async fn run(
    locator: &ServiceLocator,
    token: &AccessToken,
    command: Command,
) -> Result<(), TwitCastingError> {
    match command {
        Command::AuthorizeUrl { state } => {
            println!("{}", locator.auth.authorize_url(&token.client_id, &state));
            Ok(())
        }
        Command::ExchangeCode { code, redirect_uri } => print_json(
            &locator
                .auth
                .post_access_token(&token.client_id, &token.client_secret, &code, &redirect_uri)
                .await?,
        ),
        Command::Verify => print_json(&locator.user.verify_credentials().await?),
        Command::User { user_id, bearer } => {
            print_json(&locator.user.get_user(&user_id, auth(bearer)).await?)
        }
        Command::CurrentLive { user_id, bearer } => {
            print_json(&locator.movie.get_current_live(&user_id, auth(bearer)).await?)
        }
        Command::Comments {
            movie_id,
            limit,
            offset,
            bearer,
        } => print_json(
            &locator
                .comment
                .get_comments(&movie_id, limit, offset, auth(bearer))
                .await?,
        ),
        Command::Categories { lang, bearer } => {
            print_json(&locator.category.get_categories(&lang, auth(bearer)).await?)
        }
        Command::SearchUsers {
            words,
            limit,
            bearer,
        } => print_json(
            &locator
                .search
                .search_users(&words, limit, auth(bearer))
                .await?,
        ),
        Command::Webhooks { limit, offset } => {
            print_json(&locator.webhook.get_webhook_list(limit, offset).await?)
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), TwitCastingError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Variable naming an env file to load instead of searching for `.env`.
const ENV_FILE_VAR: &str = "TWITCASTING_ENV_FILE";

/// Load credentials from an env file into the process environment.
///
/// An explicit `path` must exist. Without one, `.env` is looked up from the
/// working directory upwards, so the binary finds the workspace `.env` when
/// run from a member crate; a missing `.env` is not an error.
fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match path {
        Some(path) => dotenvy::from_path(path).map(|()| Some(path.to_path_buf())),
        None => match dotenvy::dotenv() {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(e),
        },
    }
}
