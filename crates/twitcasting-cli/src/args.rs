use clap::{Parser, Subcommand};
use twitcasting_client::{AuthMode, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(name = "twitcasting", version, about = "Call the TwitCasting API v2 from the command line")]
pub struct Args {
    /// API host, overridable for staging or local mocks.
    #[arg(long, env = "TWITCASTING_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the URL a user opens to authorize this app.
    AuthorizeUrl {
        #[arg(long, default_value = "")]
        state: String,
    },
    /// Exchange an authorization code for a bearer token.
    ExchangeCode {
        #[arg(long)]
        code: String,
        #[arg(long)]
        redirect_uri: String,
    },
    /// Show the app and user behind BEARER.
    Verify,
    /// Show a user's profile.
    User {
        user_id: String,
        #[arg(long)]
        bearer: bool,
    },
    /// Show the live a user is broadcasting now.
    CurrentLive {
        user_id: String,
        #[arg(long)]
        bearer: bool,
    },
    /// List comments of a movie.
    Comments {
        movie_id: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long)]
        bearer: bool,
    },
    /// List categories with live movies.
    Categories {
        #[arg(long, default_value = "ja")]
        lang: String,
        #[arg(long)]
        bearer: bool,
    },
    /// Search users by words.
    SearchUsers {
        words: String,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long)]
        bearer: bool,
    },
    /// List webhooks registered by this app.
    Webhooks {
        #[arg(long, default_value_t = 50)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

pub fn auth(bearer: bool) -> AuthMode {
    AuthMode::from_bearer_flag(bearer)
}
