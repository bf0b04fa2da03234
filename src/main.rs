use tracing_subscriber::EnvFilter;

use redditui::cli::Flags;
use redditui::controllers;
use redditui::error::ReddituiError;
use redditui::models::{BoardClient, Config, Session};

#[tokio::main]
async fn main() -> Result<(), ReddituiError> {
    // Log to stderr so the alternate screen stays clean; silent unless
    // RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Get flags
    let flags = Flags::from_args();

    let mut config = Config::load()?;
    if let Some(endpoint) = flags.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(user) = flags.user {
        config.user = Some(user);
    }

    let session = Session::from_config(&config);
    let client = BoardClient::new(&config)?;

    controllers::start_app(client, session).await
}
