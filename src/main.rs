use anyhow::{Context, Result};

use epic_client::auth::{VerifyResponse, VerifyResponseWithPerms};
use epic_client::config::Config;
use epic_client::EpicClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (for log level)
    let config = Config::load()?;

    // Initialize logging with a configured level
    let log_level = config.log_level.to_lowercase();
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        grant_type = config.grant.grant_type(),
        auto_refresh = config.options.auto_refresh,
        reauthenticate = config.options.reauthenticate_on_double_expiry,
        "Epic client starting..."
    );

    let client = EpicClient::new(config.options.clone()).context("Failed to build HTTP client")?;

    let session = client
        .auth
        .authenticate(config.grant.clone())
        .await
        .context("Authentication failed")?;
    tracing::info!(
        account_id = %session.account_id,
        expires_at = %session.expires_at,
        "Authenticated"
    );

    let verified = if config.include_perms {
        let verified: VerifyResponseWithPerms = client
            .auth
            .verify(Some(true))
            .await
            .context("Token verification failed")?;
        serde_json::to_string_pretty(&verified)?
    } else {
        let verified: VerifyResponse = client
            .auth
            .verify(None)
            .await
            .context("Token verification failed")?;
        serde_json::to_string_pretty(&verified)?
    };

    println!("{}", verified);

    client.auth.shutdown();
    Ok(())
}
