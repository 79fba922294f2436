use anyhow::{Context, Result};
use clap::Parser;

use crate::auth::Grant;
use crate::endpoints::Endpoints;

/// Base64 `client_id:client_secret` pairs of known game clients
pub mod game_client {
    pub const IOS: &str =
        "MzQ0NmNkNzI2OTRjNGE0NDg1ZDgxYjc3YWRiYjIxNDE6OTIwOWQ0YTVlMjVhNDU3ZmI5YjA3NDg5ZDMxM2I0MWE=";
    pub const ANDROID: &str =
        "M2Y2OWU1NmM3NjQ5NDkyYzhjYzI5ZjFhZjA4YThhMTI6YjUxZWU5Y2IxMjIzNGY1MGE2OWVmYTY3ZWY1MzgxMmU=";
}

/// Default number of seasons used to derive battle-pass stat names
pub const DEFAULT_SEASONS_LENGTH: usize = 25;

/// Client behavior, fixed at construction
#[derive(Clone, Debug)]
pub struct ClientOptions {
    /// Refresh in the background when the access token expires
    pub auto_refresh: bool,

    /// Re-submit the original grant once both tokens have expired
    pub reauthenticate_on_double_expiry: bool,

    /// Basic-auth credential for the token endpoint
    pub game_client: String,

    pub seasons_length: usize,

    // HTTP client
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,

    pub endpoints: Endpoints,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            auto_refresh: false,
            reauthenticate_on_double_expiry: false,
            game_client: game_client::IOS.to_string(),
            seasons_length: DEFAULT_SEASONS_LENGTH,
            connect_timeout_secs: 30,
            request_timeout_secs: 30,
            endpoints: Endpoints::default(),
        }
    }
}

impl ClientOptions {
    pub fn auto_refresh(mut self, enabled: bool) -> Self {
        self.auto_refresh = enabled;
        self
    }

    pub fn reauthenticate_on_double_expiry(mut self, enabled: bool) -> Self {
        self.reauthenticate_on_double_expiry = enabled;
        self
    }

    pub fn game_client(mut self, game_client: impl Into<String>) -> Self {
        self.game_client = game_client.into();
        self
    }

    pub fn seasons_length(mut self, seasons: usize) -> Self {
        self.seasons_length = seasons;
        self
    }

    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn timeouts(mut self, connect_secs: u64, request_secs: u64) -> Self {
        self.connect_timeout_secs = connect_secs;
        self.request_timeout_secs = request_secs;
        self
    }
}

// === Command line ===

/// Epic Games API client - authenticate and inspect a session
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Grant type (client_credentials, authorization_code, exchange_code,
    /// device_auth, device_code, refresh_token, continuation_token,
    /// external_auth, otp)
    #[arg(short, long, env = "EPIC_GRANT", default_value = "client_credentials")]
    pub grant: String,

    /// Code or token for code-style grants (the external token for
    /// external_auth, the one-time password for otp)
    #[arg(short, long, env = "EPIC_CODE")]
    pub code: Option<String>,

    /// External platform type (external_auth)
    #[arg(long, env = "EPIC_EXTERNAL_AUTH_TYPE")]
    pub external_auth_type: Option<String>,

    /// MFA challenge (otp)
    #[arg(long, env = "EPIC_CHALLENGE")]
    pub challenge: Option<String>,

    /// Account id (device_auth)
    #[arg(long, env = "EPIC_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// Device id (device_auth)
    #[arg(long, env = "EPIC_DEVICE_ID")]
    pub device_id: Option<String>,

    /// Device secret (device_auth)
    #[arg(long, env = "EPIC_DEVICE_SECRET")]
    pub secret: Option<String>,

    /// Base64 client credentials used for token exchange
    #[arg(long, env = "EPIC_GAME_CLIENT")]
    pub game_client: Option<String>,

    /// Route every service to this base URL
    #[arg(long, env = "EPIC_BASE_URL")]
    pub base_url: Option<String>,

    /// Refresh the access token in the background
    #[arg(long, env = "EPIC_AUTO_REFRESH", default_value = "false")]
    pub auto_refresh: bool,

    /// Re-submit the grant when both tokens expire
    #[arg(long, env = "EPIC_REAUTHENTICATE", default_value = "false")]
    pub reauthenticate: bool,

    /// Ask the verify endpoint for permissions
    #[arg(long, default_value = "false")]
    pub include_perms: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HTTP_REQUEST_TIMEOUT", default_value = "30")]
    pub http_timeout: u64,
}

/// Resolved configuration for the command-line client
#[derive(Clone, Debug)]
pub struct Config {
    pub options: ClientOptions,
    pub grant: Grant,
    pub include_perms: bool,
    pub log_level: String,
}

impl Config {
    /// Load configuration with priority: CLI > ENV (.env included) > defaults
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_args(CliArgs::parse())
    }

    pub fn from_args(args: CliArgs) -> Result<Self> {
        let grant = parse_grant(&args)?;

        let mut options = ClientOptions::default()
            .auto_refresh(args.auto_refresh)
            .reauthenticate_on_double_expiry(args.reauthenticate);

        if let Some(game_client) = args.game_client {
            options = options.game_client(game_client);
        }
        if let Some(ref base) = args.base_url {
            options = options.endpoints(Endpoints::with_base(base));
        }

        options.connect_timeout_secs = std::env::var("HTTP_CONNECT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        options.request_timeout_secs = args.http_timeout;

        Ok(Config {
            options,
            grant,
            include_perms: args.include_perms,
            log_level: args.log_level,
        })
    }
}

/// Build a grant from the CLI flags for the requested grant type
fn parse_grant(args: &CliArgs) -> Result<Grant> {
    let code = || {
        args.code
            .clone()
            .with_context(|| format!("--code is required for grant type {}", args.grant))
    };

    let grant = match args.grant.to_lowercase().as_str() {
        "client_credentials" => Grant::ClientCredentials,
        "authorization_code" => Grant::AuthorizationCode { code: code()? },
        "exchange_code" => Grant::ExchangeCode {
            exchange_code: code()?,
        },
        "device_code" => Grant::DeviceCode {
            device_code: code()?,
        },
        "refresh_token" => Grant::RefreshToken {
            refresh_token: code()?,
        },
        "continuation_token" => Grant::ContinuationToken {
            continuation_token: code()?,
        },
        "device_auth" => Grant::DeviceAuth {
            account_id: args
                .account_id
                .clone()
                .context("--account-id is required for device_auth")?,
            device_id: args
                .device_id
                .clone()
                .context("--device-id is required for device_auth")?,
            secret: args
                .secret
                .clone()
                .context("--secret is required for device_auth")?,
        },
        "external_auth" => Grant::ExternalAuth {
            external_auth_type: args
                .external_auth_type
                .clone()
                .context("--external-auth-type is required for external_auth")?,
            external_auth_token: code()?,
        },
        "otp" => Grant::Otp {
            otp: code()?,
            challenge: args
                .challenge
                .clone()
                .context("--challenge is required for otp")?,
        },
        other => anyhow::bail!("Unsupported grant type: {}", other),
    };

    Ok(grant)
}
