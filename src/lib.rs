// Epic Games web API client - library root

pub mod auth;
pub mod client;
pub mod config;
pub mod discovery;
pub mod endpoints;
pub mod error;
pub mod fortnite;
pub mod friends;
pub mod http_client;
pub mod models;

pub use auth::{AuthManager, AuthState, FetchOptions, Grant};
pub use client::EpicClient;
pub use config::ClientOptions;
pub use endpoints::Endpoints;
pub use error::{EpicError, Result};
