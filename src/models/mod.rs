// Data models for Epic web API payloads

pub mod account;
pub mod discovery;
pub mod fortnite;
pub mod friends;
