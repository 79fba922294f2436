use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==================================================================================================
// Request Parameters
// ==================================================================================================

/// MCP profile identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpProfileId {
    Athena,
    Creative,
    Campaign,
    CommonPublic,
    Collections,
    CommonCore,
    Metadata,
    CollectionBookPeople0,
    CollectionBookSchematics0,
    Outpost0,
    Theater0,
    Theater1,
    Theater2,
    RecycleBin,
}

impl McpProfileId {
    pub fn as_str(&self) -> &'static str {
        match self {
            McpProfileId::Athena => "athena",
            McpProfileId::Creative => "creative",
            McpProfileId::Campaign => "campaign",
            McpProfileId::CommonPublic => "common_public",
            McpProfileId::Collections => "collections",
            McpProfileId::CommonCore => "common_core",
            McpProfileId::Metadata => "metadata",
            McpProfileId::CollectionBookPeople0 => "collection_book_people0",
            McpProfileId::CollectionBookSchematics0 => "collection_book_schematics0",
            McpProfileId::Outpost0 => "outpost0",
            McpProfileId::Theater0 => "theater0",
            McpProfileId::Theater1 => "theater1",
            McpProfileId::Theater2 => "theater2",
            McpProfileId::RecycleBin => "recycle_bin",
        }
    }
}

/// MCP route: `client` for own-profile mutations, `public` for reads of others
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum McpRoute {
    #[default]
    Client,
    Public,
}

impl McpRoute {
    pub fn as_str(&self) -> &'static str {
        match self {
            McpRoute::Client => "client",
            McpRoute::Public => "public",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionCategory {
    Fish,
    Character,
}

impl CollectionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionCategory::Fish => "fish",
            CollectionCategory::Character => "character",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendCodeType {
    Epic,
    Xbox,
}

impl FriendCodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendCodeType::Epic => "epic",
            FriendCodeType::Xbox => "xbox",
        }
    }
}

/// Optional time bounds for account stats, in epoch seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsTimeWindow {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct BulkStatsOptions {
    /// Defaults to the authenticated account
    pub account_ids: Option<Vec<String>>,
    /// Defaults to the battle-pass level stats for every known season
    pub stats: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsQuery<'a> {
    pub app_id: &'a str,
    pub start_date: i64,
    pub end_date: i64,
    pub owners: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<String>>,
}

/// Stat names for the social battle-pass level of each season.
/// Seasons 1-10 predate the stat and are skipped.
pub fn battle_pass_levels(seasons: usize) -> Vec<String> {
    (1..=seasons)
        .skip(10)
        .map(|season| format!("s{}_social_bp_level", season))
        .collect()
}

// ==================================================================================================
// Response Models
// ==================================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrInventoryStash {
    pub globalcash: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrInventory {
    pub stash: BrInventoryStash,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default)]
    pub stats: HashMap<String, i64>,
    pub account_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendCode {
    pub code_id: String,
    pub code_type: String,
    pub date_created: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub app_store: String,
    pub app_store_id: String,
    pub receipt_id: String,
    pub receipt_info: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storefront {
    pub name: String,
    /// Entry shapes differ between item and currency storefronts
    pub catalog_entries: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontCatalog {
    pub refresh_interval_hrs: f64,
    pub daily_purchase_hrs: f64,
    pub expiration: String,
    pub storefronts: Vec<Storefront>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineActiveEvent {
    pub event_type: String,
    pub active_until: String,
    pub active_since: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineChannelState {
    pub valid_from: String,
    #[serde(default)]
    pub active_events: Vec<TimelineActiveEvent>,
    pub state: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineChannel {
    pub states: Vec<TimelineChannelState>,
    pub cache_expire: String,
}

/// Calendar timeline. Channels are keyed by name (`client-events`, `standalone-store`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub channels: HashMap<String, TimelineChannel>,
    pub cache_interval_mins: f64,
    pub current_time: String,
}

/// Save the World world info. Theater, mission and alert payloads are passed through as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StwWorldInfo {
    pub theaters: Vec<Value>,
    pub missions: Vec<Value>,
    pub mission_alerts: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortTrack {
    pub game_id: String,
    pub trackguid: String,
    pub ranking_type: String,
    pub begin_time: String,
    pub end_time: String,
    pub division_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub lower_rating_threshold: f64,
    pub upper_rating_threshold: f64,
    pub rating_grace: f64,
    pub track_top_players: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongTrack {
    pub game_id: String,
    pub trackguid: String,
    pub ranking_type: String,
    pub begin_time: String,
    pub end_time: String,
    pub divisions: Vec<Division>,
    pub first_week_rollover_time: String,
    pub leaderboard_tracking_event_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackProgress {
    pub game_id: String,
    pub trackguid: String,
    pub account_id: String,
    pub ranking_type: String,
    pub last_updated: String,
    pub current_division: u32,
    pub highest_division: u32,
    pub promotion_progress: f64,
    pub current_player_ranking: Option<i64>,
}
