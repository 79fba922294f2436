use serde::{Deserialize, Serialize};

/// Party members to send with a frontend discovery request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyMembers {
    /// Only the authenticated account
    OnlySelf,
    Accounts(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct FrontendOptions {
    pub matchmaking_region: String,
    pub platform: String,
    pub fortnite_version: String,
    pub party_member_ids: PartyMembers,
}

/// Request body for the discovery surface endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SurfaceRequest<'a> {
    pub surface_name: &'a str,
    pub revision: i32,
    pub party_member_ids: Vec<String>,
    pub matchmaking_region: &'a str,
    pub is_cabined: bool,
    pub platform: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorLink {
    pub link_code: String,
    pub last_activated_date: String,
    pub is_favorite: bool,
    #[serde(rename = "globalCCU")]
    pub global_ccu: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorPage {
    pub creator_id: String,
    pub links: Vec<CreatorLink>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub last_visited: Option<String>,
    pub link_code: String,
    pub is_favorite: bool,
    #[serde(rename = "globalCCU")]
    pub global_ccu: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub results: Vec<PageResult>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub panel_name: String,
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub test_cohorts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteResult {
    pub player_id: String,
    pub link_code: String,
    pub link_type: String,
    pub paging_date: String,
    #[serde(default)]
    pub last_visited: Option<String>,
    pub sort_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResult {
    pub player_id: String,
    pub link_code: String,
    pub link_type: String,
    pub paging_date: String,
    pub last_visited: String,
    pub is_favorite: bool,
}

/// Paged list of discovery results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History<R> {
    pub results: Vec<R>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FavoritesCheckRequest<'a> {
    pub link_codes: &'a [String],
}
