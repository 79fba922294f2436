// Fortnite services
// Game, storefront, stats, calendar and ranked endpoints

use reqwest::Method;
use serde_json::Value;

use crate::auth::{AuthManager, FetchOptions};
use crate::error::{EpicError, Result};
use crate::friends::account_or_self;
use crate::models::fortnite::{
    battle_pass_levels, BrInventory, BulkStatsOptions, CollectionCategory, FriendCode,
    FriendCodeType, LongTrack, McpProfileId, McpRoute, Receipt, ShortTrack, Stats, StatsQuery,
    StatsTimeWindow, StorefrontCatalog, StwWorldInfo, Timeline, TrackProgress,
};

/// Namespace of Fortnite's ranked tracks
const HABANERO_NAMESPACE: &str = "fortnite";
const STATS_APP_ID: &str = "fortnite";

#[derive(Clone)]
pub struct FortniteManager {
    auth: AuthManager,
    seasons_length: usize,
}

impl FortniteManager {
    pub fn new(auth: AuthManager) -> Self {
        let seasons_length = auth.options().seasons_length;
        Self {
            auth,
            seasons_length,
        }
    }

    pub fn seasons_length(&self) -> usize {
        self.seasons_length
    }

    pub async fn get_br_inventory(&self, account_id: Option<&str>) -> Result<BrInventory> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().br_inventory(&account_id);
        self.auth.get(&url).await
    }

    /// Query stats for several accounts.
    /// Defaults to the session account and the battle-pass level of every known season.
    pub async fn get_bulk_stats(&self, options: BulkStatsOptions) -> Result<Vec<Stats>> {
        let owners = match options.account_ids {
            Some(ids) => ids,
            None => vec![self.auth.get_account_id()?],
        };
        let stats = options
            .stats
            .unwrap_or_else(|| battle_pass_levels(self.seasons_length));
        if stats.is_empty() {
            return Err(EpicError::InvalidRequest(
                "At least one stat must be included.".to_string(),
            ));
        }

        let body = StatsQuery {
            app_id: STATS_APP_ID,
            start_date: 0,
            end_date: 0,
            owners,
            stats: Some(stats),
        };
        let url = self.auth.endpoints().bulk_stats(None);
        self.auth
            .method(Method::POST, &url, &body, &FetchOptions::default())
            .await
    }

    pub async fn get_collection(
        &self,
        collection: CollectionCategory,
        account_ids: Option<Vec<String>>,
    ) -> Result<Vec<Stats>> {
        let owners = match account_ids {
            Some(ids) => ids,
            None => vec![self.auth.get_account_id()?],
        };
        let body = StatsQuery {
            app_id: STATS_APP_ID,
            start_date: 0,
            end_date: 0,
            owners,
            stats: None,
        };
        let url = self.auth.endpoints().bulk_stats(Some(collection));
        self.auth
            .method(Method::POST, &url, &body, &FetchOptions::default())
            .await
    }

    pub async fn get_stats(
        &self,
        account_id: Option<&str>,
        window: Option<&StatsTimeWindow>,
    ) -> Result<Stats> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().stats(&account_id, window);
        self.auth.get(&url).await
    }

    pub async fn get_catalog(&self) -> Result<StorefrontCatalog> {
        self.auth.get(&self.auth.endpoints().catalog()).await
    }

    pub async fn get_enabled_features(&self) -> Result<Vec<Value>> {
        self.auth.get(&self.auth.endpoints().enabled_features()).await
    }

    pub async fn get_keychain(&self) -> Result<Vec<String>> {
        self.auth.get(&self.auth.endpoints().keychain()).await
    }

    pub async fn get_friend_codes(
        &self,
        code_type: FriendCodeType,
        account_id: Option<&str>,
    ) -> Result<Vec<FriendCode>> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().friend_codes(&account_id, code_type);
        self.auth.get(&url).await
    }

    pub async fn get_receipts(&self, account_id: Option<&str>) -> Result<Vec<Receipt>> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().receipts(&account_id);
        self.auth.get(&url).await
    }

    pub async fn get_stw_world_info(&self) -> Result<StwWorldInfo> {
        self.auth.get(&self.auth.endpoints().stw_world_info()).await
    }

    pub async fn get_timeline(&self) -> Result<Timeline> {
        self.auth.get(&self.auth.endpoints().timeline()).await
    }

    // ==============================================================================================
    // Ranked
    // ==============================================================================================

    pub async fn get_track(&self, trackguid: &str) -> Result<LongTrack> {
        let url = self.auth.endpoints().track(HABANERO_NAMESPACE, trackguid);
        self.auth.get(&url).await
    }

    pub async fn get_tracks(&self) -> Result<Vec<ShortTrack>> {
        let url = self.auth.endpoints().tracks_query(HABANERO_NAMESPACE);
        self.auth.get(&url).await
    }

    /// Progress on every ranked track
    pub async fn get_tracks_progress(&self, account_id: Option<&str>) -> Result<Vec<TrackProgress>> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self
            .auth
            .endpoints()
            .tracks_progress(HABANERO_NAMESPACE, &account_id);
        self.auth.get(&url).await
    }

    pub async fn get_track_progress(
        &self,
        trackguid: &str,
        account_id: Option<&str>,
    ) -> Result<TrackProgress> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self
            .auth
            .endpoints()
            .track_progress(HABANERO_NAMESPACE, &account_id, trackguid);
        self.auth.get(&url).await
    }

    // ==============================================================================================
    // MCP
    // ==============================================================================================

    /// Run an MCP profile operation. `payload` defaults to an empty object.
    pub async fn post_mcp_operation(
        &self,
        operation: &str,
        profile_id: McpProfileId,
        payload: Option<&Value>,
        route: McpRoute,
        account_id: Option<&str>,
    ) -> Result<Value> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self
            .auth
            .endpoints()
            .mcp(&account_id, operation, route, profile_id);
        let empty = Value::Object(Default::default());
        let body = payload.unwrap_or(&empty);

        tracing::debug!(operation = operation, profile_id = profile_id.as_str(), "Posting MCP operation");
        self.auth
            .method(Method::POST, &url, body, &FetchOptions::default())
            .await
    }
}
