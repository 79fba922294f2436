// Endpoint resolver
// Maps operations and their parameters to fully-qualified URLs

use crate::models::account::ExternalAuthQueryType;
use crate::models::fortnite::{
    CollectionCategory, FriendCodeType, McpProfileId, McpRoute, StatsTimeWindow,
};
use crate::models::friends::{FriendsExternalSource, FriendsType};

const ACCOUNT_HOST: &str = "https://account-public-service-prod.ol.epicgames.com";
const FRIENDS_HOST: &str = "https://friends-public-service-prod.ol.epicgames.com";
const FRIENDS_EXTERNAL_HOST: &str = "https://friends-public-service-prod06.ol.epicgames.com";
const FORTNITE_HOST: &str = "https://fngw-mcp-gc-livefn.ol.epicgames.com";
const STATS_HOST: &str = "https://statsproxy-public-service-live.ol.epicgames.com";
const DISCOVERY_HOST: &str = "https://fn-service-discovery-live-public.ogs.live.on.epicgames.com";
const HABANERO_HOST: &str = "https://fn-service-habanero-live-public.ogs.live.on.epicgames.com";

/// Service hosts used to build request URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub account: String,
    pub friends: String,
    pub friends_external: String,
    pub fortnite: String,
    pub stats: String,
    pub discovery: String,
    pub habanero: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            account: ACCOUNT_HOST.to_string(),
            friends: FRIENDS_HOST.to_string(),
            friends_external: FRIENDS_EXTERNAL_HOST.to_string(),
            fortnite: FORTNITE_HOST.to_string(),
            stats: STATS_HOST.to_string(),
            discovery: DISCOVERY_HOST.to_string(),
            habanero: HABANERO_HOST.to_string(),
        }
    }
}

/// Percent-encode a single path segment
fn seg(s: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(s)
}

impl Endpoints {
    /// Route every service to the same base URL (mock servers, proxies)
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            account: base.clone(),
            friends: base.clone(),
            friends_external: base.clone(),
            fortnite: base.clone(),
            stats: base.clone(),
            discovery: base.clone(),
            habanero: base,
        }
    }

    // ==============================================================================================
    // Account service
    // ==============================================================================================

    pub fn access_token(&self) -> String {
        format!("{}/account/api/oauth/token", self.account)
    }

    pub fn verify(&self, include_perms: Option<bool>) -> String {
        match include_perms {
            Some(perms) => format!("{}/account/api/oauth/verify?includePerms={}", self.account, perms),
            None => format!("{}/account/api/oauth/verify", self.account),
        }
    }

    pub fn account_by_display_name(&self, display_name: &str) -> String {
        format!(
            "{}/account/api/public/account/displayName/{}",
            self.account,
            seg(display_name)
        )
    }

    pub fn account_by_external_display_name(
        &self,
        display_name: &str,
        auth_type: ExternalAuthQueryType,
    ) -> String {
        format!(
            "{}/account/api/public/account/lookup/externalAuth/{}/displayName/{}?caseInsensitive=true",
            self.account,
            auth_type.as_str(),
            seg(display_name)
        )
    }

    pub fn account_by_id(&self, account_id: &str) -> String {
        format!("{}/account/api/public/account/{}", self.account, seg(account_id))
    }

    pub fn device_auth(&self, account_id: &str) -> String {
        format!("{}/deviceAuth", self.account_by_id(account_id))
    }

    // ==============================================================================================
    // Friends service
    // ==============================================================================================

    pub fn friends(&self, account_id: &str, kind: FriendsType) -> String {
        format!("{}/friends/api/v1/{}/{}", self.friends, seg(account_id), kind.as_str())
    }

    pub fn friend(&self, account_id: &str, friend_id: &str) -> String {
        format!(
            "{}/friends/api/v1/{}/friends/{}",
            self.friends,
            seg(account_id),
            seg(friend_id)
        )
    }

    pub fn friend_alias(&self, account_id: &str, friend_id: &str) -> String {
        format!("{}/alias", self.friend(account_id, friend_id))
    }

    pub fn blocklist(&self, account_id: &str) -> String {
        format!("{}/friends/api/v1/{}/blocklist", self.friends, seg(account_id))
    }

    pub fn bulk_accept_incoming(&self, account_id: &str, target_ids: &[String]) -> String {
        let targets: Vec<_> = target_ids.iter().map(|id| seg(id)).collect();
        format!(
            "{}/friends/api/v1/{}/incoming/accept?targetIds={}",
            self.friends,
            seg(account_id),
            targets.join(",")
        )
    }

    pub fn friends_settings(&self, account_id: &str) -> String {
        format!("{}/friends/api/v1/{}/settings", self.friends, seg(account_id))
    }

    pub fn friends_external_settings(
        &self,
        account_id: &str,
        source: FriendsExternalSource,
    ) -> String {
        format!(
            "{}/friends/api/v1/{}/settings/externalSources/{}",
            self.friends_external,
            seg(account_id),
            source.as_str()
        )
    }

    // ==============================================================================================
    // Fortnite game services
    // ==============================================================================================

    pub fn br_inventory(&self, account_id: &str) -> String {
        format!(
            "{}/fortnite/api/game/v2/br-inventory/account/{}",
            self.fortnite,
            seg(account_id)
        )
    }

    pub fn catalog(&self) -> String {
        format!("{}/fortnite/api/storefront/v2/catalog", self.fortnite)
    }

    pub fn keychain(&self) -> String {
        format!("{}/fortnite/api/storefront/v2/keychain", self.fortnite)
    }

    pub fn enabled_features(&self) -> String {
        format!("{}/fortnite/api/game/v2/enabled_features", self.fortnite)
    }

    pub fn friend_codes(&self, account_id: &str, code_type: FriendCodeType) -> String {
        format!(
            "{}/fortnite/api/game/v2/friendcodes/{}/{}",
            self.fortnite,
            seg(account_id),
            code_type.as_str()
        )
    }

    pub fn mcp(
        &self,
        account_id: &str,
        operation: &str,
        route: McpRoute,
        profile_id: McpProfileId,
    ) -> String {
        format!(
            "{}/fortnite/api/game/v2/profile/{}/{}/{}?profileId={}&rvn=-1",
            self.fortnite,
            seg(account_id),
            route.as_str(),
            seg(operation),
            profile_id.as_str()
        )
    }

    pub fn receipts(&self, account_id: &str) -> String {
        format!(
            "{}/fortnite/api/receipts/v1/account/{}/receipts",
            self.fortnite,
            seg(account_id)
        )
    }

    pub fn stw_world_info(&self) -> String {
        format!("{}/fortnite/api/game/v2/world/info", self.fortnite)
    }

    pub fn timeline(&self) -> String {
        format!("{}/fortnite/api/calendar/v1/timeline", self.fortnite)
    }

    // ==============================================================================================
    // Stats proxy
    // ==============================================================================================

    pub fn bulk_stats(&self, category: Option<CollectionCategory>) -> String {
        let base = format!("{}/statsproxy/api/statsv2/query", self.stats);
        match category {
            Some(category) => format!("{}?category=collection_{}", base, category.as_str()),
            None => base,
        }
    }

    pub fn stats(&self, account_id: &str, window: Option<&StatsTimeWindow>) -> String {
        let base = format!("{}/statsproxy/api/statsv2/account/{}", self.stats, seg(account_id));
        let mut params = Vec::new();
        if let Some(window) = window {
            if let Some(start) = window.start_time {
                params.push(format!("startTime={}", start));
            }
            if let Some(end) = window.end_time {
                params.push(format!("endTime={}", end));
            }
        }
        if params.is_empty() {
            base
        } else {
            format!("{}?{}", base, params.join("&"))
        }
    }

    // ==============================================================================================
    // Discovery service
    // ==============================================================================================

    pub fn creator_page(&self, creator_account_id: &str, player_id: &str, limit: u32) -> String {
        format!(
            "{}/api/v1/creator/page/{}?playerId={}&limit={}",
            self.discovery,
            seg(creator_account_id),
            seg(player_id),
            limit
        )
    }

    pub fn discovery_favorites(&self, account_id: &str) -> String {
        format!("{}/api/v1/links/favorites/{}", self.discovery, seg(account_id))
    }

    pub fn discovery_favorite(&self, account_id: &str, link_code: &str) -> String {
        format!("{}/{}", self.discovery_favorites(account_id), seg(link_code))
    }

    pub fn discovery_favorites_check(&self, account_id: &str) -> String {
        format!("{}/check", self.discovery_favorites(account_id))
    }

    pub fn discovery_history(&self, account_id: &str, limit: Option<u32>) -> String {
        let base = format!("{}/api/v1/links/history/{}", self.discovery, seg(account_id));
        match limit {
            Some(limit) => format!("{}?limit={}", base, limit),
            None => base,
        }
    }

    pub fn discovery_history_entry(&self, account_id: &str, link_code: &str) -> String {
        format!("{}/{}", self.discovery_history(account_id, None), seg(link_code))
    }

    pub fn discovery_surface(&self, account_id: &str, app_id: &str) -> String {
        format!(
            "{}/api/v1/discovery/surface/{}?appId={}",
            self.discovery,
            seg(account_id),
            seg(app_id)
        )
    }

    // ==============================================================================================
    // Habanero (ranked)
    // ==============================================================================================

    pub fn track(&self, namespace: &str, trackguid: &str) -> String {
        format!(
            "{}/api/v1/games/{}/tracks/{}",
            self.habanero,
            seg(namespace),
            seg(trackguid)
        )
    }

    pub fn tracks_query(&self, namespace: &str) -> String {
        format!("{}/api/v1/games/{}/tracks/query", self.habanero, seg(namespace))
    }

    pub fn tracks_progress(&self, namespace: &str, account_id: &str) -> String {
        format!(
            "{}/api/v1/games/{}/trackprogress/{}",
            self.habanero,
            seg(namespace),
            seg(account_id)
        )
    }

    pub fn track_progress(&self, namespace: &str, account_id: &str, trackguid: &str) -> String {
        format!(
            "{}/byTrack/{}",
            self.tracks_progress(namespace, account_id),
            seg(trackguid)
        )
    }
}
