// Discovery service
// Island favorites, history, creator pages and the frontend surface

use reqwest::Method;
use serde_json::json;

use crate::auth::{AuthManager, FetchOptions};
use crate::error::Result;
use crate::friends::account_or_self;
use crate::models::discovery::{
    CreatorPage, FavoriteResult, FavoritesCheckRequest, FrontendOptions, History, HistoryResult,
    PartyMembers, Surface, SurfaceRequest,
};

const CREATOR_PAGE_LIMIT: u32 = 100;
const FRONTEND_SURFACE: &str = "CreativeDiscoverySurface_Frontend";
const FRONTEND_APP_ID: &str = "Fortnite";

/// User agent the discovery service expects for a given game version
fn game_user_agent(fortnite_version: &str) -> String {
    format!(
        "Fortnite/++Fortnite+Release-{}-CL-18163738 Windows/10",
        fortnite_version
    )
}

#[derive(Clone)]
pub struct DiscoveryManager {
    auth: AuthManager,
}

impl DiscoveryManager {
    pub fn new(auth: AuthManager) -> Self {
        Self { auth }
    }

    pub async fn add_favorite(&self, link_code: &str, account_id: Option<&str>) -> Result<u16> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().discovery_favorite(&account_id, link_code);
        self.auth
            .method_status(Method::POST, &url, &json!({}), &FetchOptions::default())
            .await
    }

    pub async fn remove_favorite(&self, link_code: &str, account_id: Option<&str>) -> Result<u16> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().discovery_favorite(&account_id, link_code);
        self.auth
            .method_status(Method::DELETE, &url, &json!({}), &FetchOptions::default())
            .await
    }

    pub async fn get_favorites(&self, account_id: Option<&str>) -> Result<History<FavoriteResult>> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().discovery_favorites(&account_id);
        self.auth.get(&url).await
    }

    /// Which of the given link codes are favorited
    pub async fn check_favorites(
        &self,
        link_codes: &[String],
        account_id: Option<&str>,
    ) -> Result<History<FavoriteResult>> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().discovery_favorites_check(&account_id);
        let body = FavoritesCheckRequest { link_codes };
        self.auth
            .method(Method::POST, &url, &body, &FetchOptions::default())
            .await
    }

    pub async fn add_to_history(&self, link_code: &str, account_id: Option<&str>) -> Result<u16> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().discovery_history_entry(&account_id, link_code);
        self.auth
            .method_status(Method::POST, &url, &json!({}), &FetchOptions::default())
            .await
    }

    pub async fn remove_from_history(&self, link_code: &str, account_id: Option<&str>) -> Result<u16> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().discovery_history_entry(&account_id, link_code);
        self.auth
            .method_status(Method::DELETE, &url, &json!({}), &FetchOptions::default())
            .await
    }

    pub async fn get_history(
        &self,
        limit: Option<u32>,
        account_id: Option<&str>,
    ) -> Result<History<HistoryResult>> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().discovery_history(&account_id, limit);
        self.auth.get(&url).await
    }

    pub async fn get_creator_page(
        &self,
        creator_account_id: &str,
        account_id: Option<&str>,
    ) -> Result<CreatorPage> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self
            .auth
            .endpoints()
            .creator_page(creator_account_id, &account_id, CREATOR_PAGE_LIMIT);
        self.auth.get(&url).await
    }

    /// Frontend discovery surface as seen by the given game version
    pub async fn get_frontend(
        &self,
        options: &FrontendOptions,
        account_id: Option<&str>,
    ) -> Result<Surface> {
        let self_id = self.auth.get_account_id()?;
        let account_id = account_id.unwrap_or(self_id.as_str());
        let url = self.auth.endpoints().discovery_surface(account_id, FRONTEND_APP_ID);

        let party_member_ids = match &options.party_member_ids {
            PartyMembers::OnlySelf => vec![self_id.clone()],
            PartyMembers::Accounts(ids) => ids.clone(),
        };
        let body = SurfaceRequest {
            surface_name: FRONTEND_SURFACE,
            revision: -1,
            party_member_ids,
            matchmaking_region: &options.matchmaking_region,
            is_cabined: false,
            platform: &options.platform,
        };
        let fetch = FetchOptions::default()
            .header("User-Agent", game_user_agent(&options.fortnite_version));

        self.auth.method(Method::POST, &url, &body, &fetch).await
    }
}
