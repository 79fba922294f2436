// Friends service
// Social graph reads and mutations for an account

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::auth::{AuthManager, FetchOptions};
use crate::error::Result;
use crate::models::friends::{
    BaseFriend, Friend, FriendWithNote, FriendsExternalSettings, FriendsExternalSource,
    FriendsSettings, FriendsSettingsUpdate, FriendsSummary, FriendsType, SuggestedFriend,
};

/// Resolve an optional account id to the session's own when absent
pub(crate) fn account_or_self(auth: &AuthManager, account_id: Option<&str>) -> Result<String> {
    match account_id {
        Some(id) => Ok(id.to_string()),
        None => auth.get_account_id(),
    }
}

#[derive(Clone)]
pub struct FriendManager {
    auth: AuthManager,
}

impl FriendManager {
    pub fn new(auth: AuthManager) -> Self {
        Self { auth }
    }

    async fn get_type<T: DeserializeOwned>(&self, kind: FriendsType) -> Result<T> {
        let account_id = self.auth.get_account_id()?;
        let url = self.auth.endpoints().friends(&account_id, kind);
        self.auth.get(&url).await
    }

    pub async fn get_friends(&self) -> Result<Vec<FriendWithNote>> {
        self.get_type(FriendsType::Friends).await
    }

    pub async fn get_incoming(&self) -> Result<Vec<Friend>> {
        self.get_type(FriendsType::Incoming).await
    }

    pub async fn get_outgoing(&self) -> Result<Vec<Friend>> {
        self.get_type(FriendsType::Outgoing).await
    }

    pub async fn get_suggested(&self) -> Result<Vec<SuggestedFriend>> {
        self.get_type(FriendsType::Suggested).await
    }

    pub async fn get_summary(&self) -> Result<FriendsSummary> {
        self.get_type(FriendsType::Summary).await
    }

    pub async fn get_blocklist(&self, account_id: Option<&str>) -> Result<Vec<BaseFriend>> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().blocklist(&account_id);
        self.auth.get(&url).await
    }

    pub async fn get_settings(&self, account_id: Option<&str>) -> Result<FriendsSettings> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().friends_settings(&account_id);
        self.auth.get(&url).await
    }

    pub async fn edit_settings(
        &self,
        settings: &FriendsSettingsUpdate,
        account_id: Option<&str>,
    ) -> Result<FriendsSettings> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().friends_settings(&account_id);
        self.auth
            .method(Method::PATCH, &url, settings, &FetchOptions::default())
            .await
    }

    pub async fn get_external_settings(
        &self,
        source: FriendsExternalSource,
        account_id: Option<&str>,
    ) -> Result<FriendsExternalSettings> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().friends_external_settings(&account_id, source);
        self.auth.get(&url).await
    }

    pub async fn edit_external_settings(
        &self,
        source: FriendsExternalSource,
        do_not_show_linking_proposal: bool,
        account_id: Option<&str>,
    ) -> Result<FriendsExternalSettings> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().friends_external_settings(&account_id, source);
        let body = json!({ "doNotShowLinkingProposal": do_not_show_linking_proposal });
        self.auth
            .method(Method::PUT, &url, &body, &FetchOptions::default())
            .await
    }

    /// Send or accept a friend request. Returns the HTTP status.
    pub async fn add_friend(&self, friend_id: &str, account_id: Option<&str>) -> Result<u16> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().friend(&account_id, friend_id);
        self.auth
            .method_status(Method::POST, &url, &json!({}), &FetchOptions::default())
            .await
    }

    /// Remove a friend or cancel/decline a request. Returns the HTTP status.
    pub async fn remove_friend(&self, friend_id: &str, account_id: Option<&str>) -> Result<u16> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().friend(&account_id, friend_id);
        self.auth
            .method_status(Method::DELETE, &url, &json!({}), &FetchOptions::default())
            .await
    }

    pub async fn remove_nickname(&self, friend_id: &str, account_id: Option<&str>) -> Result<u16> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().friend_alias(&account_id, friend_id);
        self.auth
            .method_status(Method::DELETE, &url, &json!({}), &FetchOptions::default())
            .await
    }

    pub async fn bulk_accept_incoming(
        &self,
        target_ids: &[String],
        account_id: Option<&str>,
    ) -> Result<Value> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().bulk_accept_incoming(&account_id, target_ids);
        self.auth
            .method(Method::POST, &url, &json!({}), &FetchOptions::default())
            .await
    }
}
