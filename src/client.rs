// Client root
// Bundles the auth manager with the resource managers that share it

use crate::auth::AuthManager;
use crate::config::ClientOptions;
use crate::discovery::DiscoveryManager;
use crate::error::Result;
use crate::fortnite::FortniteManager;
use crate::friends::{account_or_self, FriendManager};
use crate::models::account::{Account, ExternalAccount, ExternalAuthQueryType, PublicAccount};

/// Epic Games API client
#[derive(Clone)]
pub struct EpicClient {
    pub auth: AuthManager,
    pub discovery: DiscoveryManager,
    pub fortnite: FortniteManager,
    pub friends: FriendManager,
}

impl EpicClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let auth = AuthManager::new(options)?;

        Ok(Self {
            discovery: DiscoveryManager::new(auth.clone()),
            fortnite: FortniteManager::new(auth.clone()),
            friends: FriendManager::new(auth.clone()),
            auth,
        })
    }

    pub async fn account_by_display_name(&self, display_name: &str) -> Result<PublicAccount> {
        let url = self.auth.endpoints().account_by_display_name(display_name);
        self.auth.get(&url).await
    }

    /// Case-insensitive lookup of accounts linked to an external platform name
    pub async fn account_by_external_display_name(
        &self,
        display_name: &str,
        auth_type: ExternalAuthQueryType,
    ) -> Result<Vec<ExternalAccount>> {
        let url = self
            .auth
            .endpoints()
            .account_by_external_display_name(display_name, auth_type);
        self.auth.get(&url).await
    }

    /// Look up an account, defaulting to the session's own (which yields the self view)
    pub async fn account_by_id(&self, account_id: Option<&str>) -> Result<Account> {
        let account_id = account_or_self(&self.auth, account_id)?;
        let url = self.auth.endpoints().account_by_id(&account_id);
        self.auth.get(&url).await
    }
}
