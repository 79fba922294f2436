use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// External platforms that support display-name lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalAuthQueryType {
    Steam,
    Github,
    Twitch,
    Xbl,
    Psn,
    Nintendo,
}

impl ExternalAuthQueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExternalAuthQueryType::Steam => "steam",
            ExternalAuthQueryType::Github => "github",
            ExternalAuthQueryType::Twitch => "twitch",
            ExternalAuthQueryType::Xbl => "xbl",
            ExternalAuthQueryType::Psn => "psn",
            ExternalAuthQueryType::Nintendo => "nintendo",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalAuthId {
    pub id: String,
    #[serde(rename = "type")]
    pub id_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAuth {
    pub account_id: String,
    #[serde(rename = "type")]
    pub auth_type: String,
    pub external_auth_id: String,
    pub external_auth_id_type: String,
    #[serde(default)]
    pub external_auth_secondary_id: Option<String>,
    #[serde(default)]
    pub external_display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub auth_ids: Vec<ExternalAuthId>,
}

/// Account of the authenticated user, as returned by the account service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfAccount {
    pub id: String,
    pub display_name: String,
    pub minor_verified: bool,
    pub minor_status: String,
    pub cabined_mode: bool,
    pub name: String,
    pub email: String,
    pub failed_login_attempts: u32,
    pub last_login: String,
    pub number_of_display_name_changes: u32,
    pub date_of_birth: String,
    pub headless: bool,
    pub country: String,
    pub last_name: String,
    pub phone_number: String,
    pub preferred_language: String,
    pub can_update_display_name: bool,
    pub tfa_enabled: bool,
    pub email_verified: bool,
    pub minor_expected: bool,
    pub has_hashed_email: bool,
}

/// Account of any user, as visible to others
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicAccount {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub links: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub external_auths: HashMap<String, ExternalAuth>,
}

/// Either shape of an internal account lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Account {
    // Listed first: only the self view carries `email`
    SelfView(Box<SelfAccount>),
    Public(PublicAccount),
}

impl Account {
    pub fn id(&self) -> &str {
        match self {
            Account::SelfView(a) => &a.id,
            Account::Public(a) => &a.id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Account::SelfView(a) => &a.display_name,
            Account::Public(a) => &a.display_name,
        }
    }
}

/// Account found through an external platform's display name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAccount {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub external_auths: HashMap<String, ExternalAuth>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_public_account_deserializes() {
        let account: Account = serde_json::from_value(json!({
            "id": "abc",
            "displayName": "Ninja",
            "externalAuths": {
                "twitch": {
                    "accountId": "abc",
                    "type": "twitch",
                    "externalAuthId": "123",
                    "externalAuthIdType": "twitch_login",
                    "externalDisplayName": "ninja",
                    "authIds": [{ "id": "123", "type": "twitch_login" }]
                }
            }
        }))
        .unwrap();

        assert!(matches!(account, Account::Public(_)));
        assert_eq!(account.id(), "abc");
        assert_eq!(account.display_name(), "Ninja");
    }

    #[test]
    fn test_external_auth_query_type_str() {
        assert_eq!(ExternalAuthQueryType::Xbl.as_str(), "xbl");
        assert_eq!(ExternalAuthQueryType::Psn.as_str(), "psn");
    }
}
