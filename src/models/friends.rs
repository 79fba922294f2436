use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Friend list views served under `/friends/api/v1/{accountId}/{type}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendsType {
    Summary,
    Incoming,
    Outgoing,
    Suggested,
    Friends,
}

impl FriendsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendsType::Summary => "summary",
            FriendsType::Incoming => "incoming",
            FriendsType::Outgoing => "outgoing",
            FriendsType::Suggested => "suggested",
            FriendsType::Friends => "friends",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendsExternalSource {
    Default,
    Steam,
}

impl FriendsExternalSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendsExternalSource::Default => "default",
            FriendsExternalSource::Steam => "steam",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseFriend {
    pub account_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitedFriend {
    pub account_id: String,
    pub mutual: u32,
    pub favorite: bool,
    pub created: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub account_id: String,
    pub mutual: u32,
    pub favorite: bool,
    pub created: String,
    #[serde(default)]
    pub groups: Vec<Value>,
    #[serde(default)]
    pub alias: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendWithNote {
    #[serde(flatten)]
    pub friend: Friend,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedFriendSortFactors {
    pub x: f64,
    pub y: f64,
    pub k: String,
    pub l: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFriendConnection {
    pub id: String,
    pub sort_factors: SuggestedFriendSortFactors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedFriend {
    pub account_id: String,
    #[serde(default)]
    pub connections: HashMap<String, SuggestedFriendConnection>,
    pub mutual: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteSettings {
    Public,
    FriendsOfFriends,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MutualPrivacy {
    All,
    Friends,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendsSettings {
    pub accept_invites: InviteSettings,
    pub mutual_privacy: MutualPrivacy,
}

/// Partial update for [`FriendsSettings`]; unset fields are left untouched
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendsSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_invites: Option<InviteSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutual_privacy: Option<MutualPrivacy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendsExternalSettings {
    pub do_not_show_linking_proposal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendsLimits {
    pub incoming: bool,
    pub outgoing: bool,
    pub accepted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendsSummary {
    pub friends: Vec<FriendWithNote>,
    pub incoming: Vec<LimitedFriend>,
    pub outgoing: Vec<LimitedFriend>,
    pub suggested: Vec<SuggestedFriend>,
    pub blocklist: Vec<BaseFriend>,
    pub settings: FriendsSettings,
    pub limits_reached: FriendsLimits,
}
