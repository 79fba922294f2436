// Authentication types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credential material exchanged at the token endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    AuthorizationCode {
        code: String,
    },
    ClientCredentials,
    ContinuationToken {
        continuation_token: String,
    },
    DeviceAuth {
        account_id: String,
        device_id: String,
        secret: String,
    },
    DeviceCode {
        device_code: String,
    },
    ExchangeCode {
        exchange_code: String,
    },
    ExternalAuth {
        external_auth_type: String,
        external_auth_token: String,
    },
    Otp {
        otp: String,
        challenge: String,
    },
    RefreshToken {
        refresh_token: String,
    },
}

impl Grant {
    /// Wire value of `grant_type`
    pub fn grant_type(&self) -> &'static str {
        match self {
            Grant::AuthorizationCode { .. } => "authorization_code",
            Grant::ClientCredentials => "client_credentials",
            Grant::ContinuationToken { .. } => "continuation_token",
            Grant::DeviceAuth { .. } => "device_auth",
            Grant::DeviceCode { .. } => "device_code",
            Grant::ExchangeCode { .. } => "exchange_code",
            Grant::ExternalAuth { .. } => "external_auth",
            Grant::Otp { .. } => "otp",
            Grant::RefreshToken { .. } => "refresh_token",
        }
    }

    /// URL-encoded form fields, `grant_type` first
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("grant_type", self.grant_type())];
        match self {
            Grant::AuthorizationCode { code } => fields.push(("code", code.as_str())),
            Grant::ClientCredentials => {}
            Grant::ContinuationToken { continuation_token } => {
                fields.push(("continuation_token", continuation_token.as_str()))
            }
            Grant::DeviceAuth {
                account_id,
                device_id,
                secret,
            } => {
                fields.push(("account_id", account_id.as_str()));
                fields.push(("device_id", device_id.as_str()));
                fields.push(("secret", secret.as_str()));
            }
            Grant::DeviceCode { device_code } => fields.push(("device_code", device_code.as_str())),
            Grant::ExchangeCode { exchange_code } => fields.push(("exchange_code", exchange_code.as_str())),
            Grant::ExternalAuth {
                external_auth_type,
                external_auth_token,
            } => {
                fields.push(("external_auth_type", external_auth_type.as_str()));
                fields.push(("external_auth_token", external_auth_token.as_str()));
            }
            Grant::Otp { otp, challenge } => {
                fields.push(("otp", otp.as_str()));
                fields.push(("challenge", challenge.as_str()));
            }
            Grant::RefreshToken { refresh_token } => fields.push(("refresh_token", refresh_token.as_str())),
        }
        fields
    }

    pub fn is_refresh(&self) -> bool {
        matches!(self, Grant::RefreshToken { .. })
    }
}

/// Current token pair
#[derive(Clone)]
pub(crate) struct Credential {
    pub access_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_expires_at: DateTime<Utc>,
}

impl Credential {
    pub fn access_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.access_expires_at
    }

    pub fn refresh_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.refresh_expires_at
    }
}

// Tokens stay out of logs
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_expires_at", &self.access_expires_at)
            .field("refresh_expires_at", &self.refresh_expires_at)
            .finish_non_exhaustive()
    }
}

/// Observable manager state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No successful authentication yet
    Unauthenticated,
    /// Access token valid, or refreshable on next use
    Authenticated,
    /// A refresh or reauthentication exchange is in flight
    Refreshing,
    /// Both tokens expired
    Expired,
}

/// Token endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub expires_at: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub refresh_token: String,
    #[serde(default)]
    pub refresh_expires: i64,
    pub refresh_expires_at: String,
    pub account_id: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub internal_client: bool,
    #[serde(default)]
    pub client_service: String,
    #[serde(default, rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub in_app_id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub application_id: Option<String>,
}

/// Verify endpoint response without permissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub token: String,
    pub session_id: String,
    pub token_type: String,
    pub client_id: String,
    pub internal_client: bool,
    pub client_service: String,
    pub account_id: String,
    pub expires_in: i64,
    pub expires_at: String,
    pub auth_method: String,
    pub display_name: String,
    pub app: String,
    pub in_app_id: String,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub application_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPerm {
    pub resource: String,
    pub action: u32,
}

/// Verify endpoint response with `includePerms=true`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponseWithPerms {
    #[serde(flatten)]
    pub verify: VerifyResponse,
    pub perms: Vec<VerifyPerm>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAuthCreated {
    pub location: String,
    pub ip_address: String,
    pub date_time: String,
}

/// Device auth created for an account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAuthResponse {
    pub device_id: String,
    pub account_id: String,
    pub secret: String,
    pub user_agent: String,
    pub created: DeviceAuthCreated,
}

impl DeviceAuthResponse {
    /// Grant that logs in with this device auth
    pub fn to_grant(&self) -> Grant {
        Grant::DeviceAuth {
            account_id: self.account_id.clone(),
            device_id: self.device_id.clone(),
            secret: self.secret.clone(),
        }
    }
}
