// Token exchange against the OAuth token endpoint

use chrono::{DateTime, Utc};
use reqwest::header;

use super::types::{AuthResponse, Credential, Grant};
use crate::error::{EpicError, Result};
use crate::http_client::HttpDispatcher;

/// Exchange a grant for a token pair
pub async fn exchange_grant(
    http: &HttpDispatcher,
    url: &str,
    game_client: &str,
    grant: &Grant,
) -> Result<AuthResponse> {
    tracing::info!(grant_type = grant.grant_type(), "Exchanging grant for tokens...");

    let request = http
        .client()
        .post(url)
        .header(header::AUTHORIZATION, format!("basic {}", game_client))
        .form(&grant.form_fields());

    let response = http.send(request).await?;

    let status = response.status();
    if !status.is_success() {
        let err = HttpDispatcher::upstream_error(response, url).await;
        if let Some(code) = err.error_code() {
            tracing::error!(grant_type = grant.grant_type(), error_code = code, "Token exchange rejected");
        }
        return Err(EpicError::UpstreamAuth(err));
    }

    let data: AuthResponse = HttpDispatcher::read_json(response, url).await?;

    tracing::info!(
        grant_type = grant.grant_type(),
        account_id = %data.account_id,
        expires_at = %data.expires_at,
        "Token exchange succeeded"
    );

    Ok(data)
}

/// Build the internal credential from an exchange response
pub(crate) fn credential_from_response(res: &AuthResponse) -> Result<Credential> {
    Ok(Credential {
        access_token: res.access_token.clone(),
        access_expires_at: parse_datetime(&res.expires_at)?,
        refresh_token: res.refresh_token.clone(),
        refresh_expires_at: parse_datetime(&res.refresh_expires_at)?,
    })
}

/// Parse an ISO 8601 timestamp
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| EpicError::InvalidTimestamp(format!("{}: {}", s, e)))
}
