// Authentication manager
// Token lifecycle, freshness gate and authenticated dispatch

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex, MutexGuard, Weak};

use chrono::{DateTime, Utc};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use super::exchange;
use super::types::{
    AuthResponse, AuthState, Credential, DeviceAuthResponse, Grant,
};
use crate::config::ClientOptions;
use crate::endpoints::Endpoints;
use crate::error::{EpicError, Result};
use crate::http_client::HttpDispatcher;

/// Per-request options for [`AuthManager::method`]
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Headers merged over the defaults; later entries win
    pub extra_headers: Vec<(String, String)>,
}

impl FetchOptions {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }
}

/// Lock a std mutex, recovering the data if a holder panicked
fn lock<T>(m: &StdMutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

struct AuthInner {
    options: ClientOptions,

    /// HTTP client for token exchange and resource requests
    http: HttpDispatcher,

    /// Current token pair; replaced as a whole
    credential: RwLock<Option<Credential>>,

    account_id: StdMutex<Option<String>>,

    /// Last non-refresh grant, kept for reauthentication
    grant: StdMutex<Option<Grant>>,

    /// Held for the duration of every exchange so only one runs at a time
    refresh_guard: Mutex<()>,

    /// Pending scheduled refresh
    timer: StdMutex<Option<JoinHandle<()>>>,

    /// Whether the scheduled refresh is trusted to keep the token valid
    timer_armed: AtomicBool,

    /// Set by shutdown; no timer is armed until the next explicit authenticate
    stopped: AtomicBool,
}

/// Authentication manager
/// Owns the token lifecycle and is the single dispatch point for authenticated requests.
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct AuthManager {
    inner: Arc<AuthInner>,
}

impl AuthManager {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let http = HttpDispatcher::new(options.connect_timeout_secs, options.request_timeout_secs)?;

        Ok(Self {
            inner: Arc::new(AuthInner {
                options,
                http,
                credential: RwLock::new(None),
                account_id: StdMutex::new(None),
                grant: StdMutex::new(None),
                refresh_guard: Mutex::new(()),
                timer: StdMutex::new(None),
                timer_armed: AtomicBool::new(false),
                stopped: AtomicBool::new(false),
            }),
        })
    }

    pub fn options(&self) -> &ClientOptions {
        &self.inner.options
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.options.endpoints
    }

    /// Exchange a grant for a new session, superseding any current one.
    /// Re-enables the scheduled refresh after a shutdown.
    pub async fn authenticate(&self, grant: Grant) -> Result<AuthResponse> {
        let _guard = self.inner.refresh_guard.lock().await;
        self.inner.stopped.store(false, Ordering::Release);
        self.inner.exchange_and_store(&grant).await
    }

    /// Account id of the current session
    pub fn get_account_id(&self) -> Result<String> {
        lock(&self.inner.account_id).clone().ok_or(EpicError::NotAuthenticated(
            "the client has not logged in, and its account id is not accessible",
        ))
    }

    pub async fn state(&self) -> AuthState {
        let credential = self.inner.credential.read().await;
        let Some(cred) = credential.as_ref() else {
            return AuthState::Unauthenticated;
        };

        if self.inner.refresh_guard.try_lock().is_err() {
            return AuthState::Refreshing;
        }

        let now = Utc::now();
        if cred.access_expired(now) && cred.refresh_expired(now) {
            AuthState::Expired
        } else {
            AuthState::Authenticated
        }
    }

    /// Expiry instant of the current access token
    pub async fn access_expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner
            .credential
            .read()
            .await
            .as_ref()
            .map(|c| c.access_expires_at)
    }

    /// Cancel the scheduled refresh, including one whose exchange is in flight.
    /// Dispatch falls back to checking expiry on each call.
    pub fn shutdown(&self) {
        self.inner.cancel_timer();
    }

    // ==============================================================================================
    // Dispatch
    // ==============================================================================================

    /// Bearer GET, decoding the body as `T`
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let token = self.access_token().await?;
        let request = self
            .inner
            .http
            .client()
            .get(url)
            .header(header::AUTHORIZATION, format!("bearer {}", token));

        let response = self.inner.http.send(request).await?;
        Self::parse_response(response, url).await
    }

    /// Send a caller-shaped request, decoding the body as `T`.
    /// The request is sent as built; no bearer header is added.
    pub async fn get_with<T: DeserializeOwned>(&self, url: &str, request: RequestBuilder) -> Result<T> {
        self.inner.ensure_fresh_credential().await?;
        let response = self.inner.http.send(request).await?;
        Self::parse_response(response, url).await
    }

    /// JSON-body request with bearer auth, decoding the body as `T`
    pub async fn method<T, B>(
        &self,
        method: Method,
        url: &str,
        body: &B,
        options: &FetchOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send_json(method, url, body, options).await?;
        Self::parse_response(response, url).await
    }

    /// JSON-body request with bearer auth, returning only the HTTP status.
    /// Non-success statuses are returned, not raised.
    pub async fn method_status<B>(
        &self,
        method: Method,
        url: &str,
        body: &B,
        options: &FetchOptions,
    ) -> Result<u16>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send_json(method, url, body, options).await?;
        Ok(response.status().as_u16())
    }

    /// Verify the current access token.
    /// Pick [`VerifyResponse`](super::VerifyResponse) or
    /// [`VerifyResponseWithPerms`](super::VerifyResponseWithPerms) to match `include_perms`.
    pub async fn verify<T: DeserializeOwned>(&self, include_perms: Option<bool>) -> Result<T> {
        let url = self.endpoints().verify(include_perms);
        self.get(&url).await
    }

    /// Create a device auth for an account using an explicit access token
    pub async fn get_device_auth(&self, account_id: &str, access_token: &str) -> Result<DeviceAuthResponse> {
        let url = self.endpoints().device_auth(account_id);
        let request = self
            .inner
            .http
            .client()
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", access_token));
        self.get_with(&url, request).await
    }

    async fn send_json<B>(
        &self,
        method: Method,
        url: &str,
        body: &B,
        options: &FetchOptions,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let token = self.access_token().await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("bearer {}", token))
                .map_err(|e| EpicError::InvalidRequest(format!("access token is not a valid header value: {}", e)))?,
        );
        for (name, value) in &options.extra_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| EpicError::InvalidRequest(format!("invalid header name {:?}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| EpicError::InvalidRequest(format!("invalid header value for {}: {}", name, e)))?;
            headers.insert(name, value);
        }

        let body = serde_json::to_vec(body)
            .map_err(|e| EpicError::InvalidRequest(format!("request body is not serializable: {}", e)))?;

        let request = self
            .inner
            .http
            .client()
            .request(method, url)
            .headers(headers)
            .body(body);

        self.inner.http.send(request).await
    }

    /// Run the freshness gate and return a valid access token
    async fn access_token(&self) -> Result<String> {
        self.inner.ensure_fresh_credential().await?;
        self.inner
            .credential
            .read()
            .await
            .as_ref()
            .map(|c| c.access_token.clone())
            .ok_or(EpicError::NotAuthenticated(
                "the client has not logged in, and its credentials are not accessible",
            ))
    }

    async fn parse_response<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
        if response.status().is_success() {
            HttpDispatcher::read_json(response, url).await
        } else {
            Err(EpicError::UpstreamApi(
                HttpDispatcher::upstream_error(response, url).await,
            ))
        }
    }
}

impl AuthInner {
    /// Exchange a grant and install the result. Caller holds `refresh_guard`.
    async fn exchange_and_store(self: &Arc<Self>, grant: &Grant) -> Result<AuthResponse> {
        let url = self.options.endpoints.access_token();
        let res =
            exchange::exchange_grant(&self.http, &url, &self.options.game_client, grant).await?;
        let credential = exchange::credential_from_response(&res)?;
        let access_expires_at = credential.access_expires_at;

        *self.credential.write().await = Some(credential);
        *lock(&self.account_id) = Some(res.account_id.clone());
        if !grant.is_refresh() {
            *lock(&self.grant) = Some(grant.clone());
        }

        if self.options.auto_refresh {
            self.schedule_refresh(access_expires_at);
        }

        Ok(res)
    }

    /// Replace an expired credential. Caller holds `refresh_guard`.
    async fn renew(self: &Arc<Self>) -> Result<()> {
        let now = Utc::now();
        let refresh_token = {
            let credential = self.credential.read().await;
            match credential.as_ref() {
                Some(c) if !c.refresh_expired(now) => Some(c.refresh_token.clone()),
                Some(_) => None,
                None => {
                    return Err(EpicError::NotAuthenticated(
                        "the client has not logged in, and its credentials are not accessible",
                    ))
                }
            }
        };

        if let Some(refresh_token) = refresh_token {
            tracing::debug!("Access token expired, refreshing...");
            self.exchange_and_store(&Grant::RefreshToken { refresh_token })
                .await?;
            return Ok(());
        }

        let original = if self.options.reauthenticate_on_double_expiry {
            lock(&self.grant).clone()
        } else {
            None
        };

        match original {
            Some(grant) => {
                tracing::warn!(
                    grant_type = grant.grant_type(),
                    "Access and refresh tokens expired, reauthenticating with original grant"
                );
                self.exchange_and_store(&grant).await?;
                Ok(())
            }
            None => {
                tracing::warn!("Access and refresh tokens expired, no reauthentication configured");
                Err(EpicError::CredentialsExpired)
            }
        }
    }

    /// Refresh on demand when the access token has expired.
    /// Skipped while the scheduled refresh is armed.
    async fn ensure_fresh_credential(self: &Arc<Self>) -> Result<()> {
        if self.options.auto_refresh && self.timer_armed.load(Ordering::Acquire) {
            return Ok(());
        }

        if !self.access_expired().await {
            return Ok(());
        }

        let _guard = self.refresh_guard.lock().await;

        // Another caller may have refreshed while we waited
        if !self.access_expired().await {
            tracing::debug!("Credential refreshed by concurrent request");
            return Ok(());
        }

        self.renew().await
    }

    /// False when there is no credential; dispatch reports that case itself
    async fn access_expired(&self) -> bool {
        self.credential
            .read()
            .await
            .as_ref()
            .map(|c| c.access_expired(Utc::now()))
            .unwrap_or(false)
    }

    fn schedule_refresh(self: &Arc<Self>, at: DateTime<Utc>) {
        let mut timer = lock(&self.timer);
        if self.stopped.load(Ordering::Acquire) {
            tracing::debug!("Manager shut down, not scheduling token refresh");
            return;
        }

        let delay = (at - Utc::now()).to_std().unwrap_or_default();
        let weak: Weak<Self> = Arc::downgrade(self);

        tracing::debug!(refresh_at = %at.to_rfc3339(), delay_ms = delay.as_millis() as u64, "Scheduling token refresh");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                inner.run_scheduled_refresh().await;
            }
        });

        if let Some(previous) = timer.replace(handle) {
            previous.abort();
        }
        self.timer_armed.store(true, Ordering::Release);
    }

    async fn run_scheduled_refresh(self: &Arc<Self>) {
        // Detach our own handle so rescheduling does not abort this task
        drop(lock(&self.timer).take());
        self.timer_armed.store(false, Ordering::Release);

        let _guard = self.refresh_guard.lock().await;
        if self.stopped.load(Ordering::Acquire) {
            tracing::debug!("Manager shut down, skipping scheduled token refresh");
            return;
        }

        // A new session may have been installed while we waited for the guard
        if !self.access_expired().await {
            let rescheduled = lock(&self.timer).is_some();
            if !rescheduled {
                let at = self.credential.read().await.as_ref().map(|c| c.access_expires_at);
                if let Some(at) = at {
                    self.schedule_refresh(at);
                }
            }
            tracing::debug!("Credential still valid, skipping scheduled token refresh");
            return;
        }

        match self.renew().await {
            Ok(()) => tracing::info!("Scheduled token refresh completed"),
            Err(e) => tracing::error!(
                error = %e,
                "Scheduled token refresh failed; falling back to on-demand refresh"
            ),
        }
    }

    fn cancel_timer(&self) {
        self.stopped.store(true, Ordering::Release);
        let mut timer = lock(&self.timer);
        self.timer_armed.store(false, Ordering::Release);
        if let Some(handle) = timer.take() {
            tracing::debug!("Cancelling scheduled token refresh");
            handle.abort();
        }
    }
}

impl Drop for AuthInner {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
