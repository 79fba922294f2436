// Integration tests for the Epic client
//
// These tests drive the full stack against a mock server: token exchange,
// the freshness gate, scheduled refresh and resource dispatch.

use chrono::{Duration, SecondsFormat, Utc};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

use epic_client::auth::{AuthState, Grant, VerifyResponseWithPerms};
use epic_client::models::account::Account;
use epic_client::models::discovery::{FrontendOptions, PartyMembers};
use epic_client::models::fortnite::BulkStatsOptions;
use epic_client::{ClientOptions, Endpoints, EpicClient, EpicError, FetchOptions};

// ==================================================================================================
// Test Helpers
// ==================================================================================================

const TOKEN_PATH: &str = "/account/api/oauth/token";

fn iso(offset: Duration) -> String {
    (Utc::now() + offset).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn token_body(access_token: &str, access_in: Duration, refresh_in: Duration) -> String {
    json!({
        "access_token": access_token,
        "expires_in": access_in.num_seconds(),
        "expires_at": iso(access_in),
        "token_type": "bearer",
        "refresh_token": format!("refresh-{}", access_token),
        "refresh_expires": refresh_in.num_seconds(),
        "refresh_expires_at": iso(refresh_in),
        "account_id": "acct1",
        "client_id": "3446cd72694c4a4485d81b77adbb2141",
        "internal_client": true,
        "client_service": "fortnite",
        "displayName": "Player One",
        "app": "fortnite",
        "in_app_id": "acct1"
    })
    .to_string()
}

/// Token endpoint mock answering one grant type
async fn token_mock(
    server: &mut ServerGuard,
    grant_type: &str,
    body: String,
    hits: usize,
) -> Mock {
    server
        .mock("POST", TOKEN_PATH)
        .match_body(Matcher::UrlEncoded("grant_type".into(), grant_type.into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

fn client_for(server: &ServerGuard, options: ClientOptions) -> EpicClient {
    EpicClient::new(options.endpoints(Endpoints::with_base(&server.url())))
        .expect("Failed to create test client")
}

fn fresh() -> (Duration, Duration) {
    (Duration::hours(2), Duration::hours(8))
}

fn access_expired() -> (Duration, Duration) {
    (Duration::seconds(-10), Duration::hours(8))
}

fn both_expired() -> (Duration, Duration) {
    (Duration::seconds(-20), Duration::seconds(-10))
}

// ==================================================================================================
// Authentication
// ==================================================================================================

#[tokio::test]
async fn test_client_credentials_login() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let token = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;

    let client = client_for(&server, ClientOptions::default());
    assert_eq!(client.auth.state().await, AuthState::Unauthenticated);

    let res = client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    token.assert_async().await;
    assert_eq!(res.account_id, "acct1");
    assert_eq!(res.display_name, "Player One");
    assert_eq!(client.auth.get_account_id().unwrap(), "acct1");
    assert_eq!(client.auth.state().await, AuthState::Authenticated);
}

#[tokio::test]
async fn test_login_sends_game_client_basic_auth() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let token = server
        .mock("POST", TOKEN_PATH)
        .match_header("authorization", "basic Z2FtZTpjbGllbnQ=")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "device_auth".into()),
            Matcher::UrlEncoded("account_id".into(), "acct1".into()),
            Matcher::UrlEncoded("device_id".into(), "dev".into()),
            Matcher::UrlEncoded("secret".into(), "s3cret".into()),
        ]))
        .with_status(200)
        .with_body(token_body("access-1", a, r))
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default().game_client("Z2FtZTpjbGllbnQ="));
    client
        .auth
        .authenticate(Grant::DeviceAuth {
            account_id: "acct1".into(),
            device_id: "dev".into(),
            secret: "s3cret".into(),
        })
        .await
        .unwrap();

    token.assert_async().await;
}

#[tokio::test]
async fn test_rejected_grant_is_upstream_auth() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", TOKEN_PATH)
        .with_status(400)
        .with_body(
            json!({
                "errorCode": "errors.com.epicgames.account.oauth.exchange_code_not_found",
                "errorMessage": "Sorry the exchange code you supplied was not found."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    let err = client
        .auth
        .authenticate(Grant::ExchangeCode {
            exchange_code: "stale".into(),
        })
        .await
        .unwrap_err();

    match err {
        EpicError::UpstreamAuth(e) => {
            assert_eq!(e.status, 400);
            assert_eq!(e.status_text, "Bad Request");
            assert!(e.raw.is_some());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(client.auth.state().await, AuthState::Unauthenticated);
    assert!(matches!(
        client.auth.get_account_id(),
        Err(EpicError::NotAuthenticated(_))
    ));
}

// ==================================================================================================
// Freshness gate
// ==================================================================================================

#[tokio::test]
async fn test_fresh_token_dispatch_makes_one_call() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let token = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let resource = server
        .mock("GET", "/fortnite/api/calendar/v1/timeline")
        .match_header("authorization", "bearer access-1")
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    let url = client.auth.endpoints().timeline();
    let body: Value = client.auth.get(&url).await.unwrap();

    assert_eq!(body, json!({ "ok": true }));
    token.assert_async().await;
    resource.assert_async().await;
}

#[tokio::test]
async fn test_expired_access_refreshes_once_before_call() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = access_expired();
    let login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let (a, r) = fresh();
    let refresh = server
        .mock("POST", TOKEN_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
            Matcher::UrlEncoded("refresh_token".into(), "refresh-access-1".into()),
        ]))
        .with_status(200)
        .with_body(token_body("access-2", a, r))
        .expect(1)
        .create_async()
        .await;
    let resource = server
        .mock("GET", "/fortnite/api/storefront/v2/keychain")
        .match_header("authorization", "bearer access-2")
        .with_status(200)
        .with_body(r#"["key:guid:name"]"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();
    let before = client.auth.access_expires_at().await.unwrap();

    let keys = client.fortnite.get_keychain().await.unwrap();

    assert_eq!(keys, vec!["key:guid:name".to_string()]);
    let after = client.auth.access_expires_at().await.unwrap();
    assert!(after > before);
    login.assert_async().await;
    refresh.assert_async().await;
    resource.assert_async().await;
}

#[tokio::test]
async fn test_both_expired_without_policy_fails_without_io() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = both_expired();
    let login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let refresh = token_mock(&mut server, "refresh_token", String::new(), 0).await;
    let resource = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();
    assert_eq!(client.auth.state().await, AuthState::Expired);

    let result = client.fortnite.get_catalog().await;

    assert!(matches!(result, Err(EpicError::CredentialsExpired)));
    login.assert_async().await;
    refresh.assert_async().await;
    resource.assert_async().await;
}

#[tokio::test]
async fn test_both_expired_with_policy_resubmits_original_grant() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = both_expired();
    let first = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;

    let client = client_for(
        &server,
        ClientOptions::default().reauthenticate_on_double_expiry(true),
    );
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();
    first.assert_async().await;
    first.remove_async().await;

    let (a, r) = fresh();
    let second = token_mock(&mut server, "client_credentials", token_body("access-2", a, r), 1).await;
    let refresh = token_mock(&mut server, "refresh_token", String::new(), 0).await;
    let resource = server
        .mock("GET", "/fortnite/api/game/v2/enabled_features")
        .match_header("authorization", "bearer access-2")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let features = client.fortnite.get_enabled_features().await.unwrap();

    assert!(features.is_empty());
    second.assert_async().await;
    refresh.assert_async().await;
    resource.assert_async().await;
    assert_eq!(client.auth.state().await, AuthState::Authenticated);
}

#[tokio::test]
async fn test_concurrent_dispatches_share_one_refresh() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = access_expired();
    let _login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let (a, r) = fresh();
    let refresh = token_mock(&mut server, "refresh_token", token_body("access-2", a, r), 1).await;
    let resource = server
        .mock("GET", "/fortnite/api/game/v2/world/info")
        .match_header("authorization", "bearer access-2")
        .with_status(200)
        .with_body(r#"{"theaters":[],"missions":[],"missionAlerts":[]}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    let (first, second) = futures::join!(
        client.fortnite.get_stw_world_info(),
        client.fortnite.get_stw_world_info()
    );

    assert!(first.is_ok());
    assert!(second.is_ok());
    refresh.assert_async().await;
    resource.assert_async().await;
}

// ==================================================================================================
// Scheduled refresh
// ==================================================================================================

#[tokio::test]
async fn test_auto_refresh_fires_at_expiry() {
    let mut server = mockito::Server::new_async().await;
    let _login = token_mock(
        &mut server,
        "client_credentials",
        token_body("access-1", Duration::seconds(1), Duration::hours(8)),
        1,
    )
    .await;
    let (a, r) = fresh();
    let refresh = token_mock(&mut server, "refresh_token", token_body("access-2", a, r), 1).await;

    let client = client_for(&server, ClientOptions::default().auto_refresh(true));
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(2500)).await;

    refresh.assert_async().await;
    let expires_at = client.auth.access_expires_at().await.unwrap();
    assert!(expires_at > Utc::now() + Duration::hours(1));
    client.auth.shutdown();
}

#[tokio::test]
async fn test_shutdown_cancels_scheduled_refresh() {
    let mut server = mockito::Server::new_async().await;
    let _login = token_mock(
        &mut server,
        "client_credentials",
        token_body("access-1", Duration::seconds(1), Duration::hours(8)),
        1,
    )
    .await;
    let refresh = token_mock(&mut server, "refresh_token", String::new(), 0).await;

    let client = client_for(&server, ClientOptions::default().auto_refresh(true));
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();
    client.auth.shutdown();

    tokio::time::sleep(std::time::Duration::from_millis(2000)).await;

    refresh.assert_async().await;
}

#[tokio::test]
async fn test_failed_scheduled_refresh_falls_back_to_on_demand() {
    let mut server = mockito::Server::new_async().await;
    let _login = token_mock(
        &mut server,
        "client_credentials",
        token_body("access-1", Duration::seconds(1), Duration::hours(8)),
        1,
    )
    .await;
    let failing = server
        .mock("POST", TOKEN_PATH)
        .match_body(Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()))
        .with_status(500)
        .with_body(r#"{"errorCode":"errors.com.epicgames.common.server_error"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default().auto_refresh(true));
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
    failing.assert_async().await;
    failing.remove_async().await;

    let (a, r) = fresh();
    let refresh = token_mock(&mut server, "refresh_token", token_body("access-2", a, r), 1).await;
    let resource = server
        .mock("GET", "/fortnite/api/storefront/v2/keychain")
        .match_header("authorization", "bearer access-2")
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let keys = client.fortnite.get_keychain().await.unwrap();

    assert!(keys.is_empty());
    refresh.assert_async().await;
    resource.assert_async().await;
    client.auth.shutdown();
}

#[tokio::test]
async fn test_scheduled_refresh_reauthenticates_on_double_expiry() {
    let mut server = mockito::Server::new_async().await;
    let first = token_mock(
        &mut server,
        "client_credentials",
        token_body("access-1", Duration::seconds(1), Duration::seconds(-10)),
        1,
    )
    .await;

    let client = client_for(
        &server,
        ClientOptions::default()
            .auto_refresh(true)
            .reauthenticate_on_double_expiry(true),
    );
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();
    first.assert_async().await;
    first.remove_async().await;

    let (a, r) = fresh();
    let second = token_mock(&mut server, "client_credentials", token_body("access-2", a, r), 1).await;
    let refresh = token_mock(&mut server, "refresh_token", String::new(), 0).await;

    tokio::time::sleep(std::time::Duration::from_millis(2000)).await;

    second.assert_async().await;
    refresh.assert_async().await;
    let expires_at = client.auth.access_expires_at().await.unwrap();
    assert!(expires_at > Utc::now() + Duration::hours(1));
    assert_eq!(client.auth.state().await, AuthState::Authenticated);
    client.auth.shutdown();
}

// ==================================================================================================
// Dispatch
// ==================================================================================================

#[tokio::test]
async fn test_unauthorized_text_body_has_no_parsed_payload() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let _login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let _mock = server
        .mock("GET", "/fortnite/api/storefront/v2/catalog")
        .with_status(401)
        .with_body("Unauthorized")
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    let err = client.fortnite.get_catalog().await.unwrap_err();
    match err {
        EpicError::UpstreamApi(e) => {
            assert_eq!(e.status, 401);
            assert_eq!(e.raw_text, "Unauthorized");
            assert!(e.raw.is_none());
            assert!(e.url.ends_with("/fortnite/api/storefront/v2/catalog"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_status_only_dispatch_returns_failure_status() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let _login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let add = server
        .mock("POST", "/friends/api/v1/acct1/friends/friend9")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({})))
        .with_status(204)
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/friends/api/v1/acct1/friends/friend9")
        .with_status(404)
        .with_body(r#"{"errorCode":"errors.com.epicgames.friends.friendship_not_found"}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    assert_eq!(client.friends.add_friend("friend9", None).await.unwrap(), 204);
    assert_eq!(client.friends.remove_friend("friend9", None).await.unwrap(), 404);
    add.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_extra_headers_reach_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let _login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let surface = server
        .mock("POST", "/api/v1/discovery/surface/acct1")
        .match_query(Matcher::UrlEncoded("appId".into(), "Fortnite".into()))
        .match_header("authorization", "bearer access-1")
        .match_header("user-agent", "Fortnite/++Fortnite+Release-28.10-CL-18163738 Windows/10")
        .match_body(Matcher::PartialJson(json!({
            "surfaceName": "CreativeDiscoverySurface_Frontend",
            "revision": -1,
            "partyMemberIds": ["acct1"],
            "matchmakingRegion": "EU",
            "isCabined": false,
            "platform": "Windows"
        })))
        .with_status(200)
        .with_body(r#"{"panels":[{"panelName":"Homebar","pages":[{"results":[],"hasMore":false}]}]}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    let options = FrontendOptions {
        matchmaking_region: "EU".into(),
        platform: "Windows".into(),
        fortnite_version: "28.10".into(),
        party_member_ids: PartyMembers::OnlySelf,
    };
    let result = client.discovery.get_frontend(&options, None).await.unwrap();

    surface.assert_async().await;
    assert_eq!(result.panels[0].panel_name, "Homebar");
}

#[tokio::test]
async fn test_method_with_custom_headers() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let _login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let mock = server
        .mock("PATCH", "/echo")
        .match_header("x-epic-correlation-id", "abc")
        .match_body(Matcher::Json(json!({ "a": 1 })))
        .with_status(200)
        .with_body(r#"{"a":1}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    let url = format!("{}/echo", server.url());
    let options = FetchOptions::default().header("X-Epic-Correlation-ID", "abc");
    let echoed: Value = client
        .auth
        .method(reqwest::Method::PATCH, &url, &json!({ "a": 1 }), &options)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(echoed["a"], 1);
}

// ==================================================================================================
// Resource managers
// ==================================================================================================

#[tokio::test]
async fn test_verify_with_perms() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let _login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let _mock = server
        .mock("GET", "/account/api/oauth/verify?includePerms=true")
        .with_status(200)
        .with_body(
            json!({
                "token": "access-1",
                "session_id": "sess",
                "token_type": "bearer",
                "client_id": "3446cd72694c4a4485d81b77adbb2141",
                "internal_client": true,
                "client_service": "fortnite",
                "account_id": "acct1",
                "expires_in": 7200,
                "expires_at": iso(Duration::hours(2)),
                "auth_method": "client_credentials",
                "display_name": "Player One",
                "app": "fortnite",
                "in_app_id": "acct1",
                "perms": [{ "resource": "fortnite:profile:acct1:commands", "action": 15 }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    let verified: VerifyResponseWithPerms = client.auth.verify(Some(true)).await.unwrap();
    assert_eq!(verified.verify.account_id, "acct1");
    assert_eq!(verified.perms.len(), 1);
}

#[tokio::test]
async fn test_device_auth_uses_supplied_token() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let _login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let mock = server
        .mock("POST", "/account/api/public/account/acct2/deviceAuth")
        .match_header("authorization", "Bearer other-token")
        .with_status(200)
        .with_body(
            json!({
                "deviceId": "dev",
                "accountId": "acct2",
                "secret": "s3cret",
                "userAgent": "epic-client",
                "created": {
                    "location": "Somewhere",
                    "ipAddress": "127.0.0.1",
                    "dateTime": "2025-01-12T10:30:00.000Z"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    let device = client
        .auth
        .get_device_auth("acct2", "other-token")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        device.to_grant(),
        Grant::DeviceAuth {
            account_id: "acct2".into(),
            device_id: "dev".into(),
            secret: "s3cret".into(),
        }
    );
}

#[tokio::test]
async fn test_account_lookup_defaults_to_self() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let _login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let _mock = server
        .mock("GET", "/account/api/public/account/acct1")
        .with_status(200)
        .with_body(r#"{"id":"acct1","displayName":"Player One","externalAuths":{}}"#)
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default());
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    let account = client.account_by_id(None).await.unwrap();
    assert!(matches!(account, Account::Public(_)));
    assert_eq!(account.id(), "acct1");
    assert_eq!(account.display_name(), "Player One");
}

#[tokio::test]
async fn test_bulk_stats_defaults_to_battle_pass_levels() {
    let mut server = mockito::Server::new_async().await;
    let (a, r) = fresh();
    let _login = token_mock(&mut server, "client_credentials", token_body("access-1", a, r), 1).await;
    let mock = server
        .mock("POST", "/statsproxy/api/statsv2/query")
        .match_body(Matcher::Json(json!({
            "appId": "fortnite",
            "startDate": 0,
            "endDate": 0,
            "owners": ["acct1"],
            "stats": ["s11_social_bp_level", "s12_social_bp_level"]
        })))
        .with_status(200)
        .with_body(
            r#"[{"startTime":0,"endTime":9223372036854775807,"stats":{"s11_social_bp_level":120},"accountId":"acct1"}]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server, ClientOptions::default().seasons_length(12));
    client.auth.authenticate(Grant::ClientCredentials).await.unwrap();

    let stats = client
        .fortnite
        .get_bulk_stats(BulkStatsOptions::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(stats[0].stats["s11_social_bp_level"], 120);
}

#[tokio::test]
async fn test_resource_call_before_login_is_local_error() {
    let server = mockito::Server::new_async().await;
    let client = client_for(&server, ClientOptions::default());

    let result = client.friends.get_blocklist(Some("acct1")).await;
    assert!(matches!(result, Err(EpicError::NotAuthenticated(_))));
}
