//! Endpoint wiring tests against a mock Passport.

use passport_client::models::{Errors, LoginRequest, LoginResponse};
use passport_client::{PassportClient, PassportConfig, ResponseState};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "4737ea8520bd454caabb7cb3d36e14bc1832c0d3f70a4189b82598670f11b1bd";

async fn client(server: &MockServer) -> PassportClient {
    PassportClient::new(API_KEY, &server.uri()).unwrap()
}

#[tokio::test]
async fn test_retrieve_user_sends_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user/abc-123"))
        .and(header("authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": "abc-123", "email": "jane@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).await.retrieve_user("abc-123").await;

    assert_eq!(response.state(), ResponseState::Success);
    assert_eq!(response.success_response().unwrap()["user"]["id"], "abc-123");
}

#[tokio::test]
async fn test_create_user_without_id() {
    let server = MockServer::start().await;
    let body = json!({"user": {"email": "jane@example.com", "password": "secret"}});
    Mock::given(method("POST"))
        .and(path("/api/user"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"id": "new"}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).await.create_user(None, &body).await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_delete_user_is_hard_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/user/abc-123"))
        .and(query_param("hardDelete", "true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).await.delete_user("abc-123").await;

    assert_eq!(response.state(), ResponseState::Success);
    assert!(response.success_response().is_none());
}

#[tokio::test]
async fn test_reactivate_user() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/user/abc-123"))
        .and(query_param("reactivate", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {"active": true}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).await.reactivate_user("abc-123").await;
    assert_eq!(response.success_response().unwrap()["user"]["active"], true);
}

#[tokio::test]
async fn test_delete_users_repeats_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/user/bulk"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    client(&server).await.delete_users(&["u1", "u2"]).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("userId=u1&userId=u2&hardDelete=true")
    );
}

#[tokio::test]
async fn test_retrieve_user_by_email_encodes_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/user"))
        .and(query_param("email", "jane+test@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .await
        .retrieve_user_by_email("jane+test@example.com")
        .await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_login_typed_views() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({
            "applicationId": "app-1",
            "loginId": "jane@example.com",
            "password": "secret"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "eyJ.abc.def",
            "user": {"id": "abc-123", "firstName": "Jane", "email": "jane@example.com"}
        })))
        .mount(&server)
        .await;

    let request = LoginRequest::new("jane@example.com", "secret").application_id("app-1");
    let response = client(&server).await.login(&request).await;

    let login: LoginResponse = response.success_as().unwrap().unwrap();
    assert_eq!(login.token.as_deref(), Some("eyJ.abc.def"));
    assert_eq!(login.user.display_name(), Some("Jane"));
}

#[tokio::test]
async fn test_login_not_found_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let response = client(&server)
        .await
        .login(&LoginRequest::new("nobody", "wrong"))
        .await;

    assert_eq!(response.state(), ResponseState::ApplicationError);
    assert_eq!(response.status(), Some(404));
    assert!(response.error_response().is_none());
}

#[tokio::test]
async fn test_validation_errors_view() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user/registration"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "fieldErrors": {
                "registration.applicationId": [
                    {"code": "[blank]registration.applicationId", "message": "Required"}
                ]
            }
        })))
        .mount(&server)
        .await;

    let response = client(&server)
        .await
        .register(None, &json!({"registration": {}}))
        .await;

    let errors: Errors = response.error_as().unwrap().unwrap();
    assert_eq!(
        errors.field("registration.applicationId")[0].code,
        "[blank]registration.applicationId"
    );
}

#[tokio::test]
async fn test_login_ping_and_logout_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/login/user-1/app-1"))
        .and(query_param("ipAddress", "10.0.0.7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/logout"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client(&server).await;
    client.login_ping("user-1", "app-1", Some("10.0.0.7")).await;
    client.logout(false, None).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[1].url.query(), Some("global=false"));
}

#[tokio::test]
async fn test_jwt_endpoints_use_jwt_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jwt/validate"))
        .and(header("authorization", "JWT eyJ.abc.def"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwt": {"sub": "abc"}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/jwt/issue"))
        .and(header("authorization", "JWT eyJ.abc.def"))
        .and(query_param("applicationId", "app-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "new"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let validated = client.validate_access_token("eyJ.abc.def").await;
    let issued = client.issue_access_token(Some("app-2"), "eyJ.abc.def").await;

    assert_eq!(validated.success_response().unwrap()["jwt"]["sub"], "abc");
    assert_eq!(issued.success_response().unwrap()["token"], "new");
}

#[tokio::test]
async fn test_application_role_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/application/app-1/role/role-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"role": {"name": "admin"}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/application/app-1/role"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"role": {"id": "gen"}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let role = json!({"role": {"name": "admin"}});

    let updated = client.update_application_role("app-1", "role-9", &role).await;
    let created = client.create_application_role("app-1", None, &role).await;

    assert!(updated.is_success());
    assert_eq!(created.success_response().unwrap()["role"]["id"], "gen");
}

#[tokio::test]
async fn test_retrieve_inactive_applications() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/application"))
        .and(query_param("inactive", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"applications": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).await.retrieve_inactive_applications().await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_report_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/report/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hourlyCounts": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/report/user-login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"logins": []})))
        .mount(&server)
        .await;

    let client = client(&server).await;
    client
        .retrieve_login_report(None, 1_500_000_000_000, 1_600_000_000_000)
        .await;
    client.retrieve_user_login_report("user-1", Some(0), Some(25)).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("start=1500000000000&end=1600000000000")
    );
    assert_eq!(requests[1].url.query(), Some("userId=user-1&offset=0&limit=25"));
}

#[tokio::test]
async fn test_send_email_and_preview() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/email/send/template-1"))
        .and(body_json(json!({"userIds": ["u1"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": {}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/email/template/preview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let sent = client
        .send_email("template-1", &json!({"userIds": ["u1"]}))
        .await;
    let preview = client
        .retrieve_email_template_preview(&json!({"emailTemplate": {}}))
        .await;

    assert!(sent.is_success());
    assert!(preview.is_success());
}

#[tokio::test]
async fn test_cancel_action_sends_body_with_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/user/action/action-1"))
        .and(body_json(json!({"action": {"comment": "appeal accepted"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"action": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .await
        .cancel_action("action-1", &json!({"action": {"comment": "appeal accepted"}}))
        .await;
    assert!(response.is_success());
}

#[tokio::test]
async fn test_system_configuration_round_trip() {
    let server = MockServer::start().await;
    let config = json!({"systemConfiguration": {"reportTimezone": "America/Denver"}});
    Mock::given(method("GET"))
        .and(path("/api/system-configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&config))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/system-configuration"))
        .and(body_json(&config))
        .respond_with(ResponseTemplate::new(200).set_body_json(&config))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let current = client.retrieve_system_configuration().await;
    let body = current.success_response().unwrap().clone();
    let updated = client.update_system_configuration(&body).await;

    assert_eq!(updated.success_response(), Some(&config));
}

#[tokio::test]
async fn test_slow_passport_is_transport_exception() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/webhook"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"webhooks": []}))
                .set_delay(Duration::from_millis(1000)),
        )
        .mount(&server)
        .await;

    let config = PassportConfig::new(API_KEY, &server.uri())
        .unwrap()
        .with_read_timeout(Duration::from_millis(100));
    let client = PassportClient::with_config(config).unwrap();

    let response = client.retrieve_webhooks().await;

    assert_eq!(response.state(), ResponseState::TransportException);
    assert!(response.status().is_none());
    assert!(response.exception().unwrap().is_transport());
}

#[tokio::test]
async fn test_clients_share_configuration_across_tasks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/report/totals"))
        .and(header("authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"globalRegistrations": 3})))
        .expect(3)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.retrieve_total_report().await })
        })
        .collect();

    for handle in handles {
        let response = handle.await.unwrap();
        assert_eq!(response.success_response().unwrap()["globalRegistrations"], 3);
    }
}
