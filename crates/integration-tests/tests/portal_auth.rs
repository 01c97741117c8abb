//! Login, logout and session lifecycle over HTTP.

#![allow(clippy::unwrap_used)]

use recruitdesk_integration_tests::{
    CANDIDATE_EMAIL, EMPLOYER_EMAIL, NO_ROLE_EMAIL, PASSWORD, TestPortal, location,
};
use reqwest::StatusCode;

#[tokio::test]
async fn test_login_page_renders_form() {
    let portal = TestPortal::spawn().await;
    let response = portal.get(&TestPortal::client(), "/login").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("name=\"email\""));
    assert!(body.contains("name=\"password\""));
}

#[tokio::test]
async fn test_login_redirects_to_home_section_and_sets_cookie() {
    let portal = TestPortal::spawn().await;
    let client = TestPortal::client();

    let response = portal.login(&client, EMPLOYER_EMAIL, PASSWORD).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/employer-module"));

    let cookie = response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("rd_portal_session="))
        .unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_login_email_is_case_insensitive_on_domain() {
    let portal = TestPortal::spawn().await;
    let response = portal
        .login(&TestPortal::client(), "hr@ACME.io", PASSWORD)
        .await;
    assert_eq!(location(&response), Some("/employer-module"));
}

#[tokio::test]
async fn test_wrong_password_and_unknown_account_look_the_same() {
    let portal = TestPortal::spawn().await;
    let client = TestPortal::client();

    let wrong_password = portal.login(&client, EMPLOYER_EMAIL, "not the password").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = wrong_password.text().await.unwrap();

    let unknown = portal.login(&client, "nobody@acme.io", PASSWORD).await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown = unknown.text().await.unwrap();

    assert!(wrong_password.contains("Invalid email or password."));
    assert!(unknown.contains("Invalid email or password."));

    let session = portal.get(&client, "/api/session").await;
    assert_eq!(session.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_email_is_generic_failure() {
    let portal = TestPortal::spawn().await;
    let response = portal
        .login(&TestPortal::client(), "not-an-email", PASSWORD)
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.text().await.unwrap().contains("Invalid email or password."));
}

#[tokio::test]
async fn test_account_without_role_is_refused() {
    let portal = TestPortal::spawn().await;
    let client = TestPortal::client();

    let response = portal.login(&client, NO_ROLE_EMAIL, PASSWORD).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.text().await.unwrap().contains("does not have access"));

    let session = portal.get(&client, "/api/session").await;
    assert_eq!(session.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signed_in_login_page_redirects_home() {
    let portal = TestPortal::spawn().await;
    let client = portal.signed_in(CANDIDATE_EMAIL).await;

    let response = portal.get(&client, "/login").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/candidate-module"));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let portal = TestPortal::spawn().await;
    let client = portal.signed_in(EMPLOYER_EMAIL).await;

    assert_eq!(
        portal.get(&client, "/api/session").await.status(),
        StatusCode::OK
    );

    let response = client.post(portal.url("/logout")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));

    assert_eq!(
        portal.get(&client, "/api/session").await.status(),
        StatusCode::UNAUTHORIZED
    );
    let page = portal.get(&client, "/employer-module").await;
    assert_eq!(location(&page), Some("/login"));
}
