//! A layout that moves the login page away from `/login`.

#![allow(clippy::unwrap_used)]

use recruitdesk_core::PortalLayout;
use recruitdesk_integration_tests::{EMPLOYER_EMAIL, PASSWORD, TestPortal, location};
use reqwest::StatusCode;

async fn sign_in_portal() -> TestPortal {
    let mut layout = PortalLayout::default();
    layout.guard.login_path = "/sign-in".to_string();
    TestPortal::spawn_with_layout(layout).await
}

#[tokio::test]
async fn test_anonymous_visitor_reaches_custom_login_page() {
    let portal = sign_in_portal().await;
    let client = TestPortal::client();

    let page = portal.get(&client, "/employer-module").await;
    assert_eq!(page.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&page), Some("/sign-in"));

    let login = portal.get(&client, "/sign-in").await;
    assert_eq!(login.status(), StatusCode::OK);
    let body = login.text().await.unwrap();
    assert!(body.contains(r#"action="/sign-in""#));
}

#[tokio::test]
async fn test_custom_login_path_signs_in_and_out() {
    let portal = sign_in_portal().await;
    let client = TestPortal::client();

    let response = portal.login(&client, EMPLOYER_EMAIL, PASSWORD).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/employer-module"));

    assert_eq!(
        portal.get(&client, "/employer-module").await.status(),
        StatusCode::OK
    );

    let response = client.post(portal.url("/logout")).send().await.unwrap();
    assert_eq!(location(&response), Some("/sign-in"));

    let page = portal.get(&client, "/employer-module/jobs").await;
    assert_eq!(location(&page), Some("/sign-in"));
}

#[tokio::test]
async fn test_default_login_path_is_just_a_page_when_moved() {
    let portal = sign_in_portal().await;

    // `/login` is no longer special; anonymous requests go through the guard.
    let response = portal.get(&TestPortal::client(), "/login").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/sign-in"));
}
