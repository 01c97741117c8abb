//! JSON API: session, navigation and breadcrumbs.

#![allow(clippy::unwrap_used)]

use recruitdesk_integration_tests::{EMPLOYER_EMAIL, TestPortal};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_session_and_navigation_require_login() {
    let portal = TestPortal::spawn().await;
    let client = TestPortal::client();

    for path in ["/api/session", "/api/navigation?path=/"] {
        let response = portal.get(&client, path).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_session_reports_role_and_home() {
    let portal = TestPortal::spawn().await;
    let client = portal.signed_in(EMPLOYER_EMAIL).await;

    let body: Value = portal
        .get(&client, "/api/session")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(body["role"], "employer");
    assert_eq!(body["email"], EMPLOYER_EMAIL);
    assert_eq!(body["display_name"], "Acme Hiring");
    assert_eq!(body["initials"], "AH");
    assert_eq!(body["home"], "/employer-module");
}

#[tokio::test]
async fn test_navigation_marks_active_entries() {
    let portal = TestPortal::spawn().await;
    let client = portal.signed_in(EMPLOYER_EMAIL).await;

    let items: Vec<Value> = portal
        .get(&client, "/api/navigation?path=/employer-module/jobs")
        .await
        .json()
        .await
        .unwrap();

    let titles: Vec<&str> = items.iter().map(|i| i["title"].as_str().unwrap()).collect();
    assert_eq!(titles, ["Home", "Dashboard", "Jobs", "Candidates", "Exams"]);

    let home = items.first().unwrap();
    assert_eq!(home["href"], "/");
    assert_eq!(home["active"], false);

    let jobs = items.get(2).unwrap();
    assert_eq!(jobs["active"], true);
    assert_eq!(jobs["children"][0]["title"], "Job Posts");
    assert_eq!(jobs["children"][0]["active"], true);
    assert_eq!(jobs["children"][1]["active"], false);
}

#[tokio::test]
async fn test_navigation_root_only_active_on_root() {
    let portal = TestPortal::spawn().await;
    let client = portal.signed_in(EMPLOYER_EMAIL).await;

    let items: Vec<Value> = portal
        .get(&client, "/api/navigation?path=/")
        .await
        .json()
        .await
        .unwrap();

    let active: Vec<&str> = items
        .iter()
        .filter(|i| i["active"] == true)
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(active, ["Home"]);
}

#[tokio::test]
async fn test_breadcrumbs_are_public() {
    let portal = TestPortal::spawn().await;
    let client = TestPortal::client();

    let crumbs: Value = portal
        .get(&client, "/api/breadcrumbs?path=/dashboard/admin")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(
        crumbs,
        json!([
            { "label": "Home", "path": "/", "is_current_page": false },
            { "label": "Admin Dashboard", "path": "/dashboard/admin", "is_current_page": true },
        ])
    );
}

#[tokio::test]
async fn test_breadcrumbs_unmapped_and_root() {
    let portal = TestPortal::spawn().await;
    let client = TestPortal::client();

    for path in ["/", "/unknown/segment"] {
        let crumbs: Value = portal
            .get(&client, &format!("/api/breadcrumbs?path={path}"))
            .await
            .json()
            .await
            .unwrap();
        assert_eq!(
            crumbs,
            json!([{ "label": "Home", "path": "/", "is_current_page": true }]),
            "{path}"
        );
    }

    let crumbs: Value = portal
        .get(&client, "/api/breadcrumbs")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(crumbs[0]["is_current_page"], true);
}
