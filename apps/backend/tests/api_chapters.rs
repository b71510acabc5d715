//! Chapter catalog and document API tests.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;

/// Test health check responds.
#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

/// Test list skips files without a title and sorts by basename.
#[tokio::test]
async fn test_list_chapters() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/chapters").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let chapters = body["chapters"].as_array().unwrap();

    assert_eq!(chapters.len(), 2);
    assert_eq!(chapters[0]["slug"], "async-programming");
    assert_eq!(chapters[0]["title"], "Async Programming");
    assert_eq!(chapters[0]["paths"]["slideshow"], "/slides/async-programming");
    assert_eq!(chapters[1]["slug"], "strings");
    assert_eq!(
        chapters[1]["seo"]["canonical_url"],
        "https://learn-javascript.dev/docs/strings"
    );
}

/// Test navigation groups only list chapters present on disk.
#[tokio::test]
async fn test_list_chapter_groups() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let body: serde_json::Value = server.get("/api/chapters").await.json();
    let groups = body["groups"].as_array().unwrap();

    let syntax = groups
        .iter()
        .find(|g| g["title"] == "JavaScript Syntax")
        .unwrap();
    assert_eq!(syntax["chapters"], serde_json::json!(["strings"]));

    let core = groups
        .iter()
        .find(|g| g["title"] == "JavaScript Core Concepts")
        .unwrap();
    assert_eq!(core["chapters"], serde_json::json!(["async-programming"]));

    let intro = groups.iter().find(|g| g["title"] == "Intro").unwrap();
    assert!(intro["chapters"].as_array().unwrap().is_empty());
}

/// Test document view returns the raw markdown body.
#[tokio::test]
async fn test_get_document() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/chapters/strings").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["chapter"]["id"], "Strings");
    assert_eq!(body["markdown"], fixtures::STRINGS_MD);
}

/// Test unknown chapter is a 404 with a JSON error body.
#[tokio::test]
async fn test_get_document_not_found() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/chapters/react").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
}

/// Test local images are served from the content folder.
#[tokio::test]
async fn test_serve_local_image() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/assets/images/event-loop.png").await;

    response.assert_status_ok();
    assert_eq!(&response.as_bytes()[..], fixtures::EVENT_LOOP_PNG);
}
