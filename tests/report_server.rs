use std::sync::Arc;
use code_sentinel::enums::analysis_error::REQUEST_FAILED_MESSAGE;
use code_sentinel::services::http_analysis_service::HttpAnalysisService;
use code_sentinel::ui::report_server::ReportServer;
use code_sentinel::ui::session_manager::SessionManager;
use serde_json::{json, Value};
use crate::support::{FakeBackend, SAFE_BODY, VULNERABLE_BODY};

fn manager_for(backend: &FakeBackend) -> Arc<SessionManager> {
    let service = HttpAnalysisService::new(backend.endpoint.clone(), None).unwrap();
    Arc::new(SessionManager::new(Arc::new(service)))
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn page_embeds_session_and_idle_view() {
    let backend = FakeBackend::spawn(200, VULNERABLE_BODY);
    let routes = ReportServer::routes(manager_for(&backend));

    let response = warp::test::request().path("/?session=page-1").reply(&routes).await;

    assert_eq!(response.status(), 200);
    let html = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(html.contains(r#"const sessionId = "page-1";"#));
    assert!(html.contains("No Scan Active"));
    assert!(html.contains("Scanning Deeply..."));
    assert!(!html.contains("{{"));
}

#[tokio::test]
async fn page_without_session_gets_a_fresh_id() {
    let backend = FakeBackend::spawn(200, VULNERABLE_BODY);
    let routes = ReportServer::routes(manager_for(&backend));

    let response = warp::test::request().path("/").reply(&routes).await;

    let html = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(!html.contains(r#"const sessionId = "";"#));
}

#[tokio::test]
async fn analyze_returns_rendered_report() {
    let backend = FakeBackend::spawn(200, VULNERABLE_BODY);
    let routes = ReportServer::routes(manager_for(&backend));

    let response = warp::test::request()
        .method("POST")
        .path("/api/session/page-1/analyze")
        .json(&json!({ "code": "print(eval(x))" }))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    let body = body_json(response.body());
    assert_eq!(body["phase"], "result");
    assert!(body["html"].as_str().unwrap().contains("banner-warning"));
    assert!(body.get("error").is_none());

    let report = warp::test::request()
        .path("/api/session/page-1/report")
        .reply(&routes)
        .await;
    let report = body_json(report.body());
    assert_eq!(report["phase"], "result");
    assert_eq!(report["can_submit"], true);

    let page = warp::test::request().path("/?session=page-1").reply(&routes).await;
    let html = String::from_utf8(page.body().to_vec()).unwrap();
    assert!(html.contains("print(eval(x))</textarea>"));
}

#[tokio::test]
async fn analyze_failure_reports_static_notification() {
    let backend = FakeBackend::spawn(502, "bad gateway");
    let routes = ReportServer::routes(manager_for(&backend));

    let response = warp::test::request()
        .method("POST")
        .path("/api/session/page-1/analyze")
        .json(&json!({ "code": "x" }))
        .reply(&routes)
        .await;

    let body = body_json(response.body());
    assert_eq!(body["phase"], "idle");
    assert_eq!(body["error"], REQUEST_FAILED_MESSAGE);
    assert!(body["html"].as_str().unwrap().contains("No Scan Active"));
}

#[tokio::test]
async fn empty_code_is_ignored() {
    let backend = FakeBackend::spawn(200, VULNERABLE_BODY);
    let routes = ReportServer::routes(manager_for(&backend));

    let response = warp::test::request()
        .method("POST")
        .path("/api/session/page-1/analyze")
        .json(&json!({ "code": "" }))
        .reply(&routes)
        .await;

    let body = body_json(response.body());
    assert_eq!(body["ignored"], "empty_input");
    assert_eq!(body["phase"], "idle");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn secure_code_is_served_untransformed() {
    let backend = FakeBackend::spawn(200, SAFE_BODY);
    let routes = ReportServer::routes(manager_for(&backend));

    let missing = warp::test::request()
        .path("/api/session/page-1/secure-code")
        .reply(&routes)
        .await;
    assert_eq!(missing.status(), 404);

    warp::test::request()
        .method("POST")
        .path("/api/session/page-1/analyze")
        .json(&json!({ "code": "a = 1" }))
        .reply(&routes)
        .await;

    let response = warp::test::request()
        .path("/api/session/page-1/secure-code")
        .reply(&routes)
        .await;
    assert_eq!(body_json(response.body())["secure_code"], "a = 1\\nb = 2");
}

#[tokio::test]
async fn sessions_are_isolated() {
    let backend = FakeBackend::spawn(200, VULNERABLE_BODY);
    let routes = ReportServer::routes(manager_for(&backend));

    warp::test::request()
        .method("POST")
        .path("/api/session/page-1/analyze")
        .json(&json!({ "code": "x" }))
        .reply(&routes)
        .await;

    let other = warp::test::request()
        .path("/api/session/page-2/report")
        .reply(&routes)
        .await;
    assert_eq!(body_json(other.body())["phase"], "idle");
}

#[tokio::test]
async fn polling_an_unknown_session_does_not_create_it() {
    let backend = FakeBackend::spawn(200, VULNERABLE_BODY);
    let manager = manager_for(&backend);
    let routes = ReportServer::routes(Arc::clone(&manager));

    let response = warp::test::request()
        .path("/api/session/never-loaded/report")
        .reply(&routes)
        .await;

    let body = body_json(response.body());
    assert_eq!(response.status(), 200);
    assert_eq!(body["phase"], "idle");
    assert_eq!(body["can_submit"], false);
    assert!(body["html"].as_str().unwrap().contains("No Scan Active"));
    assert!(manager.is_empty());
}

#[tokio::test]
async fn invalid_session_id_is_rejected() {
    let backend = FakeBackend::spawn(200, VULNERABLE_BODY);
    let routes = ReportServer::routes(manager_for(&backend));

    let response = warp::test::request()
        .path("/api/session/~~~/report")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn server_binds_an_ephemeral_port_and_shuts_down() {
    let backend = FakeBackend::spawn(200, VULNERABLE_BODY);
    let mut server = ReportServer::new(manager_for(&backend));

    let addr = server.start(0).unwrap();
    assert_ne!(addr.port(), 0);

    let page = reqwest::get(server.url().unwrap()).await.unwrap();
    assert!(page.status().is_success());

    server.shutdown().await.unwrap();
}
