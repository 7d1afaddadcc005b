use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::{
    MAX_SESSION_ID_LENGTH, SERVER_SHUTDOWN_GRACE_PERIOD_MS, SESSION_IDLE_TIMEOUT_SECS,
    sleep_duration_millis, timeout_duration,
};
use crate::enums::report_view::ReportView;
use crate::enums::scan_phase::ScanPhase;
use crate::enums::submit_outcome::SubmitOutcome;
use crate::errors::{SentinelError, SentinelResult};
use crate::helpers::text_helper::TextHelper;
use crate::services::request_controller::RequestController;
use crate::structs::analyze_request::AnalyzeRequest;
use crate::ui::html_renderer::HtmlRenderer;
use crate::ui::session_manager::SessionManager;

/// Local web server for the interactive report page.
pub struct ReportServer {
    session_manager: Arc<SessionManager>,
    addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ReportServer {
    pub fn new(session_manager: Arc<SessionManager>) -> Self {
        Self {
            session_manager,
            addr: None,
            shutdown_tx: None,
        }
    }

    /// Binds 127.0.0.1 on `port` (0 picks a free port) and serves in the
    /// background.
    pub fn start(&mut self, port: u16) -> SentinelResult<SocketAddr> {
        let routes = Self::routes(Arc::clone(&self.session_manager));

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (bound, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async move {
                shutdown_rx.await.ok();
            })
            .map_err(|e| SentinelError::system_error("starting report server", &e.to_string()))?;

        tokio::spawn(server);

        self.addr = Some(bound);
        self.shutdown_tx = Some(shutdown_tx);
        log::info!("🌐 Report server started on {}", bound);
        Ok(bound)
    }

    pub fn url(&self) -> Option<String> {
        self.addr.map(|addr| format!("http://{}/", addr))
    }

    pub async fn shutdown(&mut self) -> SentinelResult<()> {
        log::info!("🛑 Shutting down report server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|()|
                SentinelError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Report server shutdown complete");

        Ok(())
    }

    pub fn routes(
        session_manager: Arc<SessionManager>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let session_manager_filter = warp::any().map(move || Arc::clone(&session_manager));

        let page = warp::path::end()
            .and(warp::get())
            .and(warp::query::<HashMap<String, String>>())
            .and(session_manager_filter.clone())
            .and_then(serve_report_page);

        let get_report = warp::path!("api" / "session" / String / "report")
            .and(warp::get())
            .and(session_manager_filter.clone())
            .and_then(get_report_handler);

        let analyze = warp::path!("api" / "session" / String / "analyze")
            .and(warp::post())
            .and(warp::body::json())
            .and(session_manager_filter.clone())
            .and_then(analyze_handler);

        let secure_code = warp::path!("api" / "session" / String / "secure-code")
            .and(warp::get())
            .and(session_manager_filter)
            .and_then(secure_code_handler);

        page
            .or(get_report)
            .or(analyze)
            .or(secure_code)
    }
}

pub fn sanitize_session_id(session_id: &str) -> String {
    session_id.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_SESSION_ID_LENGTH)
        .collect()
}

fn json_reply(body: &Value, status: StatusCode) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(body), status)
}

fn invalid_session() -> warp::reply::WithStatus<warp::reply::Json> {
    json_reply(&json!({ "error": "Invalid session ID" }), StatusCode::BAD_REQUEST)
}

fn render_current(controller: &RequestController) -> String {
    let session = controller.snapshot();
    HtmlRenderer::render(session.view())
}

async fn serve_report_page(
    params: HashMap<String, String>,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, Infallible> {
    session_manager.cleanup_expired_sessions(timeout_duration(SESSION_IDLE_TIMEOUT_SECS));

    let session_id = params.get("session")
        .map(|s| sanitize_session_id(s))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(SessionManager::new_session_id);

    let (report_html, source) = match session_manager.get(&session_id) {
        Some(controller) => (render_current(&controller), controller.input()),
        None => (HtmlRenderer::render(ReportView::Idle), String::new()),
    };
    let loading_html = HtmlRenderer::render(ReportView::Loading);
    let idle_html = HtmlRenderer::render(ReportView::Idle);
    let escaped_source = TextHelper::escape_html(&source);

    let html = TextHelper::fill_template(
        include_str!("static/index.html"),
        &[
            ("SESSION_ID", session_id.as_str()),
            ("SOURCE", escaped_source.as_str()),
            ("REPORT_HTML", report_html.as_str()),
            ("LOADING_HTML", loading_html.as_str()),
            ("IDLE_HTML", idle_html.as_str()),
        ],
    );

    Ok(warp::reply::html(html))
}

async fn get_report_handler(
    session_id: String,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, Infallible> {
    let sanitized_session_id = sanitize_session_id(&session_id);
    if sanitized_session_id.is_empty() {
        return Ok(invalid_session());
    }

    let reply = match session_manager.get(&sanitized_session_id) {
        Some(controller) => {
            let session = controller.snapshot();
            json!({
                "phase": session.phase(),
                "can_submit": session.can_submit(),
                "html": HtmlRenderer::render(session.view()),
            })
        }
        None => json!({
            "phase": ScanPhase::Idle,
            "can_submit": false,
            "html": HtmlRenderer::render(ReportView::Idle),
        }),
    };

    Ok(json_reply(&reply, StatusCode::OK))
}

async fn analyze_handler(
    session_id: String,
    body: AnalyzeRequest,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, Infallible> {
    let sanitized_session_id = sanitize_session_id(&session_id);
    if sanitized_session_id.is_empty() {
        return Ok(invalid_session());
    }

    let controller = session_manager.get_or_create(&sanitized_session_id);
    controller.set_input(body.code);

    let reply = match controller.submit().await {
        SubmitOutcome::Completed(_) => json!({
            "phase": controller.phase(),
            "html": render_current(&controller),
        }),
        SubmitOutcome::Failed(e) => json!({
            "phase": controller.phase(),
            "error": e.user_message(),
            "html": render_current(&controller),
        }),
        SubmitOutcome::Ignored(reason) => json!({
            "phase": controller.phase(),
            "ignored": reason,
            "message": reason.description(),
            "html": render_current(&controller),
        }),
    };

    Ok(json_reply(&reply, StatusCode::OK))
}

async fn secure_code_handler(
    session_id: String,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, Infallible> {
    let sanitized_session_id = sanitize_session_id(&session_id);
    if sanitized_session_id.is_empty() {
        return Ok(invalid_session());
    }

    let result = session_manager
        .get(&sanitized_session_id)
        .and_then(|controller| controller.current_result());

    match result {
        Some(result) => Ok(json_reply(&json!({ "secure_code": result.secure_code() }), StatusCode::OK)),
        None => Ok(json_reply(&json!({ "error": "No report available" }), StatusCode::NOT_FOUND)),
    }
}
