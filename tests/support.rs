use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use serde_json::Value;
use warp::http::StatusCode;
use warp::Filter;

/// What the fake analysis backend saw.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

pub struct FakeBackend {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeBackend {
    /// Serves `POST /analyze` on an ephemeral port, answering every request
    /// with `status` and `body`.
    pub fn spawn(status: u16, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&requests);
        let response_body = body.to_string();
        let status = StatusCode::from_u16(status).unwrap();

        let route = warp::path("analyze")
            .and(warp::post())
            .and(warp::header::optional::<String>("content-type"))
            .and(warp::body::bytes())
            .map(move |content_type: Option<String>, raw: warp::hyper::body::Bytes| {
                let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);
                recorder.lock().unwrap().push(RecordedRequest { content_type, body });
                warp::reply::with_status(
                    warp::reply::with_header(response_body.clone(), "content-type", "application/json"),
                    status,
                )
            });

        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self {
            endpoint: format!("http://{}/analyze", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// An endpoint where nothing is listening.
pub async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/analyze", addr)
}

pub const VULNERABLE_BODY: &str = r#"{
    "status": "vulnerable",
    "vulnerability_type": "Code Injection",
    "cwe_id": "CWE-94",
    "owasp_category": "A03:2021",
    "explanation": "eval executes arbitrary expressions",
    "secure_code": "ast.literal_eval(x)"
}"#;

pub const SAFE_BODY: &str = r#"{
    "status": "safe",
    "vulnerability_type": "No Vulnerability",
    "cwe_id": "N/A",
    "owasp_category": "N/A",
    "explanation": "No issues found",
    "secure_code": "a = 1\\nb = 2"
}"#;
