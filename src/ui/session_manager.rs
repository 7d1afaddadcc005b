use std::sync::Arc;
use std::time::{Duration, Instant};
use dashmap::DashMap;
use uuid::Uuid;
use crate::services::request_controller::RequestController;
use crate::traits::analysis_service::AnalysisService;

struct PageSession {
    controller: Arc<RequestController>,
    last_seen: Instant,
}

/// One [`RequestController`] per open browser page.
pub struct SessionManager {
    service: Arc<dyn AnalysisService>,
    sessions: DashMap<String, PageSession>,
}

impl SessionManager {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        Self {
            service,
            sessions: DashMap::new(),
        }
    }

    pub fn new_session_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn get_or_create(&self, session_id: &str) -> Arc<RequestController> {
        let mut entry = self.sessions.entry(session_id.to_string()).or_insert_with(|| {
            log::debug!("🆕 New page session {}", session_id);
            PageSession {
                controller: Arc::new(RequestController::new(Arc::clone(&self.service))),
                last_seen: Instant::now(),
            }
        });
        entry.last_seen = Instant::now();
        Arc::clone(&entry.controller)
    }

    pub fn get(&self, session_id: &str) -> Option<Arc<RequestController>> {
        self.sessions.get(session_id).map(|s| Arc::clone(&s.controller))
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drops sessions untouched for longer than `max_idle`, unless a scan is
    /// still running in them.
    pub fn cleanup_expired_sessions(&self, max_idle: Duration) {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| {
            session.last_seen.elapsed() < max_idle || session.controller.snapshot().in_flight
        });
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            log::debug!("🧹 Removed {} idle page sessions", removed);
        }
    }
}
