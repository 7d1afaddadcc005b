use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;
use crate::config::constants::COPY_CONFIRMATION;
use crate::enums::ignore_reason::IgnoreReason;
use crate::enums::scan_phase::ScanPhase;
use crate::enums::submit_outcome::SubmitOutcome;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::scan_session::ScanSession;
use crate::traits::analysis_service::AnalysisService;
use crate::traits::clipboard_sink::ClipboardSink;

/// Owns the idle → loading → result cycle for one input box.
///
/// The session lock is never held across the service call, so readers see
/// `Loading` while a scan is pending.
pub struct RequestController {
    service: Arc<dyn AnalysisService>,
    session: Mutex<ScanSession>,
    phase_tx: watch::Sender<ScanPhase>,
}

impl RequestController {
    pub fn new(service: Arc<dyn AnalysisService>) -> Self {
        let (phase_tx, _) = watch::channel(ScanPhase::Idle);
        Self {
            service,
            session: Mutex::new(ScanSession::default()),
            phase_tx,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScanSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, session: &ScanSession) {
        self.phase_tx.send_replace(session.phase());
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.lock().input = text.into();
    }

    pub fn input(&self) -> String {
        self.lock().input.clone()
    }

    pub fn can_submit(&self) -> bool {
        self.lock().can_submit()
    }

    pub fn phase(&self) -> ScanPhase {
        self.lock().phase()
    }

    pub fn snapshot(&self) -> ScanSession {
        self.lock().clone()
    }

    pub fn current_result(&self) -> Option<AnalysisResult> {
        self.lock().result.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ScanPhase> {
        self.phase_tx.subscribe()
    }

    /// Replaces the input and submits it.
    pub async fn analyze(&self, source_text: &str) -> SubmitOutcome {
        self.set_input(source_text);
        self.submit().await
    }

    /// Scans the current input. Empty input and a scan already in flight are
    /// ignored without touching any state.
    pub async fn submit(&self) -> SubmitOutcome {
        let (code, request_id) = {
            let mut session = self.lock();
            if session.input.is_empty() {
                return SubmitOutcome::Ignored(IgnoreReason::EmptyInput);
            }
            if session.in_flight {
                return SubmitOutcome::Ignored(IgnoreReason::InFlight);
            }

            let request_id = Uuid::new_v4();
            session.result = None;
            session.in_flight = true;
            session.request_id = Some(request_id);
            self.publish(&session);
            (session.input.clone(), request_id)
        };

        let _guard = InFlightGuard { controller: self, request_id };

        log::info!("🔍 [{}] Sending {} bytes to {}", request_id, code.len(), self.service.endpoint());

        match self.service.analyze(&code).await {
            Ok(result) => {
                let missing = result.missing_fields();
                if !missing.is_empty() {
                    log::warn!("⚠️ [{}] Response is missing fields: {}", request_id, missing.join(", "));
                }
                log::info!("✅ [{}] Scan complete, status '{}'", request_id, result.status());

                let mut session = self.lock();
                session.result = Some(result.clone());
                session.completed_at = Some(Utc::now());
                SubmitOutcome::Completed(result)
            }
            Err(e) => {
                log::error!("❌ [{}] Scan failed ({}): {}", request_id, e.kind(), e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Writes the untransformed secure code to the clipboard and returns the
    /// confirmation to show. A refused write is only logged.
    pub fn copy_secure_code(&self, clipboard: &dyn ClipboardSink) -> Option<&'static str> {
        let code = self.lock().result.as_ref().map(|r| r.secure_code().to_string())?;

        if let Err(e) = clipboard.write_text(&code) {
            log::warn!("📋 Clipboard write failed: {}", e);
        }

        Some(COPY_CONFIRMATION)
    }
}

/// Clears the in-flight flag when a scan finishes, fails, or its future is
/// dropped.
struct InFlightGuard<'a> {
    controller: &'a RequestController,
    request_id: Uuid,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut session = self.controller.lock();
        if session.request_id == Some(self.request_id) {
            session.in_flight = false;
            session.request_id = None;
            self.controller.publish(&session);
        }
    }
}
