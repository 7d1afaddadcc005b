use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::enums::report_view::ReportView;
use crate::enums::scan_phase::ScanPhase;
use crate::structs::analysis_result::AnalysisResult;

/// Everything the report panel depends on for one page session.
#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    pub input: String,
    pub in_flight: bool,
    pub result: Option<AnalysisResult>,
    pub request_id: Option<Uuid>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ScanSession {
    pub fn phase(&self) -> ScanPhase {
        ScanPhase::from_state(self.in_flight, self.result.is_some())
    }

    pub fn view(&self) -> ReportView<'_> {
        ReportView::from_state(self.in_flight, self.result.as_ref())
    }

    pub fn can_submit(&self) -> bool {
        !self.input.is_empty() && !self.in_flight
    }
}
