use crate::enums::scan_phase::ScanPhase;
use crate::structs::analysis_result::AnalysisResult;

/// The three mutually exclusive views of the report panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportView<'a> {
    Idle,
    Loading,
    Result(&'a AnalysisResult),
}

impl<'a> ReportView<'a> {
    pub fn from_state(in_flight: bool, result: Option<&'a AnalysisResult>) -> Self {
        match (in_flight, result) {
            (true, _) => Self::Loading,
            (false, Some(result)) => Self::Result(result),
            (false, None) => Self::Idle,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        match self {
            Self::Idle => ScanPhase::Idle,
            Self::Loading => ScanPhase::Loading,
            Self::Result(_) => ScanPhase::Result,
        }
    }
}
