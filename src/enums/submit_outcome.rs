use crate::enums::analysis_error::AnalysisError;
use crate::enums::ignore_reason::IgnoreReason;
use crate::structs::analysis_result::AnalysisResult;

/// What happened to one press of the analyze action.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent.
    Ignored(IgnoreReason),
    Completed(AnalysisResult),
    Failed(AnalysisError),
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
