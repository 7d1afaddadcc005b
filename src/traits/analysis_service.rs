use async_trait::async_trait;
use crate::enums::analysis_error::AnalysisError;
use crate::structs::analysis_result::AnalysisResult;

/// Something that can scan source text and return a report.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisService: Send + Sync {

    async fn analyze(&self, code: &str) -> Result<AnalysisResult, AnalysisError>;

    /// Where requests go, for logs.
    fn endpoint(&self) -> String;
}
