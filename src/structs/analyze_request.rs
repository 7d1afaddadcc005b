use serde::{Deserialize, Serialize};

/// Body sent to the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub code: String,
}
