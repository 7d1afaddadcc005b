use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ServiceConfig {
    /// Target analysis service URL. Requests are POSTed here as-is.
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Unset means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}
