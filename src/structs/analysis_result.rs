use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::enums::analysis_error::AnalysisError;
use crate::enums::banner_tone::BannerTone;
use crate::helpers::lenient_string;
use crate::helpers::text_helper::TextHelper;

/// Status value that selects the non-threat treatment.
pub const SAFE_STATUS: &str = "safe";

/// One scan outcome as reported by the analysis service.
///
/// Fields are not validated: anything absent stays `None` and renders blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    status: Option<String>,

    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    vulnerability_type: Option<String>,

    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    cwe_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    owasp_category: Option<String>,

    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    explanation: Option<String>,

    #[serde(default, deserialize_with = "lenient_string::deserialize")]
    secure_code: Option<String>,
}

impl AnalysisResult {
    pub fn new(
        status: &str,
        vulnerability_type: &str,
        cwe_id: &str,
        owasp_category: &str,
        explanation: &str,
        secure_code: &str,
    ) -> Self {
        Self {
            status: Some(status.to_string()),
            vulnerability_type: Some(vulnerability_type.to_string()),
            cwe_id: Some(cwe_id.to_string()),
            owasp_category: Some(owasp_category.to_string()),
            explanation: Some(explanation.to_string()),
            secure_code: Some(secure_code.to_string()),
        }
    }

    /// Decodes a response body. Only non-JSON bodies, non-object bodies and
    /// non-scalar field values are rejected.
    pub fn from_json(body: &str) -> Result<Self, AnalysisError> {
        let value: Value = serde_json::from_str(body).map_err(|e| AnalysisError::parse(e.to_string()))?;
        if !value.is_object() {
            return Err(AnalysisError::parse(format!("expected a JSON object, found {}", json_kind(&value))));
        }
        serde_json::from_value(value).map_err(|e| AnalysisError::parse(e.to_string()))
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }

    pub fn vulnerability_type(&self) -> &str {
        self.vulnerability_type.as_deref().unwrap_or_default()
    }

    pub fn cwe_id(&self) -> &str {
        self.cwe_id.as_deref().unwrap_or_default()
    }

    pub fn owasp_category(&self) -> &str {
        self.owasp_category.as_deref().unwrap_or_default()
    }

    pub fn explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or_default()
    }

    /// Secure code exactly as received; this is what the copy action writes.
    pub fn secure_code(&self) -> &str {
        self.secure_code.as_deref().unwrap_or_default()
    }

    /// Secure code with escaped newlines expanded, for display only.
    pub fn display_secure_code(&self) -> String {
        TextHelper::normalize_escaped_newlines(self.secure_code())
    }

    /// Exact, case-sensitive comparison with [`SAFE_STATUS`].
    pub fn is_safe(&self) -> bool {
        self.status.as_deref() == Some(SAFE_STATUS)
    }

    pub fn banner_tone(&self) -> BannerTone {
        if self.is_safe() {
            BannerTone::Safe
        } else {
            BannerTone::Warning
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("status", &self.status),
            ("vulnerability_type", &self.vulnerability_type),
            ("cwe_id", &self.cwe_id),
            ("owasp_category", &self.owasp_category),
            ("explanation", &self.explanation),
            ("secure_code", &self.secure_code),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
