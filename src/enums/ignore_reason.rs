use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    EmptyInput,
    InFlight,
}

impl IgnoreReason {
    pub fn description(self) -> &'static str {
        match self {
            Self::EmptyInput => "no source code to analyze",
            Self::InFlight => "a scan is already running",
        }
    }
}
