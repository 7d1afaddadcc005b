use serde::{Deserialize, Serialize};

/// Which of the three report views is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanPhase {
    Idle,
    Loading,
    Result,
}

impl ScanPhase {
    /// Loading takes precedence over a stored result.
    pub fn from_state(in_flight: bool, has_result: bool) -> Self {
        if in_flight {
            Self::Loading
        } else if has_result {
            Self::Result
        } else {
            Self::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_phase_from_slots() {
        assert_eq!(ScanPhase::from_state(false, false), ScanPhase::Idle);
        assert_eq!(ScanPhase::from_state(true, false), ScanPhase::Loading);
        assert_eq!(ScanPhase::from_state(true, true), ScanPhase::Loading);
        assert_eq!(ScanPhase::from_state(false, true), ScanPhase::Result);
    }
}
