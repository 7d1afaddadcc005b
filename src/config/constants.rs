use std::time::Duration;

pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const MAX_SESSION_ID_LENGTH: usize = 64;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const SPINNER_FRAME_INTERVAL_MS: u64 = 150;

pub const DEFAULT_REPORT_WIDTH: usize = 60;
pub const MAX_REPORT_WIDTH: usize = 100;

pub const ENDPOINT_URL_ENV: &str = "CODE_SENTINEL_ENDPOINT_URL";
pub const CONFIG_DIR_NAME: &str = "code-sentinel";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const COPY_CONFIRMATION: &str = "Copied to clipboard!";

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

pub const SESSION_IDLE_TIMEOUT_SECS: u64 = 60 * 60;
