pub mod analysis_result;
pub mod analyze_request;
pub mod cli;
pub mod config;
pub mod scan_session;
