pub mod analysis_service;
pub mod clipboard_sink;
