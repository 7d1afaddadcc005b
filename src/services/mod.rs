pub mod http_analysis_service;
pub mod request_controller;
pub mod system_clipboard;
