pub mod html_renderer;
pub mod report_server;
pub mod session_manager;
pub mod terminal_renderer;
