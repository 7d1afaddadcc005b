pub mod config_helper;
pub mod lenient_string;
pub mod text_helper;
