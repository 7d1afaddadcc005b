pub mod config;
pub mod output_config;
pub mod server_config;
pub mod service_config;
