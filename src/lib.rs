//! Code Sentinel: submit source code to a vulnerability-analysis service and
//! render the returned security report in a terminal or a local web page.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
