use crate::config::constants::DEFAULT_SERVER_PORT;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_open_browser() -> bool {
        true
    }

    pub fn default_color() -> bool {
        true
    }
}
