use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, ENDPOINT_URL_ENV};
use crate::errors::{SentinelError, SentinelResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Code Sentinel Configuration

[service]
# Analysis service that receives {"code": "..."} and answers with a report
endpoint_url = "https://codesentinelapi-zqdk.onrender.com/analyze"

# Seconds before a scan is abandoned; leave unset to wait indefinitely
# timeout_secs = 60

[server]
# Port for `code-sentinel serve`
port = 8080
open_browser = true

[output]
# ANSI colors in terminal reports
color = true
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load() -> SentinelResult<Config> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> SentinelResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| SentinelError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> SentinelResult<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            SentinelError::system_error("locating config directory", "home directory is not available")
        })?;
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    pub fn create_sample_config_at(path: &Path) -> SentinelResult<()> {
        if path.exists() {
            return Err(SentinelError::file_error(
                &path.display().to_string(),
                "create",
                "file already exists",
            ));
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    /// Picks the endpoint from the command line, then the environment, then
    /// the config file.
    pub fn resolve_endpoint(config: &Config, cli_override: Option<&str>) -> SentinelResult<String> {
        let from_env = std::env::var(ENDPOINT_URL_ENV).ok();
        Self::resolve_endpoint_from(config, cli_override, from_env.as_deref())
    }

    pub fn resolve_endpoint_from(config: &Config, cli_override: Option<&str>, from_env: Option<&str>) -> SentinelResult<String> {
        let endpoint = cli_override
            .or(from_env)
            .or(config.service.endpoint_url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| SentinelError::config_error(
                "no analysis service endpoint configured",
                Some("service.endpoint_url"),
                Some(format!("run 'code-sentinel init', set {} or pass --endpoint-url", ENDPOINT_URL_ENV).as_str()),
            ))?;

        Self::validate_endpoint(endpoint)?;
        Ok(endpoint.to_string())
    }

    pub fn validate_endpoint(endpoint: &str) -> SentinelResult<()> {
        let url = Url::parse(endpoint).map_err(|e| SentinelError::validation_error(
            "service.endpoint_url",
            endpoint,
            &format!("must be an absolute URL ({})", e),
            Some("use a full URL such as https://host/analyze"),
        ))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SentinelError::validation_error(
                "service.endpoint_url",
                endpoint,
                &format!("scheme must be http or https, got '{}'", scheme),
                None,
            )),
        }
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Some(endpoint) = &config.service.endpoint_url {
            if let Err(e) = Self::validate_endpoint(endpoint) {
                errors.push(e.user_message());
            }
        }

        if config.service.timeout_secs == Some(0) {
            errors.push("service.timeout_secs must be greater than zero".to_string());
        }

        if config.server.port == 0 {
            errors.push("server.port must be non-zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// [`Self::validate_config`] as a single error, for commands that must
    /// refuse to start on a bad config.
    pub fn ensure_valid(config: &Config) -> SentinelResult<()> {
        Self::validate_config(config).map_err(|messages| SentinelError::MultipleErrors {
            errors: messages
                .iter()
                .map(|message| SentinelError::config_error(message, None, None))
                .collect(),
            context: "configuration validation".to_string(),
        })
    }

}
