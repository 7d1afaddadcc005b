use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::AsyncReadExt;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::report_view::ReportView;
use crate::enums::submit_outcome::SubmitOutcome;
use crate::errors::{SentinelError, SentinelResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::http_analysis_service::HttpAnalysisService;
use crate::services::request_controller::RequestController;
use crate::services::system_clipboard::SystemClipboard;
use crate::ui::report_server::ReportServer;
use crate::ui::session_manager::SessionManager;
use crate::ui::terminal_renderer::TerminalRenderer;

pub struct CommandRunner {
    start_time: Option<Instant>,
    endpoint_override: Option<String>,
}

impl CommandRunner {
    pub fn new(endpoint_override: Option<String>) -> Self {
        Self {
            start_time: None,
            endpoint_override,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> SentinelResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Analyze { file, copy, json } => self.analyze_command(file, copy, json).await,
            Commands::Serve { port, no_browser } => self.serve_command(port, no_browser).await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> SentinelResult<()> {
        log::info!("🚀 Initializing code-sentinel configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("📝 Edit {} to point at your analysis service.", path.display());
                log::info!("🔧 Run 'code-sentinel validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn analyze_command(&self, file: Option<PathBuf>, copy: bool, json: bool) -> SentinelResult<()> {
        let config = ConfigManager::load()?;
        let service = HttpAnalysisService::from_config(&config, self.endpoint_override.as_deref())?;
        let renderer = TerminalRenderer::new(config.output.color && std::io::stdout().is_terminal());

        let source = match file {
            Some(path) => Self::read_source_file(&path).await?,
            None => Self::read_source_stdin().await?,
        };

        let controller = RequestController::new(Arc::new(service));
        let mut spinner = AnimatedLogger::new("🛡️  Scanning Deeply...".to_string());
        spinner.start(controller.subscribe());

        let outcome = controller.analyze(&source).await;

        match outcome {
            SubmitOutcome::Ignored(reason) => {
                spinner.clear().await;
                log::warn!("⚠️ Nothing sent: {}", reason.description());
                print!("{}", renderer.render(ReportView::Idle));
                Ok(())
            }
            SubmitOutcome::Failed(e) => {
                spinner.error(e.user_message()).await;
                Err(e.into())
            }
            SubmitOutcome::Completed(result) => {
                spinner.stop("Scan complete").await;

                if json {
                    println!("{}", serde_json::to_string_pretty(&result)?);
                } else {
                    print!("{}", renderer.render(ReportView::Result(&result)));
                }

                if copy {
                    if let Some(confirmation) = controller.copy_secure_code(&SystemClipboard) {
                        log::info!("📋 {}", confirmation);
                    }
                }
                Ok(())
            }
        }
    }

    async fn read_source_file(path: &Path) -> SentinelResult<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            SentinelError::file_error(&path.display().to_string(), "read", &e.to_string())
        })
    }

    async fn read_source_stdin() -> SentinelResult<String> {
        if std::io::stdin().is_terminal() {
            eprintln!("📥 Paste your source code, then press Ctrl-D:");
        }

        let mut source = String::new();
        tokio::io::stdin().read_to_string(&mut source).await.map_err(|e| {
            SentinelError::user_input_error("stdin", "UTF-8 source text", &e.to_string())
        })?;
        Ok(source)
    }

    async fn serve_command(&self, port: Option<u16>, no_browser: bool) -> SentinelResult<()> {
        log::info!("🌐 Starting code-sentinel report page...");

        let config = ConfigManager::load()?;
        let service = HttpAnalysisService::from_config(&config, self.endpoint_override.as_deref())?;
        log::info!("🎯 Analysis service: {}", service.endpoint_url());

        let session_manager = Arc::new(SessionManager::new(Arc::new(service)));
        let mut server = ReportServer::new(session_manager);
        server.start(port.unwrap_or(config.server.port))?;

        if let Some(url) = server.url() {
            log::info!("🚀 Report page available at: {}", url);
            if config.server.open_browser && !no_browser {
                if let Err(e) = webbrowser::open(&url) {
                    log::warn!("⚠️ Could not open a browser: {}", e);
                }
            }
        }

        log::info!("⏹️ Press Ctrl+C to stop the server");
        tokio::signal::ctrl_c().await?;

        server.shutdown().await
    }

    fn validate_command(&self) -> SentinelResult<()> {
        log::info!("🔍 Validating code-sentinel configuration...");

        let config = ConfigManager::load()?;

        let mut errors: Vec<SentinelError> = match ConfigManager::ensure_valid(&config) {
            Ok(()) => Vec::new(),
            Err(SentinelError::MultipleErrors { errors, .. }) => errors,
            Err(e) => vec![e],
        };

        match ConfigManager::resolve_endpoint(&config, self.endpoint_override.as_deref()) {
            Ok(endpoint) => log::info!("🎯 Analysis service: {}", endpoint),
            Err(e) => errors.push(e),
        }

        if errors.is_empty() {
            log::info!("✅ Configuration is valid");
            Ok(())
        } else {
            Err(SentinelError::MultipleErrors {
                errors,
                context: "configuration validation".to_string(),
            })
        }
    }
}
