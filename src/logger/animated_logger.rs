use std::io::Write;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use crate::config::constants::{sleep_duration_millis, SPINNER_FRAME_INTERVAL_MS};
use crate::enums::scan_phase::ScanPhase;

/// Stderr spinner that animates only while the followed scan is loading.
pub struct AnimatedLogger {
    message: String,
    animation_chars: Vec<&'static str>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

        Self {
            message,
            animation_chars,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self, phase_rx: watch::Receiver<ScanPhase>) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();
        let animation_chars = self.animation_chars.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(sleep_duration_millis(SPINNER_FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        if *phase_rx.borrow() == ScanPhase::Loading {
                            eprint!("\r{} {} ", message, animation_chars[frame]);
                            let _ = std::io::stderr().flush();
                            frame = (frame + 1) % animation_chars.len();
                        }
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K✅ {}\n", final_message);
        let _ = std::io::stderr().flush();
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K❌ {}\n", error_message);
        let _ = std::io::stderr().flush();
    }

    /// Clears the spinner line without printing anything.
    pub async fn clear(&mut self) {
        self.halt().await;
        eprint!("\r\x1b[K");
        let _ = std::io::stderr().flush();
    }
}
