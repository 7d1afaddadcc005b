use crate::errors::SentinelResult;

#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> SentinelResult<()>;
}
