//! No-op input adapter for dry runs

use async_trait::async_trait;

use crate::application::ports::{InputError, InputSender, Shortcut};

/// Input adapter that accepts every shortcut without delivering anything.
/// Used by `--dry-run` to exercise the full monitor loop safely.
pub struct NoOpInputSender;

impl NoOpInputSender {
    /// Create a new no-op input adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpInputSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InputSender for NoOpInputSender {
    async fn send(&self, _shortcut: &Shortcut) -> Result<(), InputError> {
        Ok(())
    }
}
