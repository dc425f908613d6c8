//! Cross-platform input adapter using enigo
//!
//! Works on Windows, macOS, and Linux (X11/Wayland).

use async_trait::async_trait;

use crate::application::ports::{InputError, InputSender, Modifier, Shortcut};

/// Cross-platform input adapter using enigo
pub struct EnigoInputSender;

impl EnigoInputSender {
    /// Create a new enigo input adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoInputSender {
    fn default() -> Self {
        Self::new()
    }
}

fn enigo_key(modifier: Modifier) -> enigo::Key {
    match modifier {
        Modifier::Command => enigo::Key::Meta,
        Modifier::Shift => enigo::Key::Shift,
        Modifier::Control => enigo::Key::Control,
        Modifier::Option => enigo::Key::Alt,
    }
}

#[async_trait]
impl InputSender for EnigoInputSender {
    async fn send(&self, shortcut: &Shortcut) -> Result<(), InputError> {
        let shortcut = shortcut.clone();

        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            use enigo::{Direction, Enigo, Keyboard, Settings};

            let mut enigo = Enigo::new(&Settings::default())
                .map_err(|e| InputError::SendFailed(format!("Failed to create enigo: {}", e)))?;

            for modifier in &shortcut.modifiers {
                enigo
                    .key(enigo_key(*modifier), Direction::Press)
                    .map_err(|e| InputError::SendFailed(format!("Failed to press modifier: {}", e)))?;
            }

            let result = enigo
                .key(enigo::Key::Unicode(shortcut.key), Direction::Click)
                .map_err(|e| InputError::SendFailed(format!("Failed to press key: {}", e)));

            // Release modifiers in reverse order even if the key click failed
            for modifier in shortcut.modifiers.iter().rev() {
                let _ = enigo.key(enigo_key(*modifier), Direction::Release);
            }

            result
        })
        .await
        .map_err(|e| InputError::SendFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_creates_successfully() {
        let _sender = EnigoInputSender::new();
    }

    #[test]
    fn sender_default_creates() {
        let _sender = EnigoInputSender::default();
    }
}
