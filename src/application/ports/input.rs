//! Synthetic input port interface

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Modifier keys for a keyboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Command,
    Shift,
    Control,
    Option,
}

impl Modifier {
    /// Short display name as conventionally printed in shortcut strings
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Command => "Cmd",
            Self::Shift => "Shift",
            Self::Control => "Ctrl",
            Self::Option => "Opt",
        }
    }
}

/// A keyboard shortcut: one key plus a modifier set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: char,
    pub modifiers: Vec<Modifier>,
}

impl Shortcut {
    pub fn new(key: char, modifiers: Vec<Modifier>) -> Self {
        Self { key, modifiers }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for modifier in &self.modifiers {
            write!(f, "{}+", modifier.display_name())?;
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}

/// Input delivery errors
#[derive(Debug, Clone, Error)]
pub enum InputError {
    #[error("{0} not found. Please install {0}.")]
    ToolNotFound(String),

    #[error("Failed to send shortcut: {0}")]
    SendFailed(String),
}

/// Port for delivering a synthetic key-press to the focused application
#[async_trait]
pub trait InputSender: Send + Sync {
    /// Deliver the shortcut to the currently focused application.
    ///
    /// May fail when the automation permission has not been granted or the
    /// target is unreachable.
    async fn send(&self, shortcut: &Shortcut) -> Result<(), InputError>;
}

#[async_trait]
impl InputSender for Box<dyn InputSender> {
    async fn send(&self, shortcut: &Shortcut) -> Result<(), InputError> {
        (**self).send(shortcut).await
    }
}
