//! osascript input adapter for macOS
//!
//! Delivers the shortcut as a System Events `key code` event. Requires the
//! Accessibility permission; without it osascript exits non-zero.

use async_trait::async_trait;

use crate::application::ports::{InputError, InputSender, Modifier, Shortcut};
use crate::infrastructure::osascript::{self, OsascriptError};

/// macOS input adapter using `osascript` + System Events
pub struct OsascriptInputSender;

impl OsascriptInputSender {
    /// Create a new osascript input adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for OsascriptInputSender {
    fn default() -> Self {
        Self::new()
    }
}

/// macOS virtual key code for a character (ANSI layout)
fn key_code(key: char) -> Option<u8> {
    let code = match key.to_ascii_lowercase() {
        'a' => 0,
        's' => 1,
        'd' => 2,
        'f' => 3,
        'h' => 4,
        'g' => 5,
        'z' => 6,
        'x' => 7,
        'c' => 8,
        'v' => 9,
        'b' => 11,
        'q' => 12,
        'w' => 13,
        'e' => 14,
        'r' => 15,
        'y' => 16,
        't' => 17,
        '1' => 18,
        '2' => 19,
        '3' => 20,
        '4' => 21,
        '6' => 22,
        '5' => 23,
        '9' => 25,
        '7' => 26,
        '8' => 28,
        '0' => 29,
        'o' => 31,
        'u' => 32,
        'i' => 34,
        'p' => 35,
        'l' => 37,
        'j' => 38,
        'k' => 40,
        'n' => 45,
        'm' => 46,
        _ => return None,
    };
    Some(code)
}

const fn modifier_clause(modifier: Modifier) -> &'static str {
    match modifier {
        Modifier::Command => "command down",
        Modifier::Shift => "shift down",
        Modifier::Control => "control down",
        Modifier::Option => "option down",
    }
}

fn build_script(shortcut: &Shortcut) -> Result<String, InputError> {
    let code = key_code(shortcut.key).ok_or_else(|| {
        InputError::SendFailed(format!("no macOS key code for '{}'", shortcut.key))
    })?;

    if shortcut.modifiers.is_empty() {
        return Ok(format!(
            "tell application \"System Events\" to key code {}",
            code
        ));
    }

    let using = shortcut
        .modifiers
        .iter()
        .map(|m| modifier_clause(*m))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "tell application \"System Events\" to key code {} using {{{}}}",
        code, using
    ))
}

#[async_trait]
impl InputSender for OsascriptInputSender {
    async fn send(&self, shortcut: &Shortcut) -> Result<(), InputError> {
        let script = build_script(shortcut)?;

        osascript::run(&script).await.map_err(|e| match e {
            OsascriptError::NotFound => InputError::ToolNotFound("osascript".to_string()),
            OsascriptError::Failed(message) => InputError::SendFailed(message),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_code_for_letters() {
        assert_eq!(key_code('z'), Some(6));
        assert_eq!(key_code('Z'), Some(6));
        assert_eq!(key_code('a'), Some(0));
    }

    #[test]
    fn key_code_unknown_character() {
        assert_eq!(key_code('!'), None);
        assert_eq!(key_code(' '), None);
    }

    #[test]
    fn script_for_recorder_shortcut() {
        let shortcut = Shortcut::new('z', vec![Modifier::Command, Modifier::Shift]);
        let script = build_script(&shortcut).unwrap();
        assert_eq!(
            script,
            "tell application \"System Events\" to key code 6 using {command down, shift down}"
        );
    }

    #[test]
    fn script_without_modifiers() {
        let shortcut = Shortcut::new('a', vec![]);
        let script = build_script(&shortcut).unwrap();
        assert_eq!(script, "tell application \"System Events\" to key code 0");
    }

    #[test]
    fn script_for_unmapped_key_fails() {
        let shortcut = Shortcut::new('!', vec![]);
        assert!(build_script(&shortcut).is_err());
    }
}
