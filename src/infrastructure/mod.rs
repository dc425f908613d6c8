//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with OS automation tools (pgrep, osascript, enigo, etc.)

pub mod input;
pub mod notification;
mod osascript;
pub mod process;
pub mod tabs;
pub mod window;

// Re-export adapters
pub use input::{
    create_input_sender, EnigoInputSender, InputTool, InputToolPreference, NoOpInputSender,
    OsascriptInputSender,
};
pub use notification::NotifyRustNotifier;
pub use process::PgrepProcessInspector;
pub use tabs::ChromeTabInspector;
pub use window::SystemEventsWindowInspector;
