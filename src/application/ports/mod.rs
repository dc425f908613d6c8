//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod input;
pub mod notifier;
pub mod process;
pub mod tabs;
pub mod window;

// Re-export common types
pub use input::{InputError, InputSender, Modifier, Shortcut};
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use process::{ProcessInspector, ProcessQueryError};
pub use tabs::{BrowserTab, TabInspector, TabQueryError};
pub use window::{WindowInspector, WindowQueryError};
