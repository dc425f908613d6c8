//! Synthetic input adapters

pub mod enigo;
pub mod factory;
pub mod noop;
pub mod osascript;

pub use enigo::EnigoInputSender;
pub use factory::{create_input_sender, InputTool, InputToolPreference};
pub use noop::NoOpInputSender;
pub use osascript::OsascriptInputSender;
