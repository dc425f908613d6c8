//! Browser tab inspector adapters

pub mod chrome;

pub use chrome::ChromeTabInspector;
