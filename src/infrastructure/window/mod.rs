//! Window inspector adapters

pub mod system_events;

pub use system_events::SystemEventsWindowInspector;
