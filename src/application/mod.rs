//! Application layer - Use cases and port interfaces
//!
//! Contains the monitor use case and trait definitions
//! for external system interactions.

pub mod monitor;
pub mod ports;
pub mod sources;

// Re-export use case and source types
pub use monitor::{MonitorCallbacks, MonitorConfig, MonitorUseCase};
pub use sources::{
    DetectionError, MeetTabSource, MeetingDetector, MeetingSource, Observation, SourceFailure,
    ZoomWindowSource,
};
