//! Meetwatch - auto-trigger screen recording when a meeting starts
//!
//! This crate polls the local desktop for an active video-conferencing
//! meeting (Zoom, or Google Meet in a browser tab) and sends the recorder's
//! keyboard shortcut on each meeting start.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Meeting kinds, URL classification, monitor state, and the
//!   pure tick transition function
//! - **Application**: Use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (pgrep, osascript, enigo, etc.)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
