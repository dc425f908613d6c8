//! Process inspector adapters

pub mod pgrep;

pub use pgrep::PgrepProcessInspector;
