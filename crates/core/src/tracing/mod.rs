//! Shared tracing functionality for Canvass
//!
//! Subscriber setup lives here so every binary and test harness embedding
//! the console initializes logging the same way.

pub mod config;
pub mod init;

pub use config::InstrumentationConfig;
pub use init::{init_default, init_dev, init_tracing};
