//! Shared utilities for the competition escrow.

pub mod logging;
pub mod time;

pub use logging::{init_logging, LogFormat};
pub use time::format_duration;
pub use tracing_subscriber::util::TryInitError;
