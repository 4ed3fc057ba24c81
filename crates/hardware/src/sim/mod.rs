//! Simulation driver and program loading.
//!
//! Provides utilities for reading program images from disk and a bounded
//! driver around the CPU run loop.

/// Program image readers (raw binary and Pep/9 object text).
pub mod loader;

/// Top-level simulator: CPU plus run budget.
pub mod simulator;

pub use self::loader::{ImageFormat, load_binary, load_image, parse_object_text};
pub use self::simulator::{ExitReason, Simulator};
