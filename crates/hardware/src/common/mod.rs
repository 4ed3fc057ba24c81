//! Common utilities and types used throughout the Pep/9 simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Memory-map addresses, reset vectors, and opcode field masks.
//! 2. **Memory Access:** The byte/word access width used by loads, stores, and the resolver.
//! 3. **Error Handling:** Fatal machine errors plus loader and configuration errors.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access width definitions.
pub mod data;

/// Error types for the machine, loader, and configuration.
pub mod error;

pub use constants::{INPUT_PORT, OUTPUT_PORT, RAM_SIZE};
pub use data::Width;
pub use error::{ConfigError, LoadError, MachineError};
