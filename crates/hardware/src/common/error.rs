//! Machine, Loader, and Configuration Errors.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Machine Errors:** The two fatal conditions a loaded program can raise.
//! 2. **Loader Errors:** Failures reading or parsing a program image.
//! 3. **Configuration Errors:** Failures reading or deserializing a JSON config.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions raised while executing a program.
///
/// Both variants halt the machine. Neither is retried: a malformed program cannot
/// be partially executed. Overflow and carry are flags, never errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The fetched byte matches no instruction family.
    ///
    /// `pc` is the address the opcode was fetched from.
    #[error("unknown opcode {opcode:#04x} at {pc:#06x}")]
    UnknownOpcode {
        /// The offending opcode byte.
        opcode: u8,
        /// Address of the instruction.
        pc: u16,
    },

    /// A store instruction decoded the immediate addressing mode.
    #[error("opcode {opcode:#04x} at {pc:#06x} cannot store to an immediate operand")]
    InvalidStoreTarget {
        /// The offending opcode byte.
        opcode: u8,
        /// Address of the instruction.
        pc: u16,
    },
}

impl MachineError {
    /// Returns the opcode that caused the error.
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::UnknownOpcode { opcode, .. } | Self::InvalidStoreTarget { opcode, .. } => {
                *opcode
            }
        }
    }
}

/// Errors raised while reading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path of the image.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A token in an object-text image is not a two-digit hex byte.
    #[error("invalid object byte '{token}' at token {index}")]
    InvalidByte {
        /// The offending token.
        token: String,
        /// Zero-based token position.
        index: usize,
    },

    /// An object-text image ended without the `zz` terminator.
    #[error("object text is missing the 'zz' terminator")]
    MissingTerminator,
}

/// Errors raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`crate::config::Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
