//! Program Image Loader.
//!
//! This module reads program images from disk for the host collaborator. It performs:
//! 1. **Binary loading:** Reads a raw image into a byte buffer.
//! 2. **Object text:** Parses the Pep/9 object format, whitespace-separated
//!    two-digit hex bytes terminated by `zz`.
//! 3. **Format selection:** Picks a parser from the file extension.
//!
//! Neither format is validated beyond its syntax: the image is copied to RAM at
//! address 0 as-is.

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Terminator token of the object text format.
const OBJECT_TERMINATOR: &str = "zz";

/// On-disk encoding of a program image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    /// Raw bytes.
    Binary,
    /// Pep/9 object text (`D1 00 04 00 42 zz`).
    ObjectText,
}

impl ImageFormat {
    /// `.pepo` and `.txt` files are object text; anything else is binary.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pepo") || ext.eq_ignore_ascii_case("txt") => {
                Self::ObjectText
            }
            _ => Self::Binary,
        }
    }
}

/// Loads a binary file from disk into a byte vector.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses Pep/9 object text into bytes.
///
/// Anything after the `zz` terminator is ignored.
pub fn parse_object_text(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut bytes = Vec::new();
    for (index, token) in text.split_whitespace().enumerate() {
        if token.eq_ignore_ascii_case(OBJECT_TERMINATOR) {
            return Ok(bytes);
        }
        // `from_str_radix` would also accept a sign, so check the digits first.
        if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LoadError::InvalidByte {
                token: token.to_owned(),
                index,
            });
        }
        let byte = u8::from_str_radix(token, 16).map_err(|_| LoadError::InvalidByte {
            token: token.to_owned(),
            index,
        })?;
        bytes.push(byte);
    }
    Err(LoadError::MissingTerminator)
}

/// Reads an image in the given format.
pub fn load_image(path: impl AsRef<Path>, format: ImageFormat) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    match format {
        ImageFormat::Binary => load_binary(path),
        ImageFormat::ObjectText => {
            let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_object_text(&text)
        }
    }
}
