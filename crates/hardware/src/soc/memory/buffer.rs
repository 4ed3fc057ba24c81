//! Console Ring Buffer.
//!
//! This module provides the fixed-size ring buffers behind the memory-mapped console
//! ports. Each buffer has independent read and write cursors that wrap modulo its
//! size. Reads never block: popping an "empty" buffer returns whatever byte sits
//! at the read cursor, which is how the hardware port behaves when the input was
//! pre-populated by the host.

use std::ops::Index;

use crate::common::constants::IO_BUFFER_SIZE;

/// A 256-byte ring buffer with wrapping read and write cursors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBuffer {
    data: [u8; IO_BUFFER_SIZE],
    read_pos: u8,
    write_pos: u8,
}

impl Default for RingBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RingBuffer {
    /// Creates a zero-filled buffer with both cursors at 0.
    pub const fn new() -> Self {
        Self {
            data: [0; IO_BUFFER_SIZE],
            read_pos: 0,
            write_pos: 0,
        }
    }

    /// Writes `byte` at the write cursor and advances it, wrapping at 256.
    pub const fn push(&mut self, byte: u8) {
        self.data[self.write_pos as usize] = byte;
        self.write_pos = self.write_pos.wrapping_add(1);
    }

    /// Pushes every byte of `bytes` in order.
    ///
    /// More than 256 bytes overwrite the oldest entries.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }

    /// Returns the byte at the read cursor and advances it, wrapping at 256.
    pub const fn pop(&mut self) -> u8 {
        let byte = self.data[self.read_pos as usize];
        self.read_pos = self.read_pos.wrapping_add(1);
        byte
    }

    /// Current read cursor.
    pub const fn read_pos(&self) -> u8 {
        self.read_pos
    }

    /// Current write cursor.
    pub const fn write_pos(&self) -> u8 {
        self.write_pos
    }

    /// Raw backing storage, indexed from 0 regardless of cursor positions.
    pub const fn as_bytes(&self) -> &[u8; IO_BUFFER_SIZE] {
        &self.data
    }

    /// Bytes between the read and write cursors, in order.
    ///
    /// After a full lap the cursors coincide and this is empty.
    pub fn pending(&self) -> Vec<u8> {
        let len = self.write_pos.wrapping_sub(self.read_pos) as usize;
        (0..len)
            .map(|i| self.data[self.read_pos.wrapping_add(i as u8) as usize])
            .collect()
    }

    /// Returns the pending bytes and moves the read cursor up to the write cursor.
    pub fn drain(&mut self) -> Vec<u8> {
        let out = self.pending();
        self.read_pos = self.write_pos;
        out
    }

    /// Resets both cursors and zero-fills the storage.
    pub const fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Index<usize> for RingBuffer {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}
