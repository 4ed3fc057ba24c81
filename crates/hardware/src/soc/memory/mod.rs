//! Main Memory and Memory-Mapped Console.
//!
//! This module implements the machine's single memory device. It provides:
//! 1. **RAM:** A flat 64 KiB byte store addressed by `u16`.
//! 2. **Console Ports:** Two intercepted addresses backed by ring buffers:
//!    reading [`INPUT_PORT`] pops standard input, writing [`OUTPUT_PORT`] pushes
//!    standard output. Every other address is plain RAM.
//! 3. **Word Access:** Big-endian words built from two byte accesses, so a word
//!    access overlapping a port triggers the port side effect for that byte.

/// Ring buffers backing the console ports.
pub mod buffer;

use self::buffer::RingBuffer;
use crate::common::constants::{INPUT_PORT, OUTPUT_PORT, RAM_SIZE};

/// System memory: RAM plus the console ring buffers.
#[derive(Clone, Debug)]
pub struct Memory {
    ram: Box<[u8]>,
    /// Standard input, filled by the host before a run.
    pub input: RingBuffer,
    /// Standard output, drained by the host after a run.
    pub output: RingBuffer,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Creates zero-filled RAM and empty console buffers.
    pub fn new() -> Self {
        Self {
            ram: vec![0; RAM_SIZE].into_boxed_slice(),
            input: RingBuffer::new(),
            output: RingBuffer::new(),
        }
    }

    /// Reads a byte, popping standard input when `addr` is the input port.
    pub fn read_u8(&mut self, addr: u16) -> u8 {
        if addr == INPUT_PORT {
            self.input.pop()
        } else {
            self.ram[addr as usize]
        }
    }

    /// Writes a byte, pushing standard output when `addr` is the output port.
    pub fn write_u8(&mut self, addr: u16, val: u8) {
        if addr == OUTPUT_PORT {
            self.output.push(val);
        } else {
            self.ram[addr as usize] = val;
        }
    }

    /// Reads a big-endian word; the second byte address wraps at 0xFFFF.
    pub fn read_u16(&mut self, addr: u16) -> u16 {
        let hi = self.read_u8(addr);
        let lo = self.read_u8(addr.wrapping_add(1));
        u16::from_be_bytes([hi, lo])
    }

    /// Writes a big-endian word; the second byte address wraps at 0xFFFF.
    pub fn write_u16(&mut self, addr: u16, val: u16) {
        let [hi, lo] = val.to_be_bytes();
        self.write_u8(addr, hi);
        self.write_u8(addr.wrapping_add(1), lo);
    }

    /// Copies `data` into RAM starting at address 0 without touching the ports.
    ///
    /// Bytes past the end of RAM are dropped; the number of bytes written is returned.
    pub fn load(&mut self, data: &[u8]) -> usize {
        let len = data.len().min(RAM_SIZE);
        self.ram[..len].copy_from_slice(&data[..len]);
        len
    }

    /// Read-only view of RAM. Port addresses show their (unused) backing bytes.
    pub fn ram(&self) -> &[u8] {
        &self.ram
    }

    /// Mutable view of RAM, bypassing the console ports.
    pub fn ram_mut(&mut self) -> &mut [u8] {
        &mut self.ram
    }

    /// Reads a big-endian word straight from RAM with no port side effects.
    pub fn peek_u16(&self, addr: u16) -> u16 {
        u16::from_be_bytes([
            self.ram[addr as usize],
            self.ram[addr.wrapping_add(1) as usize],
        ])
    }
}
