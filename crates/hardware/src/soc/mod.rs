//! System Components.
//!
//! The Pep/9 machine has a single memory device: 64 KiB of RAM with the console
//! ports mapped into it.

/// Main memory and the memory-mapped console buffers.
pub mod memory;

pub use memory::Memory;
pub use memory::buffer::RingBuffer;
