//! Simulator: owns the CPU and the run budget side-by-side.
//!
//! `Cpu::run` never yields. The simulator drives `Cpu::step` itself so that a
//! configured instruction budget can stop runaway programs, and so that the
//! 256-byte output ring is emptied into host memory before it can wrap.

use tracing::{info, warn};

use crate::common::error::MachineError;
use crate::config::Config;
use crate::core::Cpu;

/// Why [`Simulator::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The machine executed STOP.
    Halted,
    /// `general.max_instructions` was reached first.
    InstructionLimit,
}

/// Top-level simulator: CPU architectural state + run configuration.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, flags, memory, stats).
    pub cpu: Cpu,
    max_instructions: Option<u64>,
    output: Vec<u8>,
}

impl Simulator {
    /// Creates a new simulator with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            max_instructions: config.general.max_instructions,
            output: Vec::new(),
        }
    }

    /// Loads `program` at address 0 and applies the reset register values.
    pub fn load_and_initialize(&mut self, program: &[u8]) {
        self.cpu.load_program(program);
        self.cpu.initialize();
    }

    /// Queues bytes for the program to read from the input port.
    ///
    /// The input buffer holds 256 bytes; older unread bytes are overwritten.
    pub fn feed_input(&mut self, bytes: &[u8]) {
        self.cpu.memory.input.extend_from_slice(bytes);
    }

    /// Bytes the program has written to the output port since the last call.
    pub fn take_output(&mut self) -> Vec<u8> {
        self.collect_output();
        std::mem::take(&mut self.output)
    }

    fn collect_output(&mut self) {
        self.output.extend(self.cpu.memory.output.drain());
    }

    /// Runs until STOP, a fatal error, or the instruction budget.
    ///
    /// # Errors
    ///
    /// Propagates the fatal [`MachineError`] that stopped the machine.
    pub fn run(&mut self) -> Result<ExitReason, MachineError> {
        let start = self.cpu.stats.instructions_retired;
        while self.cpu.is_running() {
            let executed = self.cpu.stats.instructions_retired - start;
            if self.max_instructions.is_some_and(|limit| executed >= limit) {
                warn!(executed, pc = self.cpu.regs.pc, "instruction limit reached");
                return Ok(ExitReason::InstructionLimit);
            }
            let stepped = self.cpu.step();
            self.collect_output();
            stepped?;
        }
        info!(
            instructions = self.cpu.stats.instructions_retired - start,
            "simulation finished"
        );
        Ok(ExitReason::Halted)
    }
}
