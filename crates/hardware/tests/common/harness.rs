use pep9_core::Simulator;
use pep9_core::common::error::MachineError;
use pep9_core::config::Config;
use pep9_core::core::Cpu;
use pep9_core::core::arch::{Registers, StatusBits};
use pep9_core::sim::ExitReason;

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        Self {
            sim: Simulator::new(config),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Copies `program` to address 0 and applies the reset registers.
    pub fn load(mut self, program: &[u8]) -> Self {
        self.sim.load_and_initialize(program);
        self
    }

    /// Queues bytes on the input port.
    pub fn with_input(mut self, bytes: &[u8]) -> Self {
        self.sim.feed_input(bytes);
        self
    }

    /// Writes a byte straight into RAM.
    pub fn poke_u8(mut self, addr: u16, val: u8) -> Self {
        self.sim.cpu.memory.ram_mut()[addr as usize] = val;
        self
    }

    /// Writes a big-endian word straight into RAM.
    pub fn poke_u16(mut self, addr: u16, val: u16) -> Self {
        let [hi, lo] = val.to_be_bytes();
        let ram = self.sim.cpu.memory.ram_mut();
        ram[addr as usize] = hi;
        ram[addr.wrapping_add(1) as usize] = lo;
        self
    }

    pub fn with_flags(mut self, flags: StatusBits) -> Self {
        self.sim.cpu.status = flags;
        self
    }

    pub fn with_x(mut self, x: u16) -> Self {
        self.sim.cpu.regs.x = x;
        self
    }

    pub fn with_sp(mut self, sp: u16) -> Self {
        self.sim.cpu.regs.sp = sp;
        self
    }

    pub fn run(&mut self) -> Result<ExitReason, MachineError> {
        self.sim.run()
    }

    /// Runs and asserts the program reached STOP.
    pub fn run_to_halt(mut self) -> Self {
        match self.sim.run() {
            Ok(ExitReason::Halted) => self,
            other => panic!("expected halt, got {other:?}"),
        }
    }

    pub fn regs(&self) -> Registers {
        self.sim.cpu.regs
    }

    pub fn flags(&self) -> StatusBits {
        self.sim.cpu.status
    }

    pub fn peek_u16(&self, addr: u16) -> u16 {
        self.sim.cpu.memory.peek_u16(addr)
    }

    pub fn peek_u8(&self, addr: u16) -> u8 {
        self.sim.cpu.memory.ram()[addr as usize]
    }
}
