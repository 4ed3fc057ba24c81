//! Instruction Execution.
//!
//! This module implements the Pep/9 instruction families on top of the decoder,
//! the ALU, and the addressing-mode resolver. It covers the following:
//! 1. **Control Flow:** STOP, CALL/RET, and the conditional branches.
//! 2. **Unary:** Register moves, NOT/NEG, and the shifts and rotates.
//! 3. **Arithmetic:** ADD/SUB/AND/OR on A, X, or SP, and compare.
//! 4. **Load/Store:** Byte and word transfers between A/X and memory.

use tracing::trace;

use super::Cpu;
use crate::common::data::Width;
use crate::common::error::MachineError;
use crate::core::arch::Reg;
use crate::core::units::alu::flags::sign_changed;
use crate::core::units::alu::{Alu, AluOp, shifts};
use crate::core::units::bru::BranchCondition;
use crate::core::units::lsu::AddressingMode;
use crate::isa::{ArithTarget, Instruction, UnaryOp, decode};

impl Cpu {
    /// Executes the instruction held in `regs.opcode` / `regs.operand`.
    ///
    /// Does not fetch; [`Cpu::step`] fetches and then calls this.
    ///
    /// # Errors
    ///
    /// [`MachineError::UnknownOpcode`] for 0x26-0x4F and
    /// [`MachineError::InvalidStoreTarget`] for a store in immediate mode.
    pub fn execute(&mut self) -> Result<(), MachineError> {
        let opcode = self.regs.opcode;
        let inst = decode(opcode).ok_or(MachineError::UnknownOpcode {
            opcode,
            pc: self.instruction_pc,
        })?;

        if self.trace {
            trace!(
                pc = self.instruction_pc,
                opcode,
                operand = self.regs.operand,
                "{inst:?}"
            );
        }

        match inst {
            Instruction::Halt => {}
            Instruction::Return => self.ret(),
            Instruction::Call { indexed } => self.call(indexed),
            Instruction::Unary(op) => self.unary(op),
            Instruction::Branch { condition, indexed } => self.branch(condition, indexed),
            Instruction::Arithmetic { op, target, mode } => self.arithmetic(op, target, mode),
            Instruction::Compare { reg, mode } => self.compare(reg, mode),
            Instruction::Load { reg, width, mode } => self.load(reg, width, mode),
            Instruction::Store { reg, width, mode } => self.store(reg, width, mode)?,
        }

        self.stats.instructions_retired += 1;
        Ok(())
    }

    /// Operand, or operand + X for the indexed forms of branch and call.
    const fn control_target(&self, indexed: bool) -> u16 {
        if indexed {
            self.regs.operand.wrapping_add(self.regs.x)
        } else {
            self.regs.operand
        }
    }

    fn ret(&mut self) {
        self.regs.pc = self.memory.read_u16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        self.stats.inst_return += 1;
    }

    fn call(&mut self, indexed: bool) {
        let target = self.control_target(indexed);
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        self.memory.write_u16(self.regs.sp, self.regs.pc);
        self.regs.pc = target;
        self.stats.inst_call += 1;
    }

    fn branch(&mut self, condition: BranchCondition, indexed: bool) {
        self.stats.inst_branch += 1;
        if condition.is_taken(&self.status) {
            self.regs.pc = self.control_target(indexed);
            self.stats.branches_taken += 1;
        }
    }

    fn unary(&mut self, op: UnaryOp) {
        self.stats.inst_alu += 1;
        match op {
            UnaryOp::MovSpA => self.regs.a = self.regs.sp,
            UnaryOp::MovFlgA => self.regs.a = self.status.to_nibble(),
            UnaryOp::MovAFlg => {
                // Masks are tested cumulatively: V needs bits 0 and 1, Z reads
                // bit 1 and N reads bit 2. This is not the inverse of MOVFLGA.
                let a = self.regs.a;
                self.status.c = a & 0x01 == 0x01;
                self.status.z = a & 0x02 == 0x02;
                self.status.v = a & 0x03 == 0x03;
                self.status.n = a & 0x04 == 0x04;
            }
            UnaryOp::Not(reg) => {
                let result = !self.regs.read(reg);
                self.regs.write(reg, result);
                self.status.set_nz(result);
            }
            UnaryOp::Neg(reg) => {
                let prev = self.regs.read(reg);
                let result = prev.wrapping_neg();
                self.regs.write(reg, result);
                self.status.set_nz(result);
                self.status.v = sign_changed(prev, result);
            }
            UnaryOp::Asl(reg) => self.shift(reg, shifts::asl),
            UnaryOp::Asr(reg) => self.shift(reg, shifts::asr),
            UnaryOp::Rol(reg) => {
                let carry = self.status.c;
                self.shift(reg, |v| shifts::rol(v, carry));
            }
            UnaryOp::Ror(reg) => {
                let carry = self.status.c;
                self.shift(reg, |v| shifts::ror(v, carry));
            }
        }
    }

    /// Applies a shift or rotate to `reg` and sets NZVC from it.
    fn shift(&mut self, reg: Reg, op: impl FnOnce(u16) -> (u16, bool)) {
        let prev = self.regs.read(reg);
        let (result, carry) = op(prev);
        self.regs.write(reg, result);
        self.status.set_nz(result);
        self.status.v = sign_changed(prev, result);
        self.status.c = carry;
    }

    fn arithmetic(&mut self, op: AluOp, target: ArithTarget, mode: AddressingMode) {
        self.stats.inst_alu += 1;
        let operand = self.load_operand(mode, Width::Word);
        match target {
            ArithTarget::StackPointer => {
                self.regs.sp = Alu::execute(op, self.regs.sp, operand, &mut self.status);
            }
            ArithTarget::Register(reg) => {
                let result = Alu::execute(op, self.regs.read(reg), operand, &mut self.status);
                self.regs.write(reg, result);
            }
        }
    }

    /// Computes `operand - reg` for its flags only.
    fn compare(&mut self, reg: Reg, mode: AddressingMode) {
        self.stats.inst_compare += 1;
        let operand = self.load_operand(mode, Width::Word);
        let _ = Alu::execute(AluOp::Sub, operand, self.regs.read(reg), &mut self.status);
    }

    fn load(&mut self, reg: Reg, width: Width, mode: AddressingMode) {
        self.stats.inst_load += 1;
        let value = self.load_operand(mode, width);
        self.regs.write(reg, value);
    }

    fn store(&mut self, reg: Reg, width: Width, mode: AddressingMode) -> Result<(), MachineError> {
        self.store_operand(mode, width, self.regs.read(reg))?;
        self.stats.inst_store += 1;
        Ok(())
    }
}
