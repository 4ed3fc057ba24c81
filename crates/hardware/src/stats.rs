//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the Pep/9 simulator. It provides:
//! 1. **Throughput:** Retired instructions, host time, and derived MIPS.
//! 2. **Instruction mix:** Counts by family (ALU, compare, load, store, branch, call, return).
//! 3. **Branches:** Executed and taken counts.

use std::time::Instant;

/// Simulation statistics structure tracking execution metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch instructions retired.
    pub inst_branch: u64,
    /// Count of unary and two-operand arithmetic/logic instructions retired.
    pub inst_alu: u64,
    /// Count of compare instructions retired.
    pub inst_compare: u64,
    /// Count of CALL instructions retired.
    pub inst_call: u64,
    /// Count of RET instructions retired.
    pub inst_return: u64,

    /// Number of branches whose condition held.
    pub branches_taken: u64,
}

impl Default for SimStats {
    /// Returns zeroed counters with the host clock started now.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_alu: 0,
            inst_compare: 0,
            inst_call: 0,
            inst_return: 0,
            branches_taken: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"branch"`.
/// Pass an empty slice to `render_sections` to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

const RULE: &str = "----------------------------------------------------------\n";
const BANNER: &str = "==========================================================\n";

impl SimStats {
    /// Renders the requested statistics sections as a text table.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; an empty
    /// slice renders everything. Percentages divide by `max(instructions, 1)`.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |count: u64| (count as f64 / instr) * 100.0;
        let mut out = String::new();

        out.push_str(BANNER);
        if want("summary") {
            let mips = if seconds > 0.0 {
                (self.instructions_retired as f64 / seconds) / 1_000_000.0
            } else {
                0.0
            };
            out.push_str("PEP/9 SIMULATION STATISTICS\n");
            out.push_str(BANNER);
            out.push_str(&format!("host_seconds             {seconds:.4} s\n"));
            out.push_str(&format!(
                "sim_insts                {}\n",
                self.instructions_retired
            ));
            out.push_str(&format!("sim_mips                 {mips:.2}\n"));
            out.push_str(RULE);
        }
        if want("instruction_mix") {
            out.push_str("INSTRUCTION MIX\n");
            for (name, count) in [
                ("op.alu", self.inst_alu),
                ("op.compare", self.inst_compare),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.call", self.inst_call),
                ("op.return", self.inst_return),
            ] {
                out.push_str(&format!("  {name:<22} {count} ({:.2}%)\n", pct(count)));
            }
            out.push_str(RULE);
        }
        if want("branch") {
            let taken_rate = if self.inst_branch > 0 {
                100.0 * (self.branches_taken as f64 / self.inst_branch as f64)
            } else {
                0.0
            };
            out.push_str("BRANCHES\n");
            out.push_str(&format!("  br.executed            {}\n", self.inst_branch));
            out.push_str(&format!("  br.taken               {}\n", self.branches_taken));
            out.push_str(&format!("  br.taken_rate          {taken_rate:.2}%\n"));
        }
        out.push_str(BANNER);
        out
    }

    /// Prints all statistics sections to stderr.
    pub fn print(&self) {
        eprint!("{}", self.render_sections(&[]));
    }
}
