//! Console banner and result line.

use crate::config::RunConfig;
use std::io::{self, Write};

const OK_GREEN: &str = "\x1b[92m";
const FAIL_RED: &str = "\x1b[91m";
const END_COLOR: &str = "\x1b[0m";

/// Outcome of a completed orchestrator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Passed,
    /// Non-zero code returned by the orchestrator.
    Failed(i32),
}

impl RunOutcome {
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            RunOutcome::Passed
        } else {
            RunOutcome::Failed(code)
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, RunOutcome::Passed)
    }

    /// The orchestrator's code, unchanged.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Passed => 0,
            RunOutcome::Failed(code) => *code,
        }
    }

    /// Colored `HDL Tests: ...` line.
    pub fn summary_line(&self) -> String {
        let (color, label) = if self.passed() {
            (OK_GREEN, "Passed")
        } else {
            (FAIL_RED, "Failed")
        };
        format!("HDL Tests: {color}{label}{END_COLOR}")
    }
}

/// Print the banner shown before the orchestrator starts.
pub fn write_banner<W: Write>(out: &mut W, config: &RunConfig) -> io::Result<()> {
    writeln!(out, "=== CI/CD Test Runner ===")?;
    writeln!(out, "Running with NVC VHDL simulator + behavioral models")?;
    writeln!(
        out,
        "Strategy: VHDL behavioral models for Xilinx primitives (like PLLE2_BASE)"
    )?;
    writeln!(out, "Note: NVC cannot directly use Verilog primitives in VHDL code")?;
    writeln!(out, "Test path: {}", config.path.display())?;
    writeln!(out, "CI Mode: {}", config.ci_mode)?;
    if let Some(xunit_xml) = config.xunit_xml.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        writeln!(out, "XUnit XML output: {}", xunit_xml.display())?;
    }
    writeln!(out)
}

/// Print the results section shown after the orchestrator returns.
pub fn write_results<W: Write>(out: &mut W, outcome: RunOutcome) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== CI/CD Test Results ===")?;
    writeln!(out, "{}", outcome.summary_line())
}
