//! CI/CD test runner for VUnit testbenches
//!
//! Runs every VHDL testbench through the external orchestrator with the
//! Xilinx UNISIM and Intel/Altera behavioral models enabled. Testbenches that
//! need vendor primitives without a VHDL binding (PLLE2_BASE) are excluded.
//!
//! ## Usage
//!
//! ```text
//! test-runner-ci-cd [--xunit-xml <path>]
//! ```
//!
//! Set `VUNIT_CI_MODE=true` to search the current directory instead of `./ip/`.
//! The process exits with the orchestrator's return code.

use anyhow::{Context, Result};
use tracing::{info, Level};
use vunit_ci::telemetry::{json_requested, LOG_JSON_ENV};
use vunit_ci::{init_tracing, run_testbenches, ProcessOrchestrator, RunConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let json = json_requested(std::env::var(LOG_JSON_ENV).ok().as_deref());
    init_tracing(json, Level::WARN);

    let config = RunConfig::from_process();
    let orchestrator = ProcessOrchestrator::from_env();
    info!(command = ?orchestrator.command(), ci_mode = config.ci_mode, "Starting testbench run");

    let mut stdout = std::io::stdout();
    let outcome = run_testbenches(&orchestrator, &config, &mut stdout)
        .await
        .context("Testbench orchestrator failed")?;

    std::process::exit(outcome.exit_code())
}
