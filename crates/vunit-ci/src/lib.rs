//! VUnit CI - CI/CD runner for VHDL testbenches
//!
//! Provides the glue between a CI job and the external testbench orchestrator:
//! - Builds a fixed run configuration from the environment and argv
//! - Hands it to the orchestrator exactly once
//! - Reports pass/fail and surfaces the orchestrator's return code

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod report;
pub mod runner;
pub mod telemetry;

// Re-export key types
pub use config::{RunConfig, CI_MODE_ENV, EXCLUDED_TESTBENCHES, XUNIT_XML_FLAG};
pub use error::{Result, RunnerError};
pub use orchestrator::{ProcessOrchestrator, TestbenchOrchestrator, RUNNER_CMD_ENV};
pub use report::RunOutcome;
pub use runner::run_testbenches;
pub use telemetry::init_tracing;
