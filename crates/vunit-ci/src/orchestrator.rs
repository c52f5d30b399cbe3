//! Binding to the external testbench orchestrator.
//!
//! The orchestrator runs as a separate program and receives the run
//! configuration as command-line flags (`--path`, `--tb-pattern`,
//! `--timeout-ms`, boolean switches, one `--exclude` per skipped file,
//! `--xunit-xml`). The testbench library itself is driven through keyword
//! arguments, so the program named by `VUNIT_RUNNER_CMD` (or the default
//! module) must be an adapter that accepts these flags and forwards them.

use crate::config::RunConfig;
use crate::error::{Result, RunnerError};
use async_trait::async_trait;
use std::ffi::OsString;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;
use tracing::{debug, info};

/// Environment variable overriding the orchestrator command line.
pub const RUNNER_CMD_ENV: &str = "VUNIT_RUNNER_CMD";

/// Orchestrator used when `VUNIT_RUNNER_CMD` is not set.
pub const DEFAULT_RUNNER_CMD: &str = "python3 -m vhdl_utils.run_all_testbenches_lib";

/// Discovers, compiles and simulates every testbench selected by a
/// [`RunConfig`].
///
/// Returns `0` when all testbenches passed and a non-zero code otherwise.
/// An `Err` means the orchestrator itself broke, not that tests failed.
#[async_trait]
pub trait TestbenchOrchestrator: Send + Sync {
    async fn run_all(&self, config: &RunConfig) -> Result<i32>;
}

/// Orchestrator running as a child process that shares this process's
/// stdio.
#[derive(Debug, Clone)]
pub struct ProcessOrchestrator {
    /// Program followed by its leading arguments.
    command: Vec<String>,
}

impl ProcessOrchestrator {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    /// Split a whitespace-separated command line.
    pub fn from_command_line(line: &str) -> Self {
        Self::new(line.split_whitespace().map(String::from).collect())
    }

    /// Use `VUNIT_RUNNER_CMD`, falling back to [`DEFAULT_RUNNER_CMD`].
    pub fn from_env() -> Self {
        match std::env::var(RUNNER_CMD_ENV) {
            Ok(line) if !line.trim().is_empty() => Self::from_command_line(&line),
            _ => Self::from_command_line(DEFAULT_RUNNER_CMD),
        }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Render `config` as orchestrator arguments.
    ///
    /// Paths are passed as raw OS strings, so non-UTF-8 paths arrive unchanged.
    pub fn config_args(config: &RunConfig) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--path".into(),
            config.path.clone().into_os_string(),
            "--tb-pattern".into(),
            config.tb_pattern.clone().into(),
            "--timeout-ms".into(),
            config.timeout_ms.to_string().into(),
        ];

        let switches = [
            (config.gui, "--gui"),
            (config.compile_only, "--compile-only"),
            (config.clean, "--clean"),
            (config.debug, "--debug"),
            (config.use_xilinx_libs, "--use-xilinx-libs"),
            (config.use_intel_altera_libs, "--use-intel-altera-libs"),
        ];
        args.extend(
            switches
                .iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, flag)| OsString::from(flag)),
        );

        for name in &config.excluded {
            args.push("--exclude".into());
            args.push(name.into());
        }

        if let Some(xunit_xml) = &config.xunit_xml {
            args.push("--xunit-xml".into());
            args.push(xunit_xml.clone().into_os_string());
        }

        args
    }
}

#[async_trait]
impl TestbenchOrchestrator for ProcessOrchestrator {
    async fn run_all(&self, config: &RunConfig) -> Result<i32> {
        let (program, leading) = self.command.split_first().ok_or(RunnerError::EmptyCommand)?;
        let args = Self::config_args(config);

        debug!(program = %program, args = ?args, "Launching testbench orchestrator");
        let start = Instant::now();

        let status = Command::new(program)
            .args(leading)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| RunnerError::Spawn {
                program: program.clone(),
                source,
            })?;

        let code = status.code().ok_or_else(|| RunnerError::Terminated {
            program: program.clone(),
        })?;

        info!(
            exit_code = code,
            duration_ms = start.elapsed().as_millis() as u64,
            "Testbench orchestrator finished"
        );
        Ok(code)
    }
}
