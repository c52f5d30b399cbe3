//! Runs the orchestrator once between the banner and the result line.

use crate::config::RunConfig;
use crate::error::Result;
use crate::orchestrator::TestbenchOrchestrator;
use crate::report::{write_banner, write_results, RunOutcome};
use std::io::Write;
use tracing::{debug, warn};

/// Print the banner, invoke `orchestrator` once, print the result line.
///
/// The orchestrator's code is carried unchanged in the returned outcome.
/// Orchestrator faults are returned as-is; nothing is retried.
pub async fn run_testbenches<O, W>(
    orchestrator: &O,
    config: &RunConfig,
    out: &mut W,
) -> Result<RunOutcome>
where
    O: TestbenchOrchestrator + ?Sized,
    W: Write,
{
    if let Ok(json) = serde_json::to_string(config) {
        debug!(config = %json, "Effective run configuration");
    }

    write_banner(out, config)?;
    out.flush()?;

    let code = orchestrator.run_all(config).await?;
    let outcome = RunOutcome::from_code(code);
    if !outcome.passed() {
        warn!(exit_code = code, "Testbench run reported failures");
    }

    write_results(out, outcome)?;
    out.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RunnerError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns a fixed code and records every config it receives.
    struct FixedOrchestrator {
        code: i32,
        calls: Mutex<Vec<RunConfig>>,
    }

    impl FixedOrchestrator {
        fn new(code: i32) -> Self {
            Self {
                code,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TestbenchOrchestrator for FixedOrchestrator {
        async fn run_all(&self, config: &RunConfig) -> Result<i32> {
            self.calls.lock().unwrap().push(config.clone());
            Ok(self.code)
        }
    }

    struct BrokenOrchestrator;

    #[async_trait]
    impl TestbenchOrchestrator for BrokenOrchestrator {
        async fn run_all(&self, _config: &RunConfig) -> Result<i32> {
            Err(RunnerError::Terminated {
                program: "nvc".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_passing_run() {
        let orchestrator = FixedOrchestrator::new(0);
        let config = RunConfig::from_sources(None, &["runner"]);
        let mut out = Vec::new();

        let outcome = run_testbenches(&orchestrator, &config, &mut out)
            .await
            .expect("run failed");

        assert_eq!(outcome, RunOutcome::Passed);
        assert_eq!(outcome.exit_code(), 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("HDL Tests: \x1b[92mPassed\x1b[0m"));

        let calls = orchestrator.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], config);
    }

    #[tokio::test]
    async fn test_failing_run_keeps_code() {
        let orchestrator = FixedOrchestrator::new(2);
        let config = RunConfig::from_sources(Some("true"), &["runner", "--xunit-xml", "r.xml"]);
        let mut out = Vec::new();

        let outcome = run_testbenches(&orchestrator, &config, &mut out)
            .await
            .expect("run failed");

        assert_eq!(outcome.exit_code(), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("HDL Tests: \x1b[91mFailed\x1b[0m"));
        assert!(text.contains("XUnit XML output: r.xml"));
    }

    #[tokio::test]
    async fn test_fault_propagates_after_banner() {
        let config = RunConfig::from_sources(None, &["runner"]);
        let mut out = Vec::new();

        let err = run_testbenches(&BrokenOrchestrator, &config, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, RunnerError::Terminated { .. }));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== CI/CD Test Runner ==="));
        assert!(!text.contains("HDL Tests"));
    }
}
