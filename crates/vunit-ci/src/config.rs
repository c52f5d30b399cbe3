//! Run configuration handed to the testbench orchestrator.

use serde::Serialize;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Environment variable selecting CI mode.
pub const CI_MODE_ENV: &str = "VUNIT_CI_MODE";

/// Flag carrying the XUnit XML output path.
pub const XUNIT_XML_FLAG: &str = "--xunit-xml";

/// Testbench search root when running inside CI.
pub const CI_TEST_PATH: &str = "./";

/// Testbench search root for local runs.
pub const LOCAL_TEST_PATH: &str = "./ip/";

/// Testbenches skipped because PLLE2_BASE has no VHDL binding in NVC.
pub const EXCLUDED_TESTBENCHES: [&str; 2] = ["tb_pll.vhd", "pll.vhd"];

const TB_PATTERN: &str = "**";
const TIMEOUT_MS: f64 = 1.0;

/// Configuration for a single orchestrator invocation.
///
/// Built once at startup and only borrowed afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunConfig {
    /// Directory searched for testbenches.
    pub path: PathBuf,

    /// Glob pattern selecting testbenches under `path`.
    pub tb_pattern: String,

    /// Timeout forwarded to the orchestrator, in milliseconds.
    pub timeout_ms: f64,

    pub gui: bool,
    pub compile_only: bool,
    pub clean: bool,
    pub debug: bool,

    /// Compile the Xilinx UNISIM behavioral models.
    pub use_xilinx_libs: bool,

    /// Compile the Intel/Altera behavioral models.
    pub use_intel_altera_libs: bool,

    /// Testbench file names to skip, in order.
    pub excluded: Vec<String>,

    /// Where the orchestrator writes XUnit XML, if requested.
    pub xunit_xml: Option<PathBuf>,

    /// Whether CI mode was detected.
    pub ci_mode: bool,
}

impl RunConfig {
    /// Build the configuration from the raw `VUNIT_CI_MODE` value and argv.
    pub fn from_sources<S: AsRef<OsStr>>(ci_mode_env: Option<&str>, args: &[S]) -> Self {
        let ci_mode = is_ci_mode(ci_mode_env);

        Self {
            path: test_path(ci_mode),
            tb_pattern: TB_PATTERN.to_string(),
            timeout_ms: TIMEOUT_MS,
            gui: false,
            compile_only: false,
            clean: false,
            debug: false,
            use_xilinx_libs: true,
            use_intel_altera_libs: true,
            excluded: EXCLUDED_TESTBENCHES.iter().map(|s| s.to_string()).collect(),
            xunit_xml: parse_xunit_xml(args),
            ci_mode,
        }
    }

    /// Build the configuration from the current process environment and argv.
    pub fn from_process() -> Self {
        let ci_mode_env = std::env::var(CI_MODE_ENV).ok();
        let args: Vec<OsString> = std::env::args_os().collect();
        Self::from_sources(ci_mode_env.as_deref(), &args)
    }
}

/// CI mode is on only for `true`, in any letter casing.
pub fn is_ci_mode(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Testbench search root for the given mode.
pub fn test_path(ci_mode: bool) -> PathBuf {
    if ci_mode {
        PathBuf::from(CI_TEST_PATH)
    } else {
        PathBuf::from(LOCAL_TEST_PATH)
    }
}

/// Value following the first `--xunit-xml` token.
///
/// A trailing flag with no value yields `None`. Other arguments are ignored,
/// whether or not they are valid UTF-8.
pub fn parse_xunit_xml<S: AsRef<OsStr>>(args: &[S]) -> Option<PathBuf> {
    let index = args.iter().position(|a| a.as_ref() == XUNIT_XML_FLAG)?;
    args.get(index + 1).map(|v| PathBuf::from(v.as_ref()))
}
