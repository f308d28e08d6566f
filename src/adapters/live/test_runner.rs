//! Live test runners for the `test_passes` acceptance clause.

use std::process::Command;
use std::time::Duration;

use super::shell::run_with_timeout;
use crate::ports::test_runner::{TestOutcome, TestRunner};

/// How long a test-runner invocation may take before it is killed.
const TEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs Swift package tests via `swift test`.
///
/// A non-empty selector is passed through as `--filter <selector>`.
pub struct SwiftTestRunner;

impl TestRunner for SwiftTestRunner {
    fn run_tests(
        &self,
        selector: &str,
    ) -> Result<TestOutcome, Box<dyn std::error::Error + Send + Sync>> {
        let mut cmd = Command::new("swift");
        cmd.arg("test");
        if !selector.trim().is_empty() {
            cmd.arg("--filter").arg(selector);
        }
        let output = run_with_timeout(&mut cmd, TEST_TIMEOUT)?;
        Ok(TestOutcome {
            passed: output.exit_code == 0,
            output: format!("{}{}", output.stdout, output.stderr),
        })
    }
}

/// Generic runner that treats the selector as a shell command.
///
/// The default for projects whose tech stack has no dedicated runner; the
/// tests pass iff the command exits 0.
pub struct ShellTestRunner;

impl TestRunner for ShellTestRunner {
    fn run_tests(
        &self,
        selector: &str,
    ) -> Result<TestOutcome, Box<dyn std::error::Error + Send + Sync>> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(selector);
        let output = run_with_timeout(&mut cmd, TEST_TIMEOUT)?;
        Ok(TestOutcome {
            passed: output.exit_code == 0,
            output: format!("{}{}", output.stdout, output.stderr),
        })
    }
}
