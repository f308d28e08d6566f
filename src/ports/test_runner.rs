//! Test runner capability for the `test_passes` acceptance clause.

/// The outcome of a test-runner invocation.
#[derive(Debug, Clone)]
pub struct TestOutcome {
    /// Whether the selected tests passed.
    pub passed: bool,
    /// Combined stdout and stderr of the run.
    pub output: String,
}

/// Runs a project's test suite for a given selector.
///
/// One implementation exists per target ecosystem (Swift, generic shell).
/// The evaluator holds whichever implementation was selected at context
/// construction time.
pub trait TestRunner: Send + Sync {
    /// Runs the tests named by `selector` and reports the combined output.
    ///
    /// # Errors
    ///
    /// Returns an error if the runner cannot be spawned or times out. The
    /// evaluator records such errors as failed checks rather than aborting.
    fn run_tests(
        &self,
        selector: &str,
    ) -> Result<TestOutcome, Box<dyn std::error::Error + Send + Sync>>;
}
