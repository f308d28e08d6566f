//! Shell executor port for running external commands.

use std::time::Duration;

/// The output of a shell command execution.
#[derive(Debug, Clone)]
pub struct ShellOutput {
    /// The exit code of the process.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

/// Executes shell commands.
///
/// Acceptance criteria may run arbitrary commands from the manifest; the
/// executor bounds each run with a timeout so one hung command cannot stall
/// the whole verification.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command string in the system shell and returns its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned or does not finish
    /// within `timeout`.
    fn run(
        &self,
        command: &str,
        timeout: Duration,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>>;
}
