//! Live shell executor using `std::process::Command` with a bounded timeout.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Live shell executor that runs commands via the system shell.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(
        &self,
        command: &str,
        timeout: Duration,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        run_with_timeout(&mut cmd, timeout)
    }
}

/// Spawns `cmd` with piped output and waits for it to finish, killing the
/// process if it exceeds `timeout`.
///
/// Output is drained on background threads while polling `try_wait`, so a
/// child producing more than a pipe buffer of output cannot deadlock.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned or the timeout elapses.
pub fn run_with_timeout(
    cmd: &mut Command,
    timeout: Duration,
) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
    let mut child = cmd.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped()).spawn()?;

    let stdout_handle = drain(child.stdout.take());
    let stderr_handle = drain(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            kill_and_reap(&mut child);
            // Let the drain threads observe the closed pipes before dropping them.
            let _ = stdout_handle.join();
            let _ = stderr_handle.join();
            return Err(format!("command timed out after {}s", timeout.as_secs()).into());
        }
        std::thread::sleep(Duration::from_millis(20));
    };

    let stdout = stdout_handle.join().unwrap_or_default();
    let stderr = stderr_handle.join().unwrap_or_default();

    Ok(ShellOutput {
        exit_code: status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    })
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> std::thread::JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn kill_and_reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
