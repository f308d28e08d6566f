//! Shared in-memory port fakes for unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

use crate::context::ServiceContext;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::{ShellExecutor, ShellOutput};
use crate::ports::test_runner::{TestOutcome, TestRunner};

/// In-memory filesystem fake.
pub struct MemFs {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemFs {
    /// Creates an empty in-memory filesystem.
    pub fn new() -> Self {
        Self { files: Mutex::new(HashMap::new()) }
    }

    /// Seeds a file at `path` with `contents`.
    pub fn seed(&self, path: &str, contents: &str) {
        self.files.lock().unwrap().insert(PathBuf::from(path), contents.to_string());
    }
}

impl FileSystem for MemFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.read_to_string(path)?.into_bytes())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.lock().unwrap();
        // Exact file, or any file "under" this path (directory semantics).
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path) && k != path)
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap();
        let mut names: Vec<String> = files
            .keys()
            .filter_map(|k| {
                if k.parent() == Some(path) {
                    k.file_name().map(|n| n.to_string_lossy().into_owned())
                } else {
                    None
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock fixed at 2025-06-15T10:30:00Z.
    pub fn default_instant() -> Self {
        Self(Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Shell fake that maps exact command strings to canned outputs.
///
/// Unknown commands produce a spawn-style error, mirroring a command that
/// could not be executed.
pub struct ScriptedShell {
    outputs: HashMap<String, ShellOutput>,
}

impl ScriptedShell {
    /// Creates a shell fake with no scripted commands.
    pub fn new() -> Self {
        Self { outputs: HashMap::new() }
    }

    /// Scripts `command` to produce the given exit code and streams.
    pub fn on(mut self, command: &str, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.outputs.insert(
            command.to_string(),
            ShellOutput { exit_code, stdout: stdout.to_string(), stderr: stderr.to_string() },
        );
        self
    }
}

impl ShellExecutor for ScriptedShell {
    fn run(
        &self,
        command: &str,
        _timeout: Duration,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        self.outputs
            .get(command)
            .cloned()
            .ok_or_else(|| format!("command not found: {command}").into())
    }
}

/// Test runner fake returning one fixed outcome.
pub struct StaticTestRunner {
    /// Whether the fake reports the tests as passed.
    pub passed: bool,
    /// Combined output the fake reports.
    pub output: String,
}

impl TestRunner for StaticTestRunner {
    fn run_tests(
        &self,
        _selector: &str,
    ) -> Result<TestOutcome, Box<dyn std::error::Error + Send + Sync>> {
        Ok(TestOutcome { passed: self.passed, output: self.output.clone() })
    }
}

/// Test runner fake that always fails to spawn.
pub struct FailingTestRunner;

impl TestRunner for FailingTestRunner {
    fn run_tests(
        &self,
        _selector: &str,
    ) -> Result<TestOutcome, Box<dyn std::error::Error + Send + Sync>> {
        Err("test runner not available".into())
    }
}

/// Builds a context around `fs` with a fixed clock, an empty scripted
/// shell, and a passing test runner.
pub fn context_with_fs(fs: MemFs) -> ServiceContext {
    ServiceContext {
        clock: Box::new(FixedClock::default_instant()),
        fs: Box::new(fs),
        shell: Box::new(ScriptedShell::new()),
        tests: Box::new(StaticTestRunner { passed: true, output: String::new() }),
    }
}
