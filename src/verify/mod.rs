//! Acceptance-criteria evaluation.
//!
//! Evaluates one task's declarative acceptance criteria against the live
//! environment and returns a per-check pass/fail report. Every check is
//! independent: a clause that errors (missing file, dead command, timeout)
//! becomes a failed entry, never an abort, so one bad clause cannot hide
//! the results of the others.

pub mod proof;

use std::path::Path;
use std::time::Duration;

use crate::context::ServiceContext;
use crate::error::ManifestoError;
use crate::manifest::Task;

/// Timeout applied to each `command_succeeds` entry.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// How much stdout/stderr a command check keeps in its details.
const COMMAND_DETAIL_CHARS: usize = 100;

/// How much runner output a test check keeps in its details.
const TEST_DETAIL_CHARS: usize = 200;

/// Result of a single acceptance check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Name keying this check in the report (e.g. "`file_README.md`").
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable detail (found/missing path, captured output, error).
    pub details: String,
}

/// Aggregated result of evaluating one task's acceptance criteria.
#[derive(Debug, Clone)]
pub struct VerificationReport {
    /// The task that was evaluated.
    pub task_id: String,
    /// Per-check outcomes, in evaluation order.
    pub checks: Vec<CheckOutcome>,
}

impl VerificationReport {
    /// Returns `true` if every recorded check passed.
    ///
    /// Vacuously true for a task with empty acceptance criteria: zero
    /// clauses means zero entries, and all-of-the-empty-set holds.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Returns only the checks that failed.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<&CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }
}

/// Evaluates every present clause of `task.acceptance`.
///
/// A missing clause contributes nothing to the report; `performance_metric`
/// is a declared contract only and is not interpreted here.
#[must_use]
pub fn evaluate(ctx: &ServiceContext, task: &Task) -> VerificationReport {
    let mut checks = Vec::new();
    let acceptance = &task.acceptance;

    if let Some(paths) = &acceptance.file_exists {
        for path in paths {
            checks.push(check_file_exists(ctx, path));
        }
    }

    if let Some(patterns) = &acceptance.file_contains {
        for (path, pattern) in patterns {
            checks.push(check_file_contains(ctx, path, pattern));
        }
    }

    if let Some(commands) = &acceptance.command_succeeds {
        for command in commands {
            checks.push(check_command(ctx, command));
        }
    }

    if let Some(selector) = &acceptance.test_passes {
        checks.push(check_tests(ctx, selector));
    }

    VerificationReport { task_id: task.id.clone(), checks }
}

/// Verifies a task by id: evaluates its criteria and, on a full pass,
/// records a proof artifact under `<manifest_dir>/tasks/`.
///
/// An unknown task id yields a report with a single synthetic failed check
/// rather than an error.
///
/// # Errors
///
/// Returns [`ManifestoError::Io`] only if a fully-passing verification
/// cannot persist its proof.
pub fn verify_task(
    ctx: &ServiceContext,
    manifest_dir: &Path,
    tasks: &[Task],
    task_id: &str,
) -> Result<VerificationReport, ManifestoError> {
    let Some(task) = tasks.iter().find(|t| t.id == task_id) else {
        return Ok(VerificationReport {
            task_id: task_id.to_string(),
            checks: vec![CheckOutcome {
                name: "error".to_string(),
                passed: false,
                details: format!("Task {task_id} not found"),
            }],
        });
    };

    let report = evaluate(ctx, task);
    if report.passed() {
        proof::write_proof(ctx, &manifest_dir.join("tasks"), task, &report)?;
    }
    Ok(report)
}

fn check_file_exists(ctx: &ServiceContext, path: &str) -> CheckOutcome {
    let exists = ctx.fs.exists(Path::new(path));
    CheckOutcome {
        name: format!("file_{}", basename(path)),
        passed: exists,
        details: if exists { format!("Found: {path}") } else { format!("Missing: {path}") },
    }
}

fn check_file_contains(ctx: &ServiceContext, path: &str, pattern: &str) -> CheckOutcome {
    let name = format!("contains_{}", truncate(pattern, 20));
    if !ctx.fs.exists(Path::new(path)) {
        return CheckOutcome {
            name,
            passed: false,
            details: format!("File not found: {path}"),
        };
    }
    match ctx.fs.read_to_string(Path::new(path)) {
        Ok(content) => {
            let found = content.contains(pattern);
            CheckOutcome {
                name,
                passed: found,
                details: format!(
                    "Pattern {} in {path}",
                    if found { "found" } else { "not found" }
                ),
            }
        }
        Err(e) => CheckOutcome { name, passed: false, details: format!("Failed to read {path}: {e}") },
    }
}

fn check_command(ctx: &ServiceContext, command: &str) -> CheckOutcome {
    let name = format!("cmd_{}", command.split_whitespace().next().unwrap_or(""));
    match ctx.shell.run(command, COMMAND_TIMEOUT) {
        Ok(output) => {
            let passed = output.exit_code == 0;
            let stream = if passed { &output.stdout } else { &output.stderr };
            CheckOutcome {
                name,
                passed,
                details: truncate(stream, COMMAND_DETAIL_CHARS).trim().to_string(),
            }
        }
        // Spawn failures and timeouts are recorded, never propagated.
        Err(e) => CheckOutcome { name, passed: false, details: e.to_string() },
    }
}

fn check_tests(ctx: &ServiceContext, selector: &str) -> CheckOutcome {
    match ctx.tests.run_tests(selector) {
        Ok(outcome) => CheckOutcome {
            name: "tests".to_string(),
            passed: outcome.passed,
            details: truncate(&outcome.output, TEST_DETAIL_CHARS).to_string(),
        },
        Err(e) => CheckOutcome { name: "tests".to_string(), passed: false, details: e.to_string() },
    }
}

fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned())
}

/// Truncates on a character boundary.
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Formats a report as a human-readable PASS/FAIL listing.
#[must_use]
pub fn format_report(report: &VerificationReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Task: {}", report.task_id));
    lines.push(String::new());
    for check in &report.checks {
        let status = if check.passed { "PASS" } else { "FAIL" };
        lines.push(format!("  [{status}] {}: {}", check.name, check.details));
    }
    if report.checks.is_empty() {
        lines.push("  (no acceptance criteria; vacuously passed)".to_string());
    }
    lines.push(String::new());
    let overall = if report.passed() { "PASSED" } else { "FAILED" };
    lines.push(format!("Result: {overall}"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{context_with_fs, FailingTestRunner, MemFs, ScriptedShell, StaticTestRunner};

    fn task_with_acceptance(acceptance_yaml: &str) -> Task {
        let indented = acceptance_yaml
            .lines()
            .map(|l| format!("  {l}"))
            .collect::<Vec<_>>()
            .join("\n");
        serde_yaml::from_str(&format!(
            "
id: TASK-001
description: Test task
owner_role: DEV-AGENT
acceptance:
{indented}
"
        ))
        .unwrap()
    }

    #[test]
    fn empty_criteria_is_vacuously_passed() {
        let ctx = context_with_fs(MemFs::new());
        let task: Task = serde_yaml::from_str(
            "
id: TASK-001
description: Test task
owner_role: DEV-AGENT
",
        )
        .unwrap();

        let report = evaluate(&ctx, &task);

        assert!(report.passed());
        assert!(report.checks.is_empty());
    }

    #[test]
    fn file_exists_present_passes() {
        let fs = MemFs::new();
        fs.seed("README.md", "# Hello");
        let ctx = context_with_fs(fs);
        let task = task_with_acceptance("file_exists:\n  - README.md");

        let report = evaluate(&ctx, &task);

        assert!(report.passed());
        assert_eq!(report.checks[0].name, "file_README.md");
        assert_eq!(report.checks[0].details, "Found: README.md");
    }

    #[test]
    fn file_exists_absent_fails_with_missing_detail() {
        let ctx = context_with_fs(MemFs::new());
        let task = task_with_acceptance("file_exists:\n  - README.md");

        let report = evaluate(&ctx, &task);

        assert!(!report.passed());
        assert_eq!(report.checks[0].name, "file_README.md");
        assert_eq!(report.checks[0].details, "Missing: README.md");
    }

    #[test]
    fn file_contains_matches_substring() {
        let fs = MemFs::new();
        fs.seed("src/main.rs", "fn main() {}\n");
        let ctx = context_with_fs(fs);
        let task = task_with_acceptance("file_contains:\n  src/main.rs: \"fn main\"");

        let report = evaluate(&ctx, &task);

        assert!(report.passed());
        assert_eq!(report.checks[0].name, "contains_fn main");
    }

    #[test]
    fn file_contains_missing_file_fails_not_errors() {
        let ctx = context_with_fs(MemFs::new());
        let task = task_with_acceptance("file_contains:\n  missing.txt: needle");

        let report = evaluate(&ctx, &task);

        assert!(!report.passed());
        assert_eq!(report.checks[0].details, "File not found: missing.txt");
    }

    #[test]
    fn file_contains_absent_pattern_fails() {
        let fs = MemFs::new();
        fs.seed("notes.txt", "nothing to see");
        let ctx = context_with_fs(fs);
        let task = task_with_acceptance("file_contains:\n  notes.txt: needle");

        let report = evaluate(&ctx, &task);

        assert!(!report.passed());
        assert!(report.checks[0].details.contains("not found in notes.txt"));
    }

    #[test]
    fn long_pattern_key_is_truncated_to_twenty_chars() {
        let ctx = context_with_fs(MemFs::new());
        let task = task_with_acceptance(
            "file_contains:\n  f.txt: \"abcdefghijklmnopqrstuvwxyz\"",
        );

        let report = evaluate(&ctx, &task);

        assert_eq!(report.checks[0].name, "contains_abcdefghijklmnopqrst");
    }

    #[test]
    fn command_exit_zero_passes_with_stdout_detail() {
        let mut ctx = context_with_fs(MemFs::new());
        ctx.shell = Box::new(ScriptedShell::new().on("echo hi", 0, "hi\n", ""));
        let task = task_with_acceptance("command_succeeds:\n  - echo hi");

        let report = evaluate(&ctx, &task);

        assert!(report.passed());
        assert_eq!(report.checks[0].name, "cmd_echo");
        assert_eq!(report.checks[0].details, "hi");
    }

    #[test]
    fn command_nonzero_exit_fails_with_stderr_detail() {
        let mut ctx = context_with_fs(MemFs::new());
        ctx.shell = Box::new(ScriptedShell::new().on("make build", 2, "", "missing target\n"));
        let task = task_with_acceptance("command_succeeds:\n  - make build");

        let report = evaluate(&ctx, &task);

        assert!(!report.passed());
        assert_eq!(report.checks[0].name, "cmd_make");
        assert_eq!(report.checks[0].details, "missing target");
    }

    #[test]
    fn command_spawn_error_is_recorded_not_fatal() {
        let ctx = context_with_fs(MemFs::new());
        let task = task_with_acceptance(
            "command_succeeds:\n  - nonexistent-cmd\nfile_exists:\n  - also-missing.txt",
        );

        let report = evaluate(&ctx, &task);

        // Both checks recorded; the command error did not abort evaluation.
        assert_eq!(report.checks.len(), 2);
        assert!(!report.passed());
        assert!(report.checks[1].details.contains("command not found"));
    }

    #[test]
    fn command_detail_is_truncated_to_hundred_chars() {
        let long = "x".repeat(500);
        let mut ctx = context_with_fs(MemFs::new());
        ctx.shell = Box::new(ScriptedShell::new().on("spam", 0, &long, ""));
        let task = task_with_acceptance("command_succeeds:\n  - spam");

        let report = evaluate(&ctx, &task);

        assert_eq!(report.checks[0].details.len(), 100);
    }

    #[test]
    fn timed_out_command_is_recorded_as_failed() {
        use crate::adapters::live::LiveShellExecutor;
        // A real shell with a real timeout: evaluation must complete and
        // record the failure rather than hang. The live adapter enforces
        // COMMAND_TIMEOUT; here the scripted path is not enough, so run a
        // short sleep against a tiny timeout directly.
        let shell = LiveShellExecutor;
        let result = crate::ports::shell::ShellExecutor::run(
            &shell,
            "sleep 10",
            std::time::Duration::from_millis(50),
        );
        assert!(result.is_err());

        // And through the evaluator, a shell error surfaces as a failed check.
        let ctx = context_with_fs(MemFs::new());
        let task = task_with_acceptance("command_succeeds:\n  - sleep 10");
        let report = evaluate(&ctx, &task);
        assert!(!report.passed());
    }

    #[test]
    fn test_passes_delegates_to_runner_and_truncates() {
        let mut ctx = context_with_fs(MemFs::new());
        ctx.tests = Box::new(StaticTestRunner { passed: true, output: "y".repeat(999) });
        let task = task_with_acceptance("test_passes: SmokeTests");

        let report = evaluate(&ctx, &task);

        assert!(report.passed());
        assert_eq!(report.checks[0].name, "tests");
        assert_eq!(report.checks[0].details.len(), 200);
    }

    #[test]
    fn runner_error_is_recorded_as_failed_tests_check() {
        let mut ctx = context_with_fs(MemFs::new());
        ctx.tests = Box::new(FailingTestRunner);
        let task = task_with_acceptance("test_passes: SmokeTests");

        let report = evaluate(&ctx, &task);

        assert!(!report.passed());
        assert!(report.checks[0].details.contains("not available"));
    }

    #[test]
    fn performance_metric_contributes_no_checks() {
        let ctx = context_with_fs(MemFs::new());
        let task = task_with_acceptance("performance_metric:\n  load_time_ms: 2000");

        let report = evaluate(&ctx, &task);

        assert!(report.passed());
        assert!(report.checks.is_empty());
    }

    #[test]
    fn unknown_task_yields_synthetic_failed_check() {
        let ctx = context_with_fs(MemFs::new());

        let report =
            verify_task(&ctx, Path::new("/m"), &[], "TASK-404").unwrap();

        assert!(!report.passed());
        assert_eq!(report.checks.len(), 1);
        assert_eq!(report.checks[0].name, "error");
        assert_eq!(report.checks[0].details, "Task TASK-404 not found");
    }

    #[test]
    fn failing_verification_writes_no_proof() {
        let fs = MemFs::new();
        let ctx = context_with_fs(fs);
        let task = task_with_acceptance("file_exists:\n  - README.md");

        let report =
            verify_task(&ctx, Path::new("/m"), &[task], "TASK-001").unwrap();

        assert!(!report.passed());
        assert!(!ctx.fs.exists(Path::new("/m/tasks/TASK-001_proof.json")));
    }

    #[test]
    fn format_report_shows_overall_result() {
        let report = VerificationReport {
            task_id: "TASK-001".to_string(),
            checks: vec![
                CheckOutcome { name: "file_a".into(), passed: true, details: "Found: a".into() },
                CheckOutcome { name: "cmd_b".into(), passed: false, details: "boom".into() },
            ],
        };
        let text = format_report(&report);
        assert!(text.contains("[PASS] file_a"));
        assert!(text.contains("[FAIL] cmd_b"));
        assert!(text.contains("Result: FAILED"));
    }
}
