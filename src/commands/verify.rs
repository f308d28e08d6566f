//! `manifesto verify` command.

use std::path::Path;

use crate::commands::manifest_dir;
use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::verify;

/// Execute the `verify` command.
///
/// Evaluates one task's acceptance criteria, prints the per-check report,
/// and records a proof artifact when everything passes.
///
/// # Errors
///
/// Returns an error string if loading fails or the task did not verify, so
/// the CLI exits non-zero on a failed verification.
pub fn run(task_id: &str, manifest: &Path) -> Result<(), String> {
    let dir = manifest_dir(manifest);
    let bootstrap = ServiceContext::live();
    let store = TaskStore::new(&bootstrap, &dir);

    let manifesto = store.load_manifesto().map_err(|e| e.to_string())?;
    let tasks = store.load_tasks().map_err(|e| e.to_string())?;

    // Re-bundle with the test runner matching the project's stack.
    let ctx = ServiceContext::live_for(&manifesto);
    let report = verify::verify_task(&ctx, &dir, &tasks, task_id).map_err(|e| e.to_string())?;

    println!("{}", verify::format_report(&report));

    if report.passed() {
        println!(
            "\nProof written to {}",
            verify::proof::proof_path(&dir.join("tasks"), task_id).display()
        );
        Ok(())
    } else {
        Err(format!("verification failed for {task_id}"))
    }
}
