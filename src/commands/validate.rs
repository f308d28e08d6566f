//! `manifesto validate` command.

use std::path::Path;

use crate::commands::manifest_dir;
use crate::context::ServiceContext;
use crate::store::TaskStore;
use crate::validate;

/// Execute the `validate` command.
///
/// Loads the manifesto and its merged task set and applies the structural
/// and policy rules, reporting the first violation.
///
/// # Errors
///
/// Returns an error string on load failure or the first violated rule.
pub fn run(manifest: &Path) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = TaskStore::new(&ctx, &manifest_dir(manifest));

    let manifesto = store.load_manifesto().map_err(|e| e.to_string())?;
    let tasks = store.load_tasks().map_err(|e| e.to_string())?;
    validate::validate(&manifesto, &tasks).map_err(|e| e.to_string())?;

    println!("Manifesto OK ({} task(s))", tasks.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifesto(dir: &Path, tasks_yaml: &str) -> std::path::PathBuf {
        let path = dir.join("manifesto.yaml");
        std::fs::write(
            &path,
            format!(
                "
prd_id: PRD-2025-TEST
title: Test Project
status: Draft
owner: Owner
tech_stack: [python]
metrics:
  north_star: metric
  guardrails: []
tasks:
{tasks_yaml}
"
            ),
        )
        .unwrap();
        path
    }

    #[test]
    fn valid_manifesto_passes() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifesto(
            dir.path(),
            "  - id: TASK-001\n    description: Small task\n    owner_role: DEV-AGENT",
        );
        assert!(run(&manifest).is_ok());
    }

    #[test]
    fn policy_violation_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = write_manifesto(
            dir.path(),
            "  - id: TASK-001\n    description: one two three four five six seven eight nine ten eleven twelve thirteen\n    owner_role: DEV-AGENT",
        );
        let err = run(&manifest).unwrap_err();
        assert!(err.contains("13 words"));
    }
}
