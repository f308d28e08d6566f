//! `manifesto status` command.

use std::path::Path;

use crate::commands::manifest_dir;
use crate::context::ServiceContext;
use crate::manifest::Status;
use crate::store::TaskStore;

/// Execute the `status` command.
///
/// Prints the project title, lifecycle status, and loaded task count.
///
/// # Errors
///
/// Returns an error string if the manifesto or tasks cannot be loaded.
pub fn run(manifest: &Path) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let store = TaskStore::new(&ctx, &manifest_dir(manifest));

    let manifesto = store.load_manifesto().map_err(|e| e.to_string())?;
    let tasks = store.load_tasks().map_err(|e| e.to_string())?;

    println!("Project: {}", manifesto.title);
    println!("Status:  {}", format_status(manifesto.status));
    println!("Tasks:   {}", tasks.len());
    Ok(())
}

fn format_status(status: Status) -> &'static str {
    match status {
        Status::Draft => "Draft",
        Status::Approved => "Approved",
        Status::InDev => "In-dev",
        Status::Frozen => "Frozen",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_fails_without_manifesto() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&dir.path().join("manifesto.yaml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }

    #[test]
    fn status_reports_loaded_tasks() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("manifesto.yaml"),
            "
prd_id: PRD-2025-TEST
title: Test Project
status: In-dev
owner: Owner
tech_stack: [python]
metrics:
  north_star: metric
  guardrails: []
tasks:
  - id: TASK-001
    description: Only task
    owner_role: DEV-AGENT
",
        )
        .unwrap();

        assert!(run(&dir.path().join("manifesto.yaml")).is_ok());
    }

    #[test]
    fn format_status_uses_document_spelling() {
        assert_eq!(format_status(Status::InDev), "In-dev");
        assert_eq!(format_status(Status::Draft), "Draft");
    }
}
