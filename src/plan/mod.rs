//! Plan generation, validation, and gated execution.
//!
//! A plan is an immutable snapshot of the task set, persisted as
//! `plan.json` next to the manifesto. Generation is pure and re-runnable;
//! execution only ever consumes the persisted artifact, which puts a human
//! review step between the two. Because a plan may be hand-edited between
//! generation and execution, validation re-applies the policy limits
//! directly against the plan even when the manifesto was already validated.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::error::ManifestoError;
use crate::manifest::AcceptanceCriteria;
use crate::store::TaskStore;
use crate::validate::{check_description_words, check_task_count};

/// Filename of the frozen plan inside the manifest directory.
pub const PLAN_FILE: &str = "plan.json";

/// One task as projected into a plan.
///
/// Authoring-time fields (`vision_link`, provenance) are dropped; only what
/// execution needs survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTask {
    /// Task identifier.
    pub id: String,
    /// What the task is.
    pub description: String,
    /// Task IDs this task depends on. Advisory; execution runs in plan order.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Role responsible for the task.
    pub owner_role: String,
    /// Conditions that define "done".
    #[serde(default)]
    pub acceptance: AcceptanceCriteria,
}

/// An immutable snapshot of the task set, gating execution behind review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Project requirement document identifier.
    pub prd_id: String,
    /// Project title.
    pub title: String,
    /// Tasks in execution order.
    pub tasks: Vec<PlanTask>,
}

/// Reads the manifesto and task set and projects them into a plan.
///
/// Pure with respect to the plan artifact: nothing is persisted here.
///
/// # Errors
///
/// Propagates manifesto/task loading errors ([`ManifestoError::Missing`],
/// [`ManifestoError::Parse`], [`ManifestoError::DuplicateTaskId`]).
pub fn generate_plan(ctx: &ServiceContext, manifest_dir: &Path) -> Result<Plan, ManifestoError> {
    let store = TaskStore::new(ctx, manifest_dir);
    let manifesto = store.load_manifesto()?;
    let tasks = store.load_tasks()?;

    Ok(Plan {
        prd_id: manifesto.prd_id,
        title: manifesto.title,
        tasks: tasks
            .into_iter()
            .map(|t| PlanTask {
                id: t.id,
                description: t.description,
                depends_on: t.depends_on,
                owner_role: t.owner_role,
                acceptance: t.acceptance,
            })
            .collect(),
    })
}

/// Returns the plan artifact path for a manifest directory.
#[must_use]
pub fn plan_path(manifest_dir: &Path) -> PathBuf {
    manifest_dir.join(PLAN_FILE)
}

/// Persists a plan as `plan.json`, overwriting any previous plan.
///
/// # Errors
///
/// Returns [`ManifestoError::Io`] if serialization or the write fails.
pub fn save_plan(
    ctx: &ServiceContext,
    manifest_dir: &Path,
    plan: &Plan,
) -> Result<(), ManifestoError> {
    let json = serde_json::to_string_pretty(plan)
        .map_err(|e| ManifestoError::Io(format!("failed to serialize plan: {e}")))?;
    let path = plan_path(manifest_dir);
    ctx.fs
        .write(&path, &json)
        .map_err(|e| ManifestoError::Io(format!("failed to write plan {}: {e}", path.display())))
}

/// Loads the persisted plan.
///
/// # Errors
///
/// Returns [`ManifestoError::Missing`] if no plan has been generated and
/// [`ManifestoError::Parse`] if the artifact is malformed.
pub fn load_plan(ctx: &ServiceContext, manifest_dir: &Path) -> Result<Plan, ManifestoError> {
    let path = plan_path(manifest_dir);
    if !ctx.fs.exists(&path) {
        return Err(ManifestoError::Missing(format!(
            "{} (run `manifesto plan generate` first)",
            path.display()
        )));
    }
    let contents = ctx
        .fs
        .read_to_string(&path)
        .map_err(|e| ManifestoError::Io(format!("failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&contents)
        .map_err(|e| ManifestoError::Parse { path, message: e.to_string() })
}

/// Re-applies the policy limits directly against a plan.
///
/// Deliberately independent of manifesto validation: a hand-edited plan
/// gets the same task-count and description-length checks before anything
/// executes.
///
/// # Errors
///
/// Returns [`ManifestoError::Schema`] describing the first violated rule.
pub fn validate_plan(plan: &Plan) -> Result<(), ManifestoError> {
    check_task_count(plan.tasks.len())?;
    for task in &plan.tasks {
        check_description_words(&task.id, &task.description)?;
    }
    Ok(())
}

/// Runs `executor` over the plan's tasks in order, stopping on the first
/// failure.
///
/// Returns `true` only if every task reported success. The executor the
/// CLI wires in is a stub that reports success for every task; the
/// fail-stop iteration contract is what this function owns.
pub fn execute_plan<F>(plan: &Plan, mut executor: F) -> bool
where
    F: FnMut(&PlanTask) -> bool,
{
    for task in &plan.tasks {
        if !executor(task) {
            return false;
        }
    }
    true
}
