//! Manifesto and task validation.
//!
//! Two layers, both fail-fast on the first violation:
//!
//! 1. Structural: field shapes the serde decode cannot express, the
//!    `TASK-\d{3}` id pattern and the description character cap.
//! 2. Policy: the "radical clarity" rules, at most [`MAX_TASKS`] tasks and
//!    at most [`MAX_DESC_WORDS`] words per description. Hard rejections, not
//!    warnings; the intent is to force small, unambiguous decomposition.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ManifestoError;
use crate::manifest::{Manifesto, Task};

/// Hard cap on the number of tasks in a plan or manifesto.
pub const MAX_TASKS: usize = 8;

/// Hard cap on whitespace-delimited words per task description.
pub const MAX_DESC_WORDS: usize = 12;

/// Structural cap on description length in characters.
pub const MAX_DESC_CHARS: usize = 120;

fn task_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^TASK-\d{3}$").expect("static pattern"))
}

/// Validates a manifesto document and its (merged) task set.
///
/// The manifesto's own required fields and the `status` enum are enforced
/// by typed decoding before this runs; this applies the remaining
/// structural rules and then the policy rules.
///
/// # Errors
///
/// Returns [`ManifestoError::Schema`] describing the first violated rule.
pub fn validate(_manifesto: &Manifesto, tasks: &[Task]) -> Result<(), ManifestoError> {
    for (index, task) in tasks.iter().enumerate() {
        check_task_structure(index, task)?;
    }
    check_task_count(tasks.len())?;
    for task in tasks {
        check_description_words(&task.id, &task.description)?;
    }
    Ok(())
}

fn check_task_structure(index: usize, task: &Task) -> Result<(), ManifestoError> {
    if !task_id_pattern().is_match(&task.id) {
        return Err(ManifestoError::Schema {
            field: format!("tasks[{index}].id"),
            message: format!("'{}' does not match TASK-\\d{{3}}", task.id),
        });
    }
    let chars = task.description.chars().count();
    if chars > MAX_DESC_CHARS {
        return Err(ManifestoError::Schema {
            field: format!("tasks[{index}].description"),
            message: format!("{chars} characters (max {MAX_DESC_CHARS})"),
        });
    }
    Ok(())
}

/// Policy rule: at most [`MAX_TASKS`] tasks.
///
/// Shared with plan validation, which re-applies it against the frozen plan.
///
/// # Errors
///
/// Returns [`ManifestoError::Schema`] if the count exceeds the cap.
pub fn check_task_count(count: usize) -> Result<(), ManifestoError> {
    if count > MAX_TASKS {
        return Err(ManifestoError::Schema {
            field: "tasks".to_string(),
            message: format!("{count} tasks (max {MAX_TASKS})"),
        });
    }
    Ok(())
}

/// Policy rule: at most [`MAX_DESC_WORDS`] whitespace-delimited words.
///
/// # Errors
///
/// Returns [`ManifestoError::Schema`] if the description is too long.
pub fn check_description_words(task_id: &str, description: &str) -> Result<(), ManifestoError> {
    let words = description.split_whitespace().count();
    if words > MAX_DESC_WORDS {
        return Err(ManifestoError::Schema {
            field: format!("task {task_id}.description"),
            message: format!("{words} words (max {MAX_DESC_WORDS})"),
        });
    }
    Ok(())
}
