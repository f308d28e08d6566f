//! Task store: loads the task set for a project.
//!
//! Tasks live in one of two places under the manifest directory:
//!
//! ```text
//! docs/_MANIFESTO/
//!   ├── manifesto.yaml      (embedded `tasks` list, legacy mode)
//!   └── tasks/
//!       └── TASK-###.yaml   (one task per file, takes precedence)
//! ```
//!
//! All I/O goes through the `FileSystem` port so the store works against
//! in-memory fakes in tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::context::ServiceContext;
use crate::error::ManifestoError;
use crate::manifest::{Manifesto, Task};

/// Filename of the manifesto document inside the manifest directory.
pub const MANIFESTO_FILE: &str = "manifesto.yaml";

/// Loads tasks and the manifesto for one manifest directory.
pub struct TaskStore<'a> {
    ctx: &'a ServiceContext,
    manifest_dir: PathBuf,
}

impl<'a> TaskStore<'a> {
    /// Creates a store rooted at the given manifest directory.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, manifest_dir: &Path) -> Self {
        Self { ctx, manifest_dir: manifest_dir.to_path_buf() }
    }

    /// Loads the manifesto document.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestoError::Missing`] if the file does not exist and
    /// [`ManifestoError::Parse`] if it is malformed; unlike per-task files,
    /// a broken manifesto is always fatal.
    pub fn load_manifesto(&self) -> Result<Manifesto, ManifestoError> {
        let path = self.manifest_dir.join(MANIFESTO_FILE);
        if !self.ctx.fs.exists(&path) {
            return Err(ManifestoError::Missing(path.display().to_string()));
        }
        let contents = self
            .ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| ManifestoError::Io(format!("failed to read {}: {e}", path.display())))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| ManifestoError::Parse { path, message: e.to_string() })
    }

    /// Loads all tasks, preferring per-task files over the embedded list.
    ///
    /// Per-task files matching `TASK-*.yaml` are loaded in sorted filename
    /// order; a file that fails to parse (including one missing its `id`)
    /// is skipped with a warning rather than aborting the load. If the
    /// directory yields zero usable tasks (absent or merely empty), the
    /// manifesto's embedded `tasks` list is used instead.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestoError::DuplicateTaskId`] on the first duplicated
    /// ID, naming both source locations, and [`ManifestoError::Parse`] if
    /// the fallback manifesto itself is malformed.
    pub fn load_tasks(&self) -> Result<Vec<Task>, ManifestoError> {
        let tasks_dir = self.manifest_dir.join("tasks");
        let mut tasks: Vec<Task> = Vec::new();

        if self.ctx.fs.exists(&tasks_dir) {
            info!(dir = %tasks_dir.display(), "loading tasks from directory");
            let entries = self.ctx.fs.list_dir(&tasks_dir).map_err(|e| {
                ManifestoError::Io(format!("failed to list {}: {e}", tasks_dir.display()))
            })?;
            for name in entries {
                if !is_task_file(&name) {
                    continue;
                }
                if let Some(task) = self.load_task_file(&tasks_dir.join(&name)) {
                    tasks.push(task);
                }
            }
        }

        // Zero usable directory tasks falls back to the embedded list. This
        // covers a present-but-empty directory, which supports partial
        // migrations from the legacy embedded mode.
        if tasks.is_empty() {
            let manifesto_path = self.manifest_dir.join(MANIFESTO_FILE);
            if self.ctx.fs.exists(&manifesto_path) {
                info!(path = %manifesto_path.display(), "loading tasks from manifesto");
                tasks = self.load_manifesto()?.tasks;
            }
        }

        check_duplicate_ids(&tasks)?;
        Ok(tasks)
    }

    /// Loads one per-task file, returning `None` (with a warning) on any
    /// parse failure.
    fn load_task_file(&self, path: &Path) -> Option<Task> {
        let contents = match self.ctx.fs.read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(path = %path.display(), "failed to read task file: {e}");
                return None;
            }
        };
        match serde_yaml::from_str::<Task>(&contents) {
            Ok(mut task) => {
                task.source_file = Some(path.to_path_buf());
                Some(task)
            }
            Err(e) => {
                warn!(path = %path.display(), "skipping unparseable task file: {e}");
                None
            }
        }
    }
}

/// Per-task files follow the `TASK-*.yaml` convention; proof artifacts and
/// strays are ignored.
fn is_task_file(name: &str) -> bool {
    name.starts_with("TASK-") && name.ends_with(".yaml")
}

/// Enforces global uniqueness of task IDs across both storage locations.
///
/// # Errors
///
/// Returns [`ManifestoError::DuplicateTaskId`] for the first duplicate
/// found, naming both source locations.
pub fn check_duplicate_ids(tasks: &[Task]) -> Result<(), ManifestoError> {
    let mut seen: HashMap<&str, String> = HashMap::new();
    for task in tasks {
        if let Some(first) = seen.get(task.id.as_str()) {
            return Err(ManifestoError::DuplicateTaskId {
                id: task.id.clone(),
                first: first.clone(),
                second: task.source_label(),
            });
        }
        seen.insert(&task.id, task.source_label());
    }
    Ok(())
}
