//! Declarative acceptance criteria for a task.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A multi-clause success condition. All present clauses are AND-ed; a task
/// with no clauses at all is vacuously passed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcceptanceCriteria {
    /// Paths that must exist on the filesystem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_exists: Option<Vec<String>>,
    /// Path to required-substring mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_contains: Option<BTreeMap<String, String>>,
    /// Shell commands that must exit 0 within the command timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_succeeds: Option<Vec<String>>,
    /// Metric name to numeric target. A declared contract only; the
    /// evaluator checks presence, not values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_metric: Option<BTreeMap<String, f64>>,
    /// Selector handed to the configured test runner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_passes: Option<String>,
}

impl AcceptanceCriteria {
    /// Returns `true` if no clause is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.file_exists.is_none()
            && self.file_contains.is_none()
            && self.command_succeeds.is_none()
            && self.performance_metric.is_none()
            && self.test_passes.is_none()
    }
}
