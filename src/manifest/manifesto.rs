//! Top-level manifesto document type.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Lifecycle status of a manifesto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Being drafted; nothing is binding yet.
    Draft,
    /// Signed off by the owner.
    Approved,
    /// Under active development.
    #[serde(rename = "In-dev")]
    InDev,
    /// No further changes accepted.
    Frozen,
}

/// A single guardrail metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Guardrail {
    /// Metric name.
    pub name: String,
    /// Target expression (e.g. "< 2s").
    pub target: String,
    /// How the metric is measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<String>,
}

/// Success metrics for the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metrics {
    /// The single metric the project optimizes for.
    pub north_star: String,
    /// Limits that must not regress while chasing the north star.
    #[serde(default)]
    pub guardrails: Vec<Guardrail>,
}

/// The project-level contract document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifesto {
    /// Project requirement document identifier.
    pub prd_id: String,
    /// Project title.
    pub title: String,
    /// Lifecycle status.
    pub status: Status,
    /// Accountable owner.
    pub owner: String,
    /// Interested parties. Emitted by the scaffolder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stakeholders: Vec<String>,
    /// Target release label. Emitted by the scaffolder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_release: Option<String>,
    /// Technologies the project is built on.
    pub tech_stack: Vec<String>,
    /// Success metrics.
    pub metrics: Metrics,
    /// External dependencies. Emitted by the scaffolder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// Embedded task list (legacy storage mode; per-task files take
    /// precedence when present).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}

impl Manifesto {
    /// Returns `true` if the declared tech stack contains `name`
    /// (case-insensitive).
    #[must_use]
    pub fn uses_tech(&self, name: &str) -> bool {
        self.tech_stack.iter().any(|t| t.eq_ignore_ascii_case(name))
    }
}
