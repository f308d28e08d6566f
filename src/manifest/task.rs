//! Core task type.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::acceptance::AcceptanceCriteria;

/// One atomic unit of work with a unique id and declarative acceptance
/// criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Unique task identifier matching `TASK-\d{3}`.
    pub id: String,
    /// Optional short label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// What the task is, policy-limited in length.
    pub description: String,
    /// Role responsible for the task (e.g. "DEV-AGENT").
    pub owner_role: String,
    /// Task IDs this task depends on. Advisory only; never cycle-checked.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// How the task aligns with the project vision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_link: Option<String>,
    /// Conditions that define "done" for this task.
    #[serde(default)]
    pub acceptance: AcceptanceCriteria,
    /// Which file or container the task came from. Provenance only, used in
    /// duplicate-ID diagnostics; never serialized.
    #[serde(skip)]
    pub source_file: Option<PathBuf>,
}

impl Task {
    /// Names the location this task was loaded from, for diagnostics.
    #[must_use]
    pub fn source_label(&self) -> String {
        self.source_file
            .as_ref()
            .map_or_else(|| "manifesto.yaml".to_string(), |p| p.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_task() {
        let yaml = "
id: TASK-001
description: Create project structure
owner_role: DEV-AGENT
";
        let task: Task = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.id, "TASK-001");
        assert!(task.depends_on.is_empty());
        assert!(task.acceptance.is_empty());
        assert!(task.source_file.is_none());
    }

    #[test]
    fn rejects_unknown_field() {
        let yaml = "
id: TASK-001
description: Create project structure
owner_role: DEV-AGENT
priority: high
";
        assert!(serde_yaml::from_str::<Task>(yaml).is_err());
    }

    #[test]
    fn source_label_defaults_to_manifesto() {
        let yaml = "
id: TASK-001
description: Create project structure
owner_role: DEV-AGENT
";
        let mut task: Task = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(task.source_label(), "manifesto.yaml");

        task.source_file = Some(PathBuf::from("tasks/TASK-001.yaml"));
        assert_eq!(task.source_label(), "tasks/TASK-001.yaml");
    }

    #[test]
    fn source_file_is_not_serialized() {
        let task = Task {
            id: "TASK-001".to_string(),
            title: None,
            description: "Create project structure".to_string(),
            owner_role: "DEV-AGENT".to_string(),
            depends_on: Vec::new(),
            vision_link: None,
            acceptance: AcceptanceCriteria::default(),
            source_file: Some(PathBuf::from("tasks/TASK-001.yaml")),
        };
        let yaml = serde_yaml::to_string(&task).unwrap();
        assert!(!yaml.contains("source_file"));
    }
}
