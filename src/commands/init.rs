//! `manifesto init` command.
//!
//! Scaffolds `docs/_MANIFESTO/` in a project: a rendered manifesto, a short
//! README, and an empty `tasks/` directory ready for per-task files.

use std::path::Path;

use crate::context::ServiceContext;
use crate::manifest::Manifesto;

/// Execute the `init` command.
///
/// # Errors
///
/// Returns an error string if any scaffold file cannot be written.
pub fn run(name: &str, path: &Path, project_type: &str) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let manifesto_dir = path.join("docs").join("_MANIFESTO");

    let content = render_manifesto(&ctx, name, project_type);
    // The template must stay in sync with the schema; decode what we are
    // about to write.
    serde_yaml::from_str::<Manifesto>(&content)
        .map_err(|e| format!("internal error: generated manifesto is invalid: {e}"))?;

    let manifesto_path = manifesto_dir.join("manifesto.yaml");
    ctx.fs
        .write(&manifesto_path, &content)
        .map_err(|e| format!("failed to write {}: {e}", manifesto_path.display()))?;
    ctx.fs
        .write(&manifesto_dir.join("README.md"), &render_readme(name))
        .map_err(|e| format!("failed to write README: {e}"))?;
    ctx.fs
        .write(&manifesto_dir.join("tasks").join(".gitkeep"), "")
        .map_err(|e| format!("failed to create tasks directory: {e}"))?;

    println!("Initialized {project_type} project: {name}");
    println!("Created at: {}", manifesto_dir.display());
    Ok(())
}

fn render_manifesto(ctx: &ServiceContext, name: &str, project_type: &str) -> String {
    let now = ctx.clock.now();
    let prefix: String =
        name.to_uppercase().chars().filter(char::is_ascii_alphanumeric).take(3).collect();
    let prd_id = format!("PRD-{}-{prefix}", now.format("%Y"));
    let date = now.format("%Y-%m-%d");

    let is_visionos = project_type == "visionos";
    let tech_stack = if is_visionos {
        "  - swift\n  - visionos\n  - realitykit".to_string()
    } else {
        format!("  - {project_type}")
    };
    let extra_guardrails = if is_visionos {
        "    - name: Frame rate\n      target: \">= 90 fps\"\n      measurement: RealityKit performance profiler\n"
    } else {
        ""
    };
    let first_files = if is_visionos {
        format!("        - Package.swift\n        - Sources/{name}/App.swift")
    } else {
        "        - src/main.py".to_string()
    };

    format!(
        r#"# AUTO-GENERATED MANIFESTO
# Generated: {date}

prd_id: "{prd_id}"
title: "{name}"
status: "Draft"
owner: "AI Orchestrator"
stakeholders: ["Product", "Engineering", "Design"]
target_release: "TBD"

tech_stack:
{tech_stack}

metrics:
  north_star: "User engagement rate"
  guardrails:
    - name: Load time
      target: "< 2s"
      measurement: Time to first interactive frame
    - name: Crash-free sessions
      target: "> 99.8%"
      measurement: Sessions without fatal errors
{extra_guardrails}
dependencies:
  - "Git"

# TASKS - maximum 8, each with a checkable acceptance criterion
tasks:
  - id: "TASK-001"
    description: "Initialize {project_type} project structure"
    owner_role: "DEV-AGENT"
    depends_on: []
    acceptance:
      file_exists:
{first_files}
"#
    )
}

fn render_readme(name: &str) -> String {
    format!(
        r"# {name} Manifesto

Project orchestration documents.

## Structure
- `manifesto.yaml` - main project contract
- `tasks/` - per-task files and completion proofs
- `plan.json` - frozen execution plan

## Usage
```bash
manifesto verify TASK-001
manifesto status
```
"
    )
}
