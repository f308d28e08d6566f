//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default location of the manifesto document.
pub const DEFAULT_MANIFEST: &str = "docs/_MANIFESTO/manifesto.yaml";

/// Top-level CLI parser for `manifesto`.
#[derive(Debug, Parser)]
#[command(name = "manifesto", version, about = "Zero-ambiguity project orchestration")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new project with a manifesto.
    Init {
        /// Project name.
        #[arg(long)]
        name: String,
        /// Project path.
        #[arg(long, default_value = ".")]
        path: PathBuf,
        /// Project type (seeds the tech stack).
        #[arg(long = "type", default_value = "visionos")]
        project_type: String,
    },
    /// Show manifesto status.
    Status {
        /// Manifesto file.
        #[arg(long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
    /// Validate the manifesto and its tasks against the schema and policy.
    Validate {
        /// Manifesto file.
        #[arg(long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
    /// Verify a task's acceptance criteria.
    Verify {
        /// Task to verify (e.g. TASK-001).
        task_id: String,
        /// Manifesto file.
        #[arg(long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
    /// Generate, validate, or execute the frozen plan.
    Plan {
        /// The plan stage to run.
        #[command(subcommand)]
        action: PlanAction,
    },
}

/// Stages of the plan lifecycle.
#[derive(Debug, Subcommand)]
pub enum PlanAction {
    /// Snapshot the task set into plan.json.
    Generate {
        /// Manifesto file.
        #[arg(long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
    /// Re-check the persisted plan against the policy limits.
    Validate {
        /// Manifesto file.
        #[arg(long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
    /// Run the persisted plan, stopping on the first failure.
    Execute {
        /// Manifesto file.
        #[arg(long, default_value = DEFAULT_MANIFEST)]
        manifest: PathBuf,
    },
}
