//! Proof artifacts: tamper-evident records of a passing verification.
//!
//! A proof captures what passed, when, and the SHA-256 digest of every file
//! the task's `file_exists` clause references. It is best-effort evidence,
//! not a commitment scheme: no signing, no chaining between proofs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::context::ServiceContext;
use crate::error::ManifestoError;
use crate::manifest::Task;
use crate::verify::VerificationReport;

/// Digest recorded for a referenced file that is missing or unreadable.
const ERROR_DIGEST: &str = "error";

/// One check's outcome as persisted in a proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofCheck {
    /// Whether the check passed.
    pub passed: bool,
    /// Detail text at verification time.
    pub details: String,
}

/// A persisted record of a fully-passing verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proof {
    /// The verified task.
    pub task_id: String,
    /// When the verification completed (UTC, ISO-8601).
    pub timestamp: DateTime<Utc>,
    /// Per-check outcomes at verification time.
    pub results: BTreeMap<String, ProofCheck>,
    /// SHA-256 hex digest per referenced file.
    pub file_hashes: BTreeMap<String, String>,
}

/// Returns the proof artifact path for a task id.
#[must_use]
pub fn proof_path(tasks_dir: &Path, task_id: &str) -> PathBuf {
    tasks_dir.join(format!("{task_id}_proof.json"))
}

/// Writes the proof artifact for `task`, overwriting any previous proof.
///
/// Hashes every path in the task's `file_exists` clause; a file that has
/// gone missing or cannot be read degrades to the sentinel digest rather
/// than failing the write.
///
/// # Errors
///
/// Returns [`ManifestoError::Io`] if serialization or the write itself
/// fails.
pub fn write_proof(
    ctx: &ServiceContext,
    tasks_dir: &Path,
    task: &Task,
    report: &VerificationReport,
) -> Result<(), ManifestoError> {
    let mut file_hashes = BTreeMap::new();
    if let Some(paths) = &task.acceptance.file_exists {
        for path in paths {
            file_hashes.insert(path.clone(), hash_file(ctx, path));
        }
    }

    let proof = Proof {
        task_id: task.id.clone(),
        timestamp: ctx.clock.now(),
        results: report
            .checks
            .iter()
            .map(|c| (c.name.clone(), ProofCheck { passed: c.passed, details: c.details.clone() }))
            .collect(),
        file_hashes,
    };

    let json = serde_json::to_string_pretty(&proof)
        .map_err(|e| ManifestoError::Io(format!("failed to serialize proof: {e}")))?;
    let path = proof_path(tasks_dir, &task.id);
    ctx.fs
        .write(&path, &json)
        .map_err(|e| ManifestoError::Io(format!("failed to write proof {}: {e}", path.display())))
}

fn hash_file(ctx: &ServiceContext, path: &str) -> String {
    match ctx.fs.read(Path::new(path)) {
        Ok(bytes) => hex::encode(Sha256::digest(&bytes)),
        Err(_) => ERROR_DIGEST.to_string(),
    }
}
