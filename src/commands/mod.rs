//! Command dispatch and handlers.

pub mod init;
pub mod plan;
pub mod status;
pub mod validate;
pub mod verify;

use std::path::{Path, PathBuf};

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Init { name, path, project_type } => init::run(name, path, project_type),
        Command::Status { manifest } => status::run(manifest),
        Command::Validate { manifest } => validate::run(manifest),
        Command::Verify { task_id, manifest } => verify::run(task_id, manifest),
        Command::Plan { action } => plan::run(action),
    }
}

/// The directory holding a manifesto file.
pub(crate) fn manifest_dir(manifest: &Path) -> PathBuf {
    manifest.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_dir_strips_filename() {
        assert_eq!(
            manifest_dir(Path::new("docs/_MANIFESTO/manifesto.yaml")),
            PathBuf::from("docs/_MANIFESTO")
        );
    }
}
