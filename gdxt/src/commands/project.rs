//! Project command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use gdx_lsp::ProjectFile;

use crate::error::Result;

/// File name of a Godot project descriptor.
pub const PROJECT_FILE_NAME: &str = "project.godot";

/// Arguments for the project command.
#[derive(Debug, Clone)]
pub struct ProjectArgs {
    /// Descriptor file, or the directory holding `project.godot`.
    pub path: PathBuf,
}

/// Resolves a directory argument to the descriptor inside it.
pub fn descriptor_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(PROJECT_FILE_NAME)
    } else {
        path.to_path_buf()
    }
}

/// Reads the descriptor and prints its name and input actions.
pub fn run_project(args: ProjectArgs) -> Result<()> {
    let project = ProjectFile::load(descriptor_path(&args.path))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_summary(&mut out, &project)?;
    Ok(())
}

/// Writes `name: <name>` followed by one `input: <action>` line per action.
pub fn write_summary<W: Write>(out: &mut W, project: &ProjectFile) -> Result<()> {
    writeln!(out, "name: {}", project.application_name)?;
    for input in &project.input_configs {
        writeln!(out, "input: {}", input.name)?;
    }
    Ok(())
}
