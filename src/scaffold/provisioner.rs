use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::debug;

use super::{Result, ScaffoldError};

/// Creates day projects and wires their dependencies.
pub trait Provisioner {
    /// Creates project `name` inside `root`.
    fn create_project(&self, root: &Path, name: &str) -> Result<()>;

    /// Adds `dep_name` as a path dependency (relative to `project_dir`).
    fn add_path_dependency(&self, project_dir: &Path, dep_name: &str, dep_path: &Path)
        -> Result<()>;
}

/// Provisions through `cargo init` and `cargo add`.
#[derive(Clone, Debug)]
pub struct Cargo {
    program: PathBuf,
}

impl Cargo {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, dir: &Path, args: &[OsString]) -> Result<()> {
        let command = std::iter::once(self.program.as_os_str())
            .chain(args.iter().map(|a| a.as_os_str()))
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        debug!(dir = %dir.display(), %command, "running");
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|source| ScaffoldError::Spawn {
                command: command.clone(),
                source,
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::CommandFailed {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Provisioner for Cargo {
    fn create_project(&self, root: &Path, name: &str) -> Result<()> {
        self.run(root, &["init".into(), name.into()])
    }

    fn add_path_dependency(
        &self,
        project_dir: &Path,
        dep_name: &str,
        dep_path: &Path,
    ) -> Result<()> {
        self.run(
            project_dir,
            &[
                "add".into(),
                "--path".into(),
                dep_path.into(),
                dep_name.into(),
            ],
        )
    }
}
