use crate::error::{Result, StoreError};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// VersionControlAgent runs the store's git publishing sequence.
///
/// Every invocation is direct argv execution, never a shell, so
/// user-supplied text (commit messages embed the app name) cannot inject
/// commands.
pub struct VersionControlAgent {
    repo_path: PathBuf,
    git_program: PathBuf,
}

impl VersionControlAgent {
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Result<Self> {
        let repo_path = Self::validate_repo_path(repo_path.as_ref())?;
        Ok(Self {
            repo_path,
            git_program: PathBuf::from("git"),
        })
    }

    #[cfg(test)]
    fn with_git_program<P: Into<PathBuf>>(mut self, program: P) -> Self {
        self.git_program = program.into();
        self
    }

    /// Stage every change in the store checkout.
    pub fn stage_all(&self) -> Result<()> {
        let output = self.run_git(&["add", "."])?;
        Self::ensure_success(&output, "git add")
    }

    /// Commit with the given message, passed as a single argument.
    pub fn commit(&self, message: &str) -> Result<()> {
        let output = self.run_git(&["commit", "-m", message])?;
        Self::ensure_success(&output, "git commit")
    }

    /// Push to the configured remote. Authentication and remote setup are
    /// the checkout's own business.
    pub fn push(&self) -> Result<()> {
        let output = self.run_git(&["push"])?;
        Self::ensure_success(&output, "git push")
    }

    /// Run stage, commit, push in order. A failed step is reported and the
    /// sequence continues to the next step; no retry, no rollback. Returns
    /// the number of steps that succeeded.
    pub fn sync(&self, message: &str) -> usize {
        let steps = [
            ("git add", self.stage_all()),
            ("git commit", self.commit(message)),
            ("git push", self.push()),
        ];

        let mut succeeded = 0;
        for (step, result) in steps {
            match result {
                Ok(()) => succeeded += 1,
                Err(e) => println!("{}", format!("Warning: {step} failed: {e}").yellow()),
            }
        }
        succeeded
    }

    fn run_git(&self, args: &[&str]) -> Result<Output> {
        if std::env::var("STOREMAN_VERBOSE").is_ok() {
            println!("Executing: git {}", args.join(" "));
        }

        Command::new(&self.git_program)
            .current_dir(&self.repo_path)
            .args(args)
            .output()
            .map_err(|e| {
                StoreError::GitOperation(format!(
                    "Failed to execute git command '{}': {e}",
                    args.join(" ")
                ))
            })
    }

    fn ensure_success(output: &Output, command: &str) -> Result<()> {
        if output.status.success() {
            return Ok(());
        }

        Err(StoreError::GitOperation(format!(
            "{} failed: {}",
            command,
            String::from_utf8_lossy(&output.stderr)
        )))
    }

    fn validate_repo_path(path: &Path) -> Result<PathBuf> {
        let dangerous = [';', '|', '&', '$', '`', '\n', '\r'];
        let path_str = path.to_string_lossy();
        if let Some(ch) = dangerous.iter().find(|c| path_str.contains(**c)) {
            return Err(StoreError::StoreValidation(format!(
                "Path contains dangerous character: '{}'",
                ch
            )));
        }

        let canonical = path.canonicalize().map_err(|e| {
            StoreError::StoreValidation(format!("Invalid store path '{}': {e}", path.display()))
        })?;

        if !canonical.is_dir() {
            return Err(StoreError::StoreValidation(format!(
                "'{}' is not a directory",
                canonical.display()
            )));
        }

        Ok(canonical)
    }
}
