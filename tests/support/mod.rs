use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Temporary working directory with a store path wired through `BOOKS_FILE`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("failed to allocate workspace")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn store_path(&self) -> PathBuf {
        self.root().join("shelf.json")
    }

    /// `books` invocation pointed at this workspace's store.
    pub fn books(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_books"));
        cmd.args(args)
            .current_dir(self.root())
            .env("BOOKS_FILE", self.store_path())
            .env_remove("BOOKS_LOG");
        cmd
    }

    pub fn validate_books(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_validate-books"));
        cmd.current_dir(self.root()).env_remove("BOOKS_LOG");
        cmd
    }

    pub fn read_store(&self) -> Result<String> {
        fs::read_to_string(self.store_path())
            .with_context(|| format!("reading {}", self.store_path().display()))
    }

    pub fn write_store(&self, contents: &str) -> Result<()> {
        fs::write(self.store_path(), contents)
            .with_context(|| format!("writing {}", self.store_path().display()))
    }
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run a command that is expected to fail and return its output.
pub fn run_failing(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        bail!(
            "command {:?} unexpectedly succeeded\nstdout: {}",
            cmd,
            String::from_utf8_lossy(&output.stdout)
        );
    }
    Ok(output)
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn shipped_schema() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("books.schema.json")
}
