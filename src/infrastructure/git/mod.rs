use crate::domain::vcs::GitFacade;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

pub mod runner;

/// Directory whose presence marks the workspace root as a git repository.
pub const MARKER_DIR: &str = ".git";
/// The only branch the assistant pushes to.
pub const PUSH_REMOTE: &str = "origin";
pub const PUSH_BRANCH: &str = "master";

/// `GitFacade` backed by the git command-line tool.
pub struct GitCli {
    program: String,
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        Ok(Self::for_path(program, cwd))
    }

    pub fn for_path(program: impl Into<String>, path: PathBuf) -> Self {
        Self {
            program: program.into(),
            workspace_root: path,
        }
    }

    async fn git(&self, args: &[&str]) -> Result<String> {
        let result = runner::run(&self.program, args, &self.workspace_root).await;
        if result.succeeded {
            Ok(result.output)
        } else {
            Err(anyhow!("{}", result.error_text()))
        }
    }
}

#[async_trait]
impl GitFacade for GitCli {
    fn has_repository(&self) -> bool {
        // `.git` is a file inside worktrees and submodules
        self.workspace_root.join(MARKER_DIR).exists()
    }

    async fn status(&self) -> Result<String> {
        self.git(&["status"]).await
    }

    async fn stage_all(&self) -> Result<String> {
        self.git(&["add", "."]).await
    }

    async fn commit(&self, message: &str) -> Result<String> {
        self.git(&["commit", "-m", message]).await
    }

    async fn push(&self) -> Result<String> {
        self.git(&["push", PUSH_REMOTE, PUSH_BRANCH]).await
    }

    fn workspace_root(&self) -> PathBuf {
        self.workspace_root.clone()
    }
}
