use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitFacade: Send + Sync {
    // True when the version-control marker directory exists in the workspace
    fn has_repository(&self) -> bool;

    // `git status`
    async fn status(&self) -> Result<String>;

    // `git add .`
    async fn stage_all(&self) -> Result<String>;

    // `git commit -m <message>`
    async fn commit(&self, message: &str) -> Result<String>;

    // `git push origin master`
    async fn push(&self) -> Result<String>;

    fn workspace_root(&self) -> PathBuf;
}
