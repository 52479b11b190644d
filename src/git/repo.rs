use super::GitReader;
use crate::error::GitOpenError;
use git2::Repository;
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository at the current directory or any parent
    pub fn open() -> Result<Self, GitOpenError> {
        Self::discover(".")
    }

    /// Open the repository containing `path`, searching upward.
    /// Linked worktrees resolve to their own HEAD.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitOpenError> {
        let repo = Self {
            repo: Repository::discover(path).map_err(GitOpenError::NotAGitRepo)?,
        };
        log::debug!("using repository at {}", repo.git_dir().display());
        Ok(repo)
    }

    /// Get the .git directory path
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }
}

impl GitReader for GitRepo {
    fn remote_url(&self, remote: &str) -> Result<String, GitOpenError> {
        let found = self
            .repo
            .find_remote(remote)
            .map_err(|_| GitOpenError::NoRemote(remote.to_string()))?;

        match found.url() {
            Some(url) if !url.is_empty() => Ok(url.to_string()),
            _ => Err(GitOpenError::NoRemoteUrl(remote.to_string())),
        }
    }

    fn current_branch(&self) -> Result<String, GitOpenError> {
        match self.repo.head() {
            Ok(head) => {
                if !head.is_branch() {
                    return Err(GitOpenError::NoBranch("HEAD is detached".to_string()));
                }
                head.shorthand()
                    .map(str::to_string)
                    .ok_or_else(|| GitOpenError::NoBranch("branch name is not valid UTF-8".to_string()))
            }
            // No commits yet: HEAD still names the branch it will create
            Err(err) => {
                let head = self
                    .repo
                    .find_reference("HEAD")
                    .map_err(|_| GitOpenError::NoBranch(err.message().to_string()))?;
                head.symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(str::to_string)
                    .ok_or_else(|| GitOpenError::NoBranch(err.message().to_string()))
            }
        }
    }

    fn default_branch(&self, remote: &str) -> Option<String> {
        let head = self
            .repo
            .find_reference(&format!("refs/remotes/{}/HEAD", remote))
            .ok()?;
        let prefix = format!("refs/remotes/{}/", remote);
        head.symbolic_target()?
            .strip_prefix(&prefix)
            .map(str::to_string)
    }
}
