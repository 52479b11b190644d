mod repo;

pub use repo::GitRepo;

use crate::error::GitOpenError;

/// Remote that `git-open` links to.
pub const ORIGIN: &str = "origin";

/// Read access to the repository the command runs in.
pub trait GitReader {
    /// First configured URL of the named remote.
    fn remote_url(&self, remote: &str) -> Result<String, GitOpenError>;

    /// Short name of the checked-out branch (`main`, `feature/x`).
    fn current_branch(&self) -> Result<String, GitOpenError>;

    /// Branch the remote's `HEAD` points at, when it was recorded locally.
    fn default_branch(&self, remote: &str) -> Option<String>;
}
