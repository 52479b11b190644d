//! Turning git remote URLs into browsable web URLs.

use crate::error::GitOpenError;
use strum::Display;

/// Hosting service behind a remote, used to pick the branch page layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum HostingService {
    #[default]
    Unknown,
    GitHub,
    GitLab,
    Bitbucket,
}

impl HostingService {
    /// Classify a raw remote URL by the host it mentions.
    ///
    /// Checked in order: `github.com`, `gitlab.com`, `bitbucket.org`.
    pub fn classify(remote_url: &str) -> Self {
        if remote_url.contains("github.com") {
            HostingService::GitHub
        } else if remote_url.contains("gitlab.com") {
            HostingService::GitLab
        } else if remote_url.contains("bitbucket.org") {
            HostingService::Bitbucket
        } else {
            HostingService::Unknown
        }
    }

    /// Path segment placed between the repository URL and the branch name.
    fn branch_path(self) -> &'static str {
        match self {
            HostingService::GitLab => "/-/tree/",
            HostingService::Bitbucket => "/src/",
            // Unknown hosts get the GitHub layout
            HostingService::GitHub | HostingService::Unknown => "/tree/",
        }
    }
}

/// Convert a git remote URL (HTTPS, `ssh://` or scp-like) into a web URL.
///
/// HTTP(S) remotes only lose their `.git` suffix. Everything else is treated
/// as SSH: the `ssh://` prefix is dropped, the first `:` becomes `/` and
/// `git@` becomes `https://`.
pub fn web_url(remote_url: &str) -> Result<String, GitOpenError> {
    if !remote_url.contains("://") && !remote_url.contains('@') {
        return Err(GitOpenError::InvalidUrlFormat(remote_url.to_string()));
    }

    if remote_url.starts_with("https://") || remote_url.starts_with("http://") {
        return Ok(strip_git_suffix(remote_url).to_string());
    }

    let url = remote_url.strip_prefix("ssh://").unwrap_or(remote_url);
    let url = url.replacen(':', "/", 1);
    let url = url.replacen("git@", "https://", 1);
    Ok(strip_git_suffix(&url).to_string())
}

/// Link to `branch` on the repository page at `base_url`.
///
/// The branch name is inserted verbatim; callers that need escaping must do
/// it beforehand.
pub fn branch_url(base_url: &str, branch: &str, service: HostingService) -> String {
    format!("{}{}{}", base_url, service.branch_path(), branch)
}

fn strip_git_suffix(url: &str) -> &str {
    url.strip_suffix(".git").unwrap_or(url)
}
