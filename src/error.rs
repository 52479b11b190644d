use thiserror::Error;

/// Failures the core can report before a URL reaches the user.
#[derive(Debug, Error)]
pub enum GitOpenError {
    #[error("Not in a git repository (or any of the parent directories)")]
    NotAGitRepo(#[source] git2::Error),

    #[error(
        "No git remote '{0}' found.\n\n\
         To fix this, add a remote:\n\n  \
         git remote add {0} <url>"
    )]
    NoRemote(String),

    #[error(
        "Git remote '{0}' has no URL configured.\n\n\
         To fix this, set the remote URL:\n\n  \
         git remote set-url {0} <url>"
    )]
    NoRemoteUrl(String),

    #[error("Could not determine the current branch: {0}")]
    NoBranch(String),

    #[error("Unsupported remote URL format: '{0}'")]
    InvalidUrlFormat(String),

    #[error("Failed to launch browser '{program}': {source}")]
    BrowserLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Opening a browser is not supported on '{0}'; set `browser` in the config file")]
    UnsupportedPlatform(String),
}
