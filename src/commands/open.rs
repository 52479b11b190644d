use crate::browser::{BrowserOpener, Platform, SystemBrowser};
use crate::config::{BranchLinks, Config};
use crate::git::{GitReader, GitRepo, ORIGIN};
use crate::remote::{self, HostingService};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct OpenOptions {
    /// Print the URL instead of opening it
    pub plain: bool,
    pub branch_links: BranchLinks,
}

/// Resolves the web URL for the checked-out branch and shows it.
pub struct OpenCommand<'a> {
    git: &'a dyn GitReader,
    browser: &'a dyn BrowserOpener,
}

impl<'a> OpenCommand<'a> {
    pub fn new(git: &'a dyn GitReader, browser: &'a dyn BrowserOpener) -> Self {
        Self { git, browser }
    }

    /// Web URL of the current branch on `origin`.
    pub fn resolve_url(&self, branch_links: BranchLinks) -> Result<String> {
        let remote_url = self.git.remote_url(ORIGIN)?;
        let base_url = remote::web_url(&remote_url)?;
        let branch = self.git.current_branch()?;
        let service = HostingService::classify(&remote_url);
        log::debug!(
            "remote {} -> {} ({}), branch {}",
            remote_url,
            base_url,
            service,
            branch
        );

        if branch_links == BranchLinks::NonDefault
            && self.git.default_branch(ORIGIN).as_deref() == Some(branch.as_str())
        {
            log::debug!("{} is the default branch, linking repository root", branch);
            return Ok(base_url);
        }

        Ok(remote::branch_url(&base_url, &branch, service))
    }

    /// Print or open the URL. A browser that fails to launch is reported but
    /// does not fail the command.
    pub fn execute(&self, options: &OpenOptions, out: &mut impl Write) -> Result<()> {
        let url = self.resolve_url(options.branch_links)?;

        if options.plain {
            writeln!(out, "Web URL: {}", url)?;
            return Ok(());
        }

        writeln!(out, "Opening {} in browser...", url.cyan())?;
        if let Err(err) = self.browser.open(&url) {
            eprintln!("{} {}", "Error opening URL in browser:".yellow(), err);
        }
        Ok(())
    }
}

/// Open the current branch of the repository in the working directory
pub fn run(config: &Config, plain: bool) -> Result<()> {
    let repo = GitRepo::open()?;
    let browser = SystemBrowser::new(Platform::resolve(config.browser.as_deref()));
    let options = OpenOptions {
        plain: plain || config.plain,
        branch_links: config.branch_links,
    };

    let stdout = io::stdout();
    OpenCommand::new(&repo, &browser).execute(&options, &mut stdout.lock())
}
