//! Common test utilities for git-open integration tests
//!
//! `TestRepo` creates real temporary git repositories and runs the compiled
//! binary inside them with an isolated `$HOME`.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get path to compiled binary (built by cargo test)
pub fn git_open_bin() -> &'static str {
    env!("CARGO_BIN_EXE_git-open")
}

/// Run git-open in `dir` with no user config and no `GIT_OPEN_*` overrides
pub fn git_open_in(dir: &Path, home: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(git_open_bin());
    cmd.args(args)
        .current_dir(dir)
        .env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("GIT_OPEN_PLAIN")
        .env_remove("GIT_OPEN_BROWSER")
        .env_remove("GIT_OPEN_BRANCH_LINKS");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute git-open")
}

fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// A temporary git repository with an initial commit on main
pub struct TestRepo {
    dir: TempDir,
    home: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let home = TempDir::new().expect("Failed to create home dir");
        let path = dir.path();

        git(path, &["init", "-b", "main"]);
        git(path, &["config", "user.email", "test@test.com"]);
        git(path, &["config", "user.name", "Test User"]);

        fs::write(path.join("README.md"), "# Test Repo\n").expect("Failed to write README");
        git(path, &["add", "-A"]);
        git(path, &["commit", "-m", "Initial commit"]);

        Self { dir, home }
    }

    /// Create a repository whose origin points at `url`
    pub fn with_remote(url: &str) -> Self {
        let repo = Self::new();
        git(repo.dir.path(), &["remote", "add", "origin", url]);
        repo
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Fake `$HOME` used when running git-open
    pub fn home(&self) -> PathBuf {
        self.home.path().to_path_buf()
    }

    pub fn checkout_new(&self, branch: &str) {
        git(self.dir.path(), &["checkout", "-b", branch]);
    }

    /// Record `branch` as origin's default, as `git clone` does
    pub fn set_origin_head(&self, branch: &str) {
        let target = format!("refs/remotes/origin/{}", branch);
        git(
            self.dir.path(),
            &["symbolic-ref", "refs/remotes/origin/HEAD", &target],
        );
    }

    /// Add a linked worktree on a new branch under `parent`
    pub fn add_worktree(&self, branch: &str, parent: &Path) -> PathBuf {
        let worktree = parent.join("worktree");
        git(
            self.dir.path(),
            &["worktree", "add", "-b", branch, worktree.to_str().unwrap()],
        );
        worktree
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        git_open_in(self.dir.path(), self.home.path(), args, envs)
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
