//! git-open library interface
//!
//! Turns the `origin` remote and current branch of a repository into a web
//! URL. The binary in main.rs wires these pieces to the command line.

pub mod browser;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod remote;

pub use error::GitOpenError;
