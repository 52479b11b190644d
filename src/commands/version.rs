use anyhow::Result;
use std::io::Write;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Commit the binary was built from, embedded by build.rs
pub const COMMIT_HASH: &str = match option_env!("VERGEN_GIT_SHA") {
    Some(sha) => sha,
    None => "none",
};
pub const BUILD_DATE: &str = match option_env!("VERGEN_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

pub fn run(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Version: {}", VERSION)?;
    writeln!(out, "Git Commit: {}", COMMIT_HASH)?;
    writeln!(out, "Build Date: {}", BUILD_DATE)?;
    Ok(())
}
