//! Launching the user's browser.

use crate::error::GitOpenError;
use std::process::{Command, Stdio};

/// Something that can show a URL to the user.
pub trait BrowserOpener {
    fn open(&self, url: &str) -> Result<(), GitOpenError>;
}

/// How URLs are opened on the machine we run on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Linux and the BSDs: `xdg-open <url>`
    Freedesktop,
    /// `open <url>`
    MacOs,
    /// `cmd /C start "" <url>`, with cmd metacharacters in the URL escaped
    Windows,
    /// User-configured opener; the URL is appended as the last argument
    Custom(Vec<String>),
    Unsupported(String),
}

impl Platform {
    /// Platform of the running binary.
    pub fn detect() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// Configured opener if any, otherwise the detected platform.
    pub fn resolve(browser: Option<&str>) -> Self {
        let argv: Vec<String> = browser
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        if argv.is_empty() {
            Self::detect()
        } else {
            Platform::Custom(argv)
        }
    }

    fn for_os(os: &str) -> Self {
        match os {
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Platform::Freedesktop,
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            other => Platform::Unsupported(other.to_string()),
        }
    }

    /// Program and arguments that open `url`.
    pub fn launch_command(&self, url: &str) -> Result<(String, Vec<String>), GitOpenError> {
        let (program, mut args): (&str, Vec<String>) = match self {
            Platform::Freedesktop => ("xdg-open", vec![]),
            Platform::MacOs => ("open", vec![]),
            Platform::Windows => {
                let args = vec!["/C".into(), "start".into(), String::new(), escape_cmd(url)];
                return Ok(("cmd".to_string(), args));
            }
            Platform::Custom(argv) => match argv.split_first() {
                Some((program, rest)) => (program.as_str(), rest.to_vec()),
                None => return Err(GitOpenError::UnsupportedPlatform("custom".to_string())),
            },
            Platform::Unsupported(os) => {
                return Err(GitOpenError::UnsupportedPlatform(os.clone()));
            }
        };
        args.push(url.to_string());
        Ok((program.to_string(), args))
    }
}

/// Escape characters cmd.exe would treat as operators so `start` receives
/// the URL unchanged.
fn escape_cmd(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, '^' | '&' | '|' | '<' | '>' | '(' | ')' | '%' | '!' | '"') {
            escaped.push('^');
        }
        escaped.push(c);
    }
    escaped
}

/// Opens URLs by spawning the platform opener without waiting for it.
pub struct SystemBrowser {
    platform: Platform,
}

impl SystemBrowser {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl BrowserOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), GitOpenError> {
        let (program, args) = self.platform.launch_command(url)?;
        log::debug!("launching {} {:?}", program, args);

        Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| GitOpenError::BrowserLaunch { program, source })?;

        Ok(())
    }
}
