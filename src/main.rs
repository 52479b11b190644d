use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use git_open::commands;
use git_open::config::Config;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-open")]
#[command(about = "Open the web page of the current Git repository and branch")]
#[command(
    long_about = "Reads the `origin` remote and current branch of the Git repository in the \
                  working directory, converts them to a web URL and opens it in the browser."
)]
struct Cli {
    /// Config file (default is $HOME/.git-open.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Just print the web URL without opening it
    #[arg(short, long)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show program version information
    Version,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    if let Some(path) = &config.source {
        eprintln!("{} {}", "Using config file:".dimmed(), path.display());
    }

    match cli.command {
        Some(Commands::Version) => commands::version::run(&mut io::stdout().lock()),
        None => commands::open::run(&config, cli.plain),
    }
}
