mod cmd;

use askcc_core::{AgentMode, Settings};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter (e.g. `debug`, `warn`).
const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Parser)]
#[command(
    name = "askcc",
    about = "A one-shot Claude Code CLI executor for GitHub issues",
    version
)]
struct Cli {
    /// Working directory for the claude subprocess (defaults to current directory)
    #[arg(long, global = true)]
    cwd: Option<PathBuf>,

    /// askcc configuration root (default: ~/.askcc)
    #[arg(long, global = true, env = "ASKCC_HOME")]
    config_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IssueArgs {
    /// GitHub issue URL, e.g. https://github.com/owner/repo/issues/42
    #[arg(long)]
    github_issue_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run Claude in plan mode (read-only analysis)
    Plan(IssueArgs),

    /// Run Claude in development mode
    Develop(IssueArgs),

    /// Run Claude in review mode (issue quality review)
    Review(IssueArgs),

    /// Run Claude in explore mode (solution research with trade-offs)
    Explore(IssueArgs),

    /// Run Claude in diagnose mode (root-cause investigation)
    Diagnose(IssueArgs),

    /// Install bundled skills to the OpenClaw workspace
    Install {
        /// Target directory for skills (default: ~/.openclaw/workspace/skills)
        #[arg(long)]
        directory: Option<PathBuf>,

        /// Install skills from this directory instead of the bundled set
        #[arg(long)]
        source: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let settings = Settings::resolve(cli.config_root.as_deref())?;

    let (mode, issue) = match cli.command {
        Commands::Install { directory, source } => {
            cmd::install::run(&settings, directory.as_deref(), source.as_deref())?;
            return Ok(0);
        }
        Commands::Plan(issue) => (AgentMode::Plan, issue),
        Commands::Develop(issue) => (AgentMode::Develop, issue),
        Commands::Review(issue) => (AgentMode::Review, issue),
        Commands::Explore(issue) => (AgentMode::Explore, issue),
        Commands::Diagnose(issue) => (AgentMode::Diagnose, issue),
    };

    cmd::agent::run(&settings, mode, &issue.github_issue_url, cli.cwd.as_deref())
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // Print the full error chain (anyhow's alternate Display)
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
