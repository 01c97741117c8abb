//! RecruitDesk CLI - layout inspection and account tooling.
//!
//! # Usage
//!
//! ```bash
//! # Header navigation for a role, with active flags for a path
//! rd-cli nav --role employer --path /employer-module/jobs
//!
//! # Would the guard let a role stay on a path?
//! rd-cli check --role college --path /admin-module/users
//!
//! # Breadcrumb trail for a path
//! rd-cli breadcrumbs /dashboard/admin
//!
//! # Layout files
//! rd-cli layout dump > portal.yaml
//! rd-cli layout validate portal.yaml
//!
//! # Hash a password for the user directory (reads one line from stdin)
//! rd-cli hash-password
//! ```
//!
//! Output is YAML unless `--json` is given. `check` exits with status 2 when
//! the guard redirects.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use recruitdesk_core::Role;
use serde::Serialize;

mod commands;

use commands::CliError;

/// Exit status for a guard redirect.
const EXIT_REDIRECTED: u8 = 2;

#[derive(Parser)]
#[command(name = "rd-cli")]
#[command(author, version, about = "RecruitDesk CLI tools")]
struct Cli {
    /// Print JSON instead of YAML
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the header navigation for a role
    Nav {
        /// Role (admin, college, candidate, employer, sales); omit for no role
        #[arg(short, long)]
        role: Option<Role>,

        /// Path used to mark active entries
        #[arg(short, long, default_value = "/")]
        path: String,

        /// Layout file (built-in layout when omitted)
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },
    /// Check whether a role may stay on a path
    Check {
        /// Role; omit to check a visitor without a session
        #[arg(short, long)]
        role: Option<Role>,

        /// Path to check
        #[arg(short, long)]
        path: String,

        /// Layout file (built-in layout when omitted)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Redirect roles without a home section to the login page
        #[arg(long)]
        fail_closed: bool,
    },
    /// Show the breadcrumb trail for a path
    Breadcrumbs {
        /// Path to resolve
        path: String,

        /// Layout file (built-in layout when omitted)
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },
    /// Inspect layout files
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
    },
    /// Hash a password read from stdin for the user directory
    HashPassword,
}

#[derive(Subcommand)]
enum LayoutAction {
    /// Parse and validate a layout file
    Validate {
        /// Layout file
        file: PathBuf,
    },
    /// Print the built-in layout
    Dump,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let json = cli.json;

    match cli.command {
        Commands::Nav { role, path, layout } => {
            print(&commands::resolve::nav(role, &path, layout.as_deref())?, json)?;
        }
        Commands::Check {
            role,
            path,
            layout,
            fail_closed,
        } => {
            let report = commands::resolve::check(role, &path, layout.as_deref(), fail_closed)?;
            print(&report, json)?;
            if !report.allowed {
                return Ok(ExitCode::from(EXIT_REDIRECTED));
            }
        }
        Commands::Breadcrumbs { path, layout } => {
            print(&commands::resolve::breadcrumbs(&path, layout.as_deref())?, json)?;
        }
        Commands::Layout { action } => match action {
            LayoutAction::Validate { file } => {
                print(&commands::layout::validate(&file)?, json)?;
            }
            LayoutAction::Dump => print(&commands::layout::dump(), json)?,
        },
        Commands::HashPassword => {
            let hash = commands::password::hash_from_reader(&mut std::io::stdin().lock())?;
            print_line(&hash);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[allow(clippy::print_stdout)]
fn print_line(line: &str) {
    println!("{line}");
}

#[allow(clippy::print_stdout)]
fn print<T: Serialize>(value: &T, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", serde_yaml::to_string(value)?);
    }
    Ok(())
}
