use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use schemaform::config::FormFile;
use schemaform::form::check_schema;
use schemaform::logging::init_tracing;
use schemaform::ui::runtime::{run, RunOutcome};

#[derive(Debug, Parser)]
#[command(
    name = "schemaform",
    version,
    about = "Render a form described in TOML and print what was submitted"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the form and print the submitted values as JSON
    Run {
        /// Form file (defaults to the user config directory)
        path: Option<PathBuf>,
    },
    /// Report schema problems without showing the form
    Check {
        /// Form file (defaults to the user config directory)
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Run { path } => {
            let form = load(path)?;
            let theme = form.theme()?;
            match run(form, theme).context("terminal session failed")? {
                RunOutcome::Submitted(values) => {
                    println!("{}", serde_json::to_string_pretty(&values)?);
                    Ok(ExitCode::SUCCESS)
                }
                RunOutcome::Cancelled => {
                    eprintln!("Cancelled");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Check { path } => {
            let form = load(path)?;
            let problems = check_schema(&form.fields);
            if problems.is_empty() {
                println!("OK: {} fields", form.fields.len());
                return Ok(ExitCode::SUCCESS);
            }
            for problem in &problems {
                println!("{problem}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn load(path: Option<PathBuf>) -> anyhow::Result<FormFile> {
    let path = path.unwrap_or_else(FormFile::default_path);
    FormFile::load(&path).with_context(|| format!("could not load {}", path.display()))
}
