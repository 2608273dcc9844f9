//! Command-line HR assistant over the built-in or a snapshot dataset.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hr_dataset::{DatasetResult, DatasetSource, StaticDataset};
use hr_telemetry::{TelemetryConfig, init_tracing};
use hr_tools::hr::register_hr_tools;
use hr_tools::registry::ToolRegistry;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "hr-assistant", version, about = "Answer HR questions from a static dataset")]
struct Cli {
    /// JSON snapshot to load instead of the built-in fixture.
    #[arg(long, env = "HR_DATASET", value_name = "FILE", global = true)]
    dataset: Option<PathBuf>,
    /// Log filter directive.
    #[arg(long, env = "HR_LOG", default_value = hr_telemetry::DEFAULT_FILTER, global = true)]
    log: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one employee record.
    Employee {
        /// Employee id, matched exactly (e.g. EMP001).
        id: String,
    },
    /// Show one policy.
    Policy {
        /// Policy key, matched exactly (e.g. leave_policy).
        key: String,
    },
    /// List every employee record.
    Employees,
    /// List every policy.
    Policies,
    /// List the registered assistant tools.
    Tools,
    /// Invoke an assistant tool with JSON input.
    Invoke {
        /// Tool name.
        tool: String,
        /// JSON input for the tool.
        #[arg(default_value = "{}")]
        input: String,
    },
    /// Print the loaded dataset as snapshot JSON.
    Export,
}

/// Result of a command, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Printed,
    NotFound,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Printed => ExitCode::SUCCESS,
            Outcome::NotFound => ExitCode::FAILURE,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(&TelemetryConfig::new(&cli.log))?;

    let source = DatasetSource::from_optional_path(cli.dataset);
    let dataset = source.load().context("loading dataset")?;

    let mut out = io::stdout().lock();
    let outcome = run(cli.command, dataset, &mut out).await?;
    Ok(outcome.into())
}

async fn run<W: Write>(
    command: Command,
    dataset: Arc<StaticDataset>,
    out: &mut W,
) -> Result<Outcome> {
    match command {
        Command::Employee { id } => print_lookup(out, dataset.get_employee(&id)),
        Command::Policy { key } => print_lookup(out, dataset.get_policy(&key)),
        Command::Employees => print_json(out, dataset.list_employees()),
        Command::Policies => print_json(out, dataset.list_policies()),
        Command::Tools => print_json(out, &assistant_tools(dataset)?.list()),
        Command::Invoke { tool, input } => {
            let input: Value = serde_json::from_str(&input).context("parsing tool input")?;
            let registry = assistant_tools(dataset)?;
            info!(%tool, "invoking tool");
            let output = registry.invoke(&tool, input).await?;
            print_json(out, &output)
        }
        Command::Export => {
            writeln!(out, "{}", dataset.to_json()?)?;
            Ok(Outcome::Printed)
        }
    }
}

fn assistant_tools(dataset: Arc<StaticDataset>) -> Result<ToolRegistry> {
    let registry = ToolRegistry::new();
    register_hr_tools(&registry, dataset)?;
    Ok(registry)
}

fn print_lookup<W: Write, T: Serialize>(
    out: &mut W,
    result: DatasetResult<&T>,
) -> Result<Outcome> {
    match result {
        Ok(value) => print_json(out, value),
        Err(err) if err.is_not_found() => {
            writeln!(io::stderr(), "{err}")?;
            Ok(Outcome::NotFound)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<Outcome> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(Outcome::Printed)
}
