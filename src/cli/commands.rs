//! Command dispatch: wires parsed arguments to the solver service.

use std::io::{self, BufRead};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::parser::{parse_edges, parse_node_count};
use crate::application::{
    format_distance_sums, ApplicationError, OutputStyle, Problem, SolverService,
};
use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_dir, global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Solve {
            input,
            verify,
            style,
        }) => _solve(cli.config.as_deref(), input, *verify, *style),
        Some(Commands::Check { input }) => _check(cli.config.as_deref(), input),
        Some(Commands::Tree { input }) => _tree(cli.config.as_deref(), input),
        Some(Commands::Config { command }) => _config(cli.config.as_deref(), command),
        Some(Commands::Completion { shell }) => {
            _completion(*shell);
            Ok(())
        }
        None => _solve(cli.config.as_deref(), &InputArgs::default(), false, None),
    }
}

#[instrument]
fn _solve(
    config: Option<&Path>,
    input: &InputArgs,
    verify: bool,
    style: Option<OutputStyle>,
) -> CliResult<()> {
    let mut settings = Settings::load(config)?;
    settings.verify |= verify;
    let style = style.unwrap_or(settings.output.style);

    let problem = read_problem(input, &settings)?;
    let solution = SolverService::new(settings)
        .with_root(input.root)
        .solve(&problem)?;
    debug!("verified: {}", solution.verified);

    output::info(&format_distance_sums(style, &solution.distance_sums));
    Ok(())
}

#[instrument]
fn _check(config: Option<&Path>, input: &InputArgs) -> CliResult<()> {
    let settings = Settings::load(config)?;
    let problem = read_problem(input, &settings)?;
    let report = SolverService::new(settings)
        .with_root(input.root)
        .check(&problem)?;

    output::success(&format!(
        "brute force agrees on all {} nodes",
        report.node_count
    ));
    output::success(&format!(
        "edge identity holds: total {} == {}",
        report.total, report.identity_total
    ));
    Ok(())
}

#[instrument]
fn _tree(config: Option<&Path>, input: &InputArgs) -> CliResult<()> {
    let settings = Settings::load(config)?;
    let problem = read_problem(input, &settings)?;
    let tree = SolverService::new(settings)
        .with_root(input.root)
        .render(&problem)?;
    output::info(&tree);
    Ok(())
}

#[instrument]
fn _config(config: Option<&Path>, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(config)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(unavailable)".to_string());
            output::action("global", &global);
            if let Some(path) = config {
                output::action("explicit", &path.display());
            }
        }
        ConfigCommands::Init { force } => {
            let (Some(dir), Some(path)) = (global_config_dir(), global_config_path()) else {
                return Err(CliError::Usage(
                    "cannot determine the global config directory".to_string(),
                ));
            };
            if path.exists() && !force {
                output::warning(&format!(
                    "{} exists, use --force to overwrite",
                    path.display()
                ));
                return Ok(());
            }
            std::fs::create_dir_all(&dir)
                .and_then(|_| std::fs::write(&path, Settings::template()))
                .map_err(|e| ApplicationError::OperationFailed {
                    context: format!("write {}", path.display()),
                    source: Box::new(e),
                })?;
            output::action("created", &path.display());
        }
    }
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Resolve the problem from a file, from literals, or interactively.
fn read_problem(input: &InputArgs, settings: &Settings) -> CliResult<Problem> {
    match (&input.file, &input.nodes) {
        (Some(path), _) => Ok(Problem::load(path)?),
        (None, Some(nodes)) => Ok(Problem::from_literals(
            nodes,
            input.edges.as_deref().unwrap_or(""),
        )?),
        (None, None) => prompt_problem(settings),
    }
}

/// Ask for n first and reject it before asking for the edges.
fn prompt_problem(settings: &Settings) -> CliResult<Problem> {
    output::prompt("Enter n:");
    let nodes = read_stdin_line()?;
    let node_count = parse_node_count(&nodes)?;
    if node_count < 1 || node_count > settings.max_nodes {
        return Err(ApplicationError::NodeCountOutOfRange {
            node_count,
            max: settings.max_nodes,
        }
        .into());
    }

    output::prompt("Enter edges (format: [[a,b],[c,d],...]):");
    let edges = read_stdin_line()?;
    Ok(Problem::new(node_count, parse_edges(&edges)?))
}

fn read_stdin_line() -> CliResult<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| ApplicationError::OperationFailed {
            context: "read stdin".to_string(),
            source: Box::new(e),
        })?;
    Ok(line)
}
