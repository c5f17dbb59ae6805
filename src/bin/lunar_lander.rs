use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use lunar_lander::config::{LanderConfig, load_lander_config, to_toml_string};
use lunar_lander::console::{
    BurnSource, Console, LineKind, ScriptedBurns, Session, StdinBurns, TerminalConsole,
};
use lunar_lander::sim::SimulationEngine;

#[derive(Parser)]
#[command(author, version, about = "Turn-based vis viva lunar landing simulator")]
struct Cli {
    /// Lander configuration (TOML or YAML); built-in scenario when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated burns (kg) to replay instead of reading stdin; skips once exhausted
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    burns: Option<Vec<String>>,

    /// Print the effective configuration as TOML and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,

    /// Disable ANSI colours
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match &cli.config {
        Some(path) => load_lander_config(path)?,
        None => LanderConfig::default(),
    };

    if cli.print_config {
        print!("{}", to_toml_string(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let mut console = TerminalConsole::stdout();
    let engine = match SimulationEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            console.line(LineKind::Error, &err.to_string())?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let burns: Box<dyn BurnSource> = match cli.burns {
        Some(entries) => Box::new(ScriptedBurns::new(entries)),
        None => Box::new(StdinBurns::stdin()),
    };

    Session::new(engine, console, burns).run()?;
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
