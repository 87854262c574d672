//! silo-filter CLI: build metadata filter documents from the terminal.
//!
//! Three modes:
//! - **Shell mode**: `silo-filter [flags] compile --where year gte 2020`: single command, exit
//! - **REPL mode**: `silo-filter [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "where year gte 2020" | silo-filter`: line-by-line from stdin

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use silo_filter::{CompilerConfig, Error, LogicalCombinator};
use silo_filter_wire::decode_fields;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_document, format_error, format_fields, OutputMode};
use state::SessionState;

fn main() {
    let cli = build_cli();
    let matches = cli.get_matches();

    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string(), output_mode));
            process::exit(1);
        }
    };

    // The subscriber depends on the config, so the load is reported afterwards.
    init_tracing(&config, matches.get_flag("verbose"));
    info!(
        fields = config.fields.len(),
        dialect = %config.dialect(),
        "loaded filter config"
    );

    let mut state = SessionState::new(&config);

    if matches.subcommand().is_some() {
        let exit_code = run_shell_mode(&matches, &mut state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state, output_mode);
    } else {
        let exit_code = repl::run_pipe(&mut state, output_mode);
        process::exit(exit_code);
    }
}

/// Config file first, then `--schema`, then `--db-type`.
fn load_config(matches: &clap::ArgMatches) -> Result<CompilerConfig, Error> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => CompilerConfig::load(path)?,
        None => CompilerConfig::default(),
    };
    if let Some(path) = matches.get_one::<String>("schema") {
        let text = std::fs::read_to_string(path)?;
        config = config.with_fields(decode_fields(&text)?);
    }
    if let Some(db_type) = matches.get_one::<String>("db-type") {
        config = config.with_db_type(db_type.clone());
    }
    Ok(config)
}

fn init_tracing(config: &CompilerConfig, verbose: bool) {
    let default = if verbose {
        "debug"
    } else {
        config.log.as_deref().unwrap_or("warn")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    match matches.subcommand() {
        Some(("compile", sub)) => {
            if sub.get_flag("or") {
                state.set_combinator(LogicalCombinator::Or);
            }
            if let Some(rows) = sub.get_occurrences::<String>("where") {
                for row in rows {
                    let row: Vec<&String> = row.collect();
                    let [field, op, value] = row.as_slice() else {
                        eprintln!("{}", format_error("--where takes FIELD OP VALUE", mode));
                        return 1;
                    };
                    if let Err(e) = state.apply_where(field, op, value) {
                        eprintln!("{}", format_error(&e, mode));
                        return 1;
                    }
                }
            }
            println!("{}", format_document(state.document().as_ref(), mode));
            0
        }
        Some(("fields", _)) => {
            println!("{}", format_fields(state.fields(), mode));
            0
        }
        _ => {
            eprintln!("{}", format_error("Unknown subcommand", mode));
            1
        }
    }
}
