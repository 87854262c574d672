//! clap command tree

use clap::{Arg, ArgAction, Command};

/// Build the top-level `silo-filter` command.
pub fn build_cli() -> Command {
    Command::new("silo-filter")
        .about("Build metadata filter documents for Postgres-vector and Qdrant silos")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .help("TOML config with db_type and [[fields]]"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .short('s')
                .value_name("PATH")
                .help("JSON collection schema; overrides fields from --config"),
        )
        .arg(
            Arg::new("db-type")
                .long("db-type")
                .value_name("TYPE")
                .help("Backend dbType (QDRANT selects Qdrant, anything else Postgres-vector)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Compact JSON output"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Debug logging on stderr"),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile filter rows given on the command line")
                .arg(
                    Arg::new("where")
                        .long("where")
                        .short('w')
                        .num_args(3)
                        .value_names(["FIELD", "OP", "VALUE"])
                        .action(ArgAction::Append)
                        .help("Filter row, e.g. --where year gte 2020"),
                )
                .arg(
                    Arg::new("or")
                        .long("or")
                        .action(ArgAction::SetTrue)
                        .help("Join rows with OR instead of AND"),
                ),
        )
        .subcommand(Command::new("fields").about("List the loaded metadata fields"))
}
