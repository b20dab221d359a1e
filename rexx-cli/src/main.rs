//! Command-line interface for REXX sources
//! This binary highlights, indents and outlines REXX programs from the shell.
//!
//! Usage:
//!   rexx highlight `<path>` [--format json|simple]        - Print classified tokens
//!   rexx indent `<path>` [--line N] [--check | --write]   - Re-indent a file
//!   rexx outline `<path>`                                 - List routine declarations
//!   rexx vocabulary [keywords|builtins|stages]            - Print the vocabulary tables

mod commands;
mod error;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use error::Result;
use rexx_config::{Loader, RexxConfig};
use std::path::PathBuf;
use std::process::ExitCode;

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the REXX file")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .index(1)
}

fn cli() -> Command {
    Command::new("rexx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Highlight and indent REXX and CMS Pipelines sources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
        .subcommand(
            Command::new("highlight")
                .about("Classify a file and print its tokens")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(["json", "simple"])
                        .default_value("json")
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("indent")
                .about("Re-indent a file, or print the indentation of one line")
                .arg(path_arg())
                .arg(
                    Arg::new("line")
                        .long("line")
                        .short('l')
                        .value_parser(value_parser!(u64).range(1..))
                        .help("Print the indentation column for this line (1-based)"),
                )
                .arg(
                    Arg::new("offset")
                        .long("offset")
                        .value_parser(value_parser!(u64).range(1..))
                        .help("Columns per indentation level (overrides the configuration)"),
                )
                .arg(
                    Arg::new("check")
                        .long("check")
                        .action(ArgAction::SetTrue)
                        .conflicts_with_all(["write", "line"])
                        .help("Exit with status 1 if the file is not indented"),
                )
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .action(ArgAction::SetTrue)
                        .conflicts_with("line")
                        .help("Rewrite the file in place"),
                ),
        )
        .subcommand(
            Command::new("outline")
                .about("List routine declarations")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("vocabulary")
                .about("Print the keyword, built-in or pipeline stage tables")
                .arg(
                    Arg::new("table")
                        .index(1)
                        .help("keywords, builtins or stages (default: all three)"),
                ),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(&matches);

    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
    }
}

fn init_logging(matches: &ArgMatches) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if matches.get_flag("quiet") {
        builder.filter_level(log::LevelFilter::Error);
    } else if matches.get_flag("verbose") {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(matches: &ArgMatches) -> Result<ExitCode> {
    match matches.subcommand() {
        Some(("highlight", sub)) => {
            let config = load_config(matches, None)?;
            let format = sub
                .get_one::<String>("format")
                .map_or("json", String::as_str);
            commands::highlight(path(sub), format, &config)
        }
        Some(("indent", sub)) => {
            let config = load_config(matches, sub.get_one::<u64>("offset").copied())?;
            let options = commands::IndentCommand {
                line: sub.get_one::<u64>("line").map(|line| *line as usize),
                check: sub.get_flag("check"),
                write: sub.get_flag("write"),
            };
            commands::indent(path(sub), &options, &config)
        }
        Some(("outline", sub)) => {
            let config = load_config(matches, None)?;
            commands::outline(path(sub), &config)
        }
        Some(("vocabulary", sub)) => {
            commands::vocabulary(sub.get_one::<String>("table").map(String::as_str))
        }
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn path(matches: &ArgMatches) -> &PathBuf {
    matches
        .get_one::<PathBuf>("path")
        .expect("path is a required argument")
}

/// Defaults, then the `--config` file, then command-line overrides
fn load_config(matches: &ArgMatches, offset: Option<u64>) -> Result<RexxConfig> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(file);
    }
    if let Some(offset) = offset {
        loader = loader.set_override("indentation.offset", offset as i64)?;
    }
    let config = loader.build()?;
    log::debug!("configuration: {:?}", config);
    Ok(config)
}
