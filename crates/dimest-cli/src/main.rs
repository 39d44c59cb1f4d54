//! `dimest` command-line front end

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use dimest_core::DimensionRequest;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Output;

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("TOML file with estimator settings")
}

fn cli() -> Command {
    Command::new("dimest")
        .version(dimest_core::VERSION)
        .about("Estimate part dimensions from material and weight")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("estimate")
                .about("Estimate volume and cube side length")
                .arg(
                    Arg::new("material")
                        .long("material")
                        .short('m')
                        .required(true)
                        .help("Material: steel, wood, or plastic"),
                )
                .arg(
                    Arg::new("weight")
                        .long("weight")
                        .short('w')
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("Weight in kilograms"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("materials")
                .about("List known materials and densities")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("request")
                .about("Handle a form request where inputs may be missing")
                .arg(Arg::new("material").long("material").short('m'))
                .arg(
                    Arg::new("weight")
                        .long("weight")
                        .short('w')
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(config_arg()),
        )
}

fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<Output> {
    let output = match matches.subcommand() {
        Some(("estimate", args)) => {
            let estimator =
                commands::load_estimator(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
            let material = args.get_one::<String>("material").map_or("", String::as_str);
            let weight = args.get_one::<f64>("weight").copied().unwrap_or_default();
            commands::estimate(&estimator, material, weight, args.get_flag("json"))
        }
        Some(("materials", args)) => commands::materials(args.get_flag("json")),
        Some(("request", args)) => {
            let estimator =
                commands::load_estimator(args.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
            let request = DimensionRequest {
                material: args.get_one::<String>("material").cloned(),
                weight: args.get_one::<f64>("weight").copied(),
            };
            commands::request(&estimator, &request)
        }
        Some((name, _)) => anyhow::bail!("unknown subcommand: {name}"),
        None => anyhow::bail!("no subcommand given"),
    };
    Ok(output)
}

/// Single stderr line for a failed run, context chain included
fn error_line(err: &anyhow::Error) -> String {
    format!("error: {err:#}")
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(Output::Stdout(text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Output::Stderr(text)) => {
            eprintln!("{text}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}
