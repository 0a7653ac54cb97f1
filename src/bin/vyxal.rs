//! Command-line interface for the Vyxal front end
//!
//! Usage:
//!   vyxal parse `<path>` [--format `<format>`] [--config `<file>`]
//!               [--missing-operands `<error|pad>`] [--lambda-arity `<arity>`] [--verbose]
//!   vyxal list-formats

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;
use vyxal_front::vyxal::config::{Loader, VyxalConfig};
use vyxal_front::vyxal::parser::MissingOperands;
use vyxal_front::vyxal::processor::{
    available_formats, process_file, ProcessingOptions, ProcessingSpec,
};

fn main() {
    let matches = Command::new("vyxal")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize and structurally parse Vyxal programs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a program file and print it in the chosen format")
                .arg(
                    Arg::new("path")
                        .help("Path to the Vyxal program")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g. token-simple, ast-treeviz)"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("missing-operands")
                        .long("missing-operands")
                        .value_parser(["error", "pad"])
                        .help("What to do when a modifier runs out of operands"),
                )
                .arg(
                    Arg::new("lambda-arity")
                        .long("lambda-arity")
                        .help("Arity of lambdas written without an arity branch"),
                )
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .action(ArgAction::SetTrue)
                        .help("Log parser recoveries to stderr"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List all available output formats"))
        .try_get_matches()
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });

    match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("list-formats", _)) => handle_formats_command(),
        _ => unreachable!(),
    }
}

fn install_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let filter = if verbose {
        match "vyxal_front=debug".parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        }
    } else {
        filter
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_loader(matches: &ArgMatches) -> Result<Loader, String> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    if let Some(policy) = matches.get_one::<String>("missing-operands") {
        let policy: MissingOperands = policy.parse()?;
        loader = loader
            .with_missing_operands(policy)
            .map_err(|e| e.to_string())?;
    }
    if let Some(arity) = matches.get_one::<String>("lambda-arity") {
        loader = loader
            .with_default_lambda_arity(arity)
            .map_err(|e| e.to_string())?;
    }
    Ok(loader)
}

fn load_config(matches: &ArgMatches) -> VyxalConfig {
    build_loader(matches)
        .and_then(|loader| loader.build().map_err(|e| e.to_string()))
        .unwrap_or_else(|e| {
            eprintln!("Error: failed to load configuration: {}", e);
            std::process::exit(1);
        })
}

fn handle_parse_command(matches: &ArgMatches) {
    install_tracing(matches.get_flag("verbose"));

    let config = load_config(matches);
    let format = matches
        .get_one::<String>("format")
        .cloned()
        .unwrap_or_else(|| config.inspect.default_format.clone());

    let spec = ProcessingSpec::from_string(&format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("\nAvailable formats:");
        for format in available_formats() {
            eprintln!("  {}", format);
        }
        std::process::exit(1);
    });

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("Error: missing program path");
        std::process::exit(1);
    };

    match process_file(path, &spec, &ProcessingOptions::from(&config)) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}
