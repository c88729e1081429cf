//! gloam CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use gloam_runtime::{GameRepl, Session, Snapshot, demo_world};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    save_file: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    quiet: bool,
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-q" | "--quiet" => config.quiet = true,
            "--log-level" => {
                i += 1;
                if i >= args.len() {
                    return Err("--log-level requires a value".into());
                }
                config.log_filter = Some(args[i].clone());
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                if config.save_file.is_some() {
                    return Err("at most one save file may be given".into());
                }
                config.save_file = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("gloam {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.log_filter.as_deref());

    // Resume from a save file when one is given, otherwise start the demo.
    let session = match &config.save_file {
        Some(path) => {
            let snapshot = Snapshot::load_from_file(path)?;
            snapshot.world.validate()?;
            Session::new(snapshot.world, snapshot.state)
        }
        None => {
            let (world, state) = demo_world()?;
            Session::new(world, state)
        }
    };

    let mut repl = GameRepl::new(session)?;
    if config.quiet || config.save_file.is_some() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn init_tracing(filter: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let filter = match filter {
        Some(spec) => EnvFilter::new(spec),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!(
        "gloam - an interactive-fiction engine

USAGE:
    gloam [OPTIONS] [SAVE_FILE]

ARGUMENTS:
    [SAVE_FILE]    Resume a saved game instead of starting the demo

OPTIONS:
    -h, --help         Print help information
    -V, --version      Print version information
    -q, --quiet        Skip the welcome banner
    --log-level SPEC   Set the log filter (e.g. debug, gloam_engine=trace)

EXAMPLES:
    gloam                      Start the built-in demo game
    gloam mygame.msgpack       Resume a saved game
    gloam --log-level debug    Play with engine logging on stderr"
    );
}
