//! The `formforge` binary entry point.

use std::path::Path;
use std::process::ExitCode;

use formforge_cli::command::CommandRegistry;
use formforge_cli::commands::register_builtin_commands;
use formforge_core::{logging::setup_logging, FormForgeError, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FormForgeError> {
    let mut registry = CommandRegistry::new();
    register_builtin_commands(&mut registry);

    let cli = registry.build_cli().arg(
        clap::Arg::new("settings")
            .long("settings")
            .global(true)
            .help("Path to a TOML settings file"),
    );
    let matches = cli.get_matches();

    let settings = match matches.get_one::<String>("settings") {
        Some(path) => Settings::from_toml_file(Path::new(path))?,
        None => Settings::default(),
    };
    setup_logging(&settings);

    registry.execute(&matches, &settings).await
}
