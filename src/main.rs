use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use tokengen::config::{RunOptions, DEFAULT_OUTPUT};
use tokengen::generate::generate_token_module;
use tokengen::schema::BuiltinSchema;

/// Build-time generator for the configured custom token module
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output path for the generated token module
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting tokengen");
    info!("Output path: {:?}", args.output);

    // Resolve options from the environment exactly once
    let options = RunOptions::from_env(args.output);

    let path = generate_token_module(&options, &BuiltinSchema)?;

    info!("Token module generation completed successfully: {:?}", path);
    Ok(())
}
