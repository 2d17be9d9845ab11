mod cli;

use gifforge::{config, default_log_filter, default_output, exit_code};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use gifforge_av::{Converter, Strategy, SystemRunner, ToolRegistry};
use std::io::BufReader;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_log_filter(cli.verbose).to_string());

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            strategy,
            output,
            max_width,
            max_height,
        } => {
            let mut config = config::load_config_or_default(cli.config.as_deref())?;
            config.override_limits(max_width, max_height);
            let output = output.unwrap_or_else(|| default_output(&input, strategy));
            convert_file(&input, strategy, &output, &config)
        }
        Commands::Probe { file, json } => probe_file(&file, json),
        Commands::CheckTools => check_tools(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("gifforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn convert_file(
    input: &Path,
    strategy: Strategy,
    output: &Path,
    config: &config::Config,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {:?}", input);
    }
    if input == output {
        anyhow::bail!("Output would overwrite the input: {:?}", output);
    }

    tracing::info!("Converting {:?} with strategy {}", input, strategy);

    let registry = ToolRegistry::discover(&config.tools);
    let converter = Converter::new(SystemRunner::with_registry(registry))
        .with_limits(config.limits)
        .with_staging(config.staging.clone());

    let published = converter
        .convert_file(input, strategy, output)
        .with_context(|| format!("Failed to convert {:?}", input))?;

    println!("{} ({} bytes)", published.path.display(), published.bytes);
    Ok(())
}

fn probe_file(file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {:?}", file);
    }

    let reader = BufReader::new(std::fs::File::open(file)?);
    let dims = gifforge_av::read_dimensions(reader)
        .with_context(|| format!("Failed to read GIF header of {:?}", file))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dims)?);
    } else {
        println!("File: {}", file.display());
        println!("Dimensions: {}x{}", dims.width, dims.height);
    }

    Ok(())
}

fn check_tools(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let registry = ToolRegistry::discover(&config.tools);

    println!("Checking external tools...\n");

    let mut missing = 0;
    for tool in registry.check_all() {
        if tool.available {
            println!(
                "  [OK] {} - {}",
                tool.name,
                tool.version.as_deref().unwrap_or("unknown version")
            );
            if let Some(path) = &tool.path {
                println!("       {}", path.display());
            }
        } else {
            missing += 1;
            println!("  [MISSING] {}", tool.name);
        }
    }

    if missing > 0 {
        println!("\n{} tool(s) missing; some strategies will fail.", missing);
    } else {
        println!("\nAll tools available.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(path)?;

    println!("Configuration is valid");
    println!(
        "  Limits: {}x{} (0 = unlimited)",
        config.limits.max_width, config.limits.max_height
    );
    match &config.staging.temp_root {
        Some(root) => println!("  Staging: {} (prefix {:?})", root.display(), config.staging.prefix),
        None => println!("  Staging: system temp dir (prefix {:?})", config.staging.prefix),
    }

    Ok(())
}
