use clap::{Parser, Subcommand};
use gifforge_av::Strategy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gifforge")]
#[command(author, version, about = "Convert animated GIFs to video or a still frame")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert an animated GIF
    Convert {
        /// GIF file to convert
        #[arg(required = true)]
        input: PathBuf,

        /// Conversion strategy: mp4, frames-mp4, ogv or frame
        #[arg(short, long, default_value = "mp4", value_parser = parse_strategy)]
        strategy: Strategy,

        /// Destination path (defaults to the input name with the output extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum accepted width in pixels (0 = unlimited)
        #[arg(long)]
        max_width: Option<u32>,

        /// Maximum accepted height in pixels (0 = unlimited)
        #[arg(long)]
        max_height: Option<u32>,
    },

    /// Print the dimensions declared in a GIF header
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    s.parse().map_err(|e: gifforge_av::Error| e.to_string())
}
