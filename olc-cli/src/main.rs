use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Open Location Code (Plus Code) CLI tool
#[derive(Parser)]
#[command(name = "olc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Significant characters per code (2, 4, 6, 8 or 10-15)
    #[arg(
        short,
        long,
        env = "OLC_CODE_LENGTH",
        default_value = "10",
        global = true
    )]
    length: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a single coordinate
    Encode {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Print a map link instead of the bare code
        #[arg(short, long)]
        url: bool,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a full code into the area it covers
    Decode {
        /// The Plus Code, e.g. 7FG49QCJ+2V
        code: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Check whether a code is valid, short or full
    Validate {
        /// The Plus Code to check
        code: String,
    },

    /// Encode multiple coordinates from a file
    Batch {
        /// Input file (CSV or GeoJSON)
        input: PathBuf,

        /// Output file (same format as input if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name for latitude (CSV only)
        #[arg(long, default_value = "lat")]
        lat_col: String,

        /// Column name for longitude (CSV only)
        #[arg(long, default_value = "lon")]
        lon_col: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            lat,
            lon,
            url,
            json,
        } => commands::encode::run(cli.length, lat, lon, url, json),
        Commands::Decode { code, json } => commands::decode::run(&code, json),
        Commands::Validate { code } => commands::validate::run(&code),
        Commands::Batch {
            input,
            output,
            lat_col,
            lon_col,
        } => commands::batch::run(cli.length, input, output, lat_col, lon_col),
    }
}
