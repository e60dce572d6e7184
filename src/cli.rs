use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bmical")]
#[command(about = "Body mass index calculator and classifier", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate BMI from a weight and height reading
    Calculate {
        /// Body weight in kilograms
        #[arg(short, long)]
        weight: f64,

        /// Height reading, interpreted per --unit
        #[arg(long)]
        height: f64,

        /// Height unit (defaults to the configured unit)
        #[arg(short, long, value_enum)]
        unit: Option<HeightUnit>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and styling
        #[arg(long)]
        plain: bool,

        /// Configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run an interactive calculation session
    Interactive {
        /// Disable colors and styling
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeightUnit {
    /// Centimeters
    #[value(name = "cm", aliases = ["cms", "centimeters"])]
    Centimeters,
    /// Meters
    #[value(name = "m", alias = "meters")]
    Meters,
    /// Feet
    #[value(name = "ft", alias = "feet")]
    Feet,
}

impl From<HeightUnit> for crate::core::HeightUnit {
    fn from(u: HeightUnit) -> Self {
        match u {
            HeightUnit::Centimeters => crate::core::HeightUnit::Centimeters,
            HeightUnit::Meters => crate::core::HeightUnit::Meters,
            HeightUnit::Feet => crate::core::HeightUnit::Feet,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
