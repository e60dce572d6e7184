use anyhow::Result;
use bmical::cli::{self, Commands};
use bmical::commands::{init_config, run_calculate, run_interactive, CalculateConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::parse_args();

    match cli.command {
        Commands::Calculate {
            weight,
            height,
            unit,
            format,
            output,
            plain,
            config,
        } => run_calculate(CalculateConfig {
            weight_kg: weight,
            height_raw: height,
            unit: unit.map(Into::into),
            format: format.map(Into::into),
            output,
            plain,
            config_path: config,
        }),
        Commands::Interactive { plain } => run_interactive(plain),
        Commands::Init { force } => init_config(force),
    }
}
