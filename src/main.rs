use clap::Parser;
use page_object_miner::cli::commands::{cmd_analyze, cmd_generate};
use page_object_miner::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Analyze {
            input,
            min_similarity,
            format,
            output,
            trace,
        } => {
            cmd_analyze(
                &input,
                min_similarity,
                format.as_deref(),
                output.as_deref(),
                trace.as_deref(),
                &config,
                cli.verbose,
            )?;
        }
        Commands::Generate {
            input,
            min_similarity,
            output,
        } => {
            cmd_generate(
                &input,
                min_similarity,
                output.as_deref(),
                &config,
                cli.verbose,
            )?;
        }
    }

    Ok(())
}
