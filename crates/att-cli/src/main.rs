use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use att_cli::commands::{convert, intervals, shifts};
use att_cli::input::read_table;
use att_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Shifts {
            input,
            start_row,
            json,
        }) => {
            let table = read_table(input, *start_row)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let records = table.records();
            let mut stdout = std::io::stdout().lock();
            shifts::run(&mut stdout, &records, *json)?;
        }
        Some(Commands::Intervals {
            input,
            start_row,
            json,
            csv,
            output,
        }) => {
            let table = read_table(input, *start_row)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let records = table.records();

            if *csv || output.is_some() {
                let config =
                    Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
                let out_path = output.clone().unwrap_or_else(|| {
                    intervals::default_output_path(input, &config.output_suffix)
                });
                let written = intervals::write_csv(&records, &out_path)?;
                if written == 0 {
                    tracing::debug!("no shift data to write");
                } else {
                    tracing::debug!(path = %out_path.display(), rows = written, "shift data saved");
                }
            } else {
                let mut stdout = std::io::stdout().lock();
                intervals::run(&mut stdout, &records, *json)?;
            }
        }
        Some(Commands::Convert {
            input,
            start_row,
            output,
        }) => {
            let table = read_table(input, *start_row)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let out_path = output
                .clone()
                .unwrap_or_else(|| convert::default_output_path(input));
            let written = convert::run(&table, &out_path)?;
            tracing::debug!(path = %out_path.display(), rows = written, "table converted");
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
