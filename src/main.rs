use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wxstat::manager::Manager;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[arg(long)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Report {
        #[arg(long)]
        output: Option<PathBuf>,
    },

    Locate {
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        readings: Vec<f32>,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mgr = Manager::new(&args.config).context("failed to construct mgr")?;

    match args.command {
        Command::Report { output } => mgr.run_report(output)?,
        Command::Locate { readings } => {
            mgr.run_locate(&readings)?;
        }
    }

    Ok(())
}
