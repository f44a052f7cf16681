use crate::analysis::Report;
use crate::config::{Config, SourceConfig};
use crate::synth::generate_table;
use crate::table::{WeatherTable, weekday_of};
use anyhow::{Context, Result};
use chrono::Weekday;
use std::path::{Path, PathBuf};

pub struct Manager {
    cfg: Config,
    table: WeatherTable,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let cfg = Config::from_file(config_file).context("failed to construct cfg")?;
        log::info!("{cfg:#?}");

        let table = match &cfg.source {
            SourceConfig::Inline { days } => {
                WeatherTable::from_rows(days).context("failed to construct table")?
            }
            SourceConfig::Synthetic(synth) => {
                generate_table(synth).context("failed to generate table")?
            }
        };
        log::info!("loaded table with {} days", table.num_days());

        Ok(Self { cfg, table })
    }

    pub fn table(&self) -> &WeatherTable {
        &self.table
    }

    pub fn run_report(&self, output: Option<PathBuf>) -> Result<()> {
        let report =
            Report::compute(&self.table, self.cfg.query.window).context("failed to compute report")?;

        match output {
            Some(file) => {
                report
                    .save(&file)
                    .with_context(|| format!("failed to save report to {file:?}"))?;
                log::info!("saved {file:?}");
            }
            None => println!("{}", report.to_json_string()?),
        }

        Ok(())
    }

    pub fn run_locate(&self, readings: &[f32]) -> Result<(usize, Weekday)> {
        let idx = self
            .table
            .what_day_is_this_from(readings)
            .context("failed to locate readings")?;
        let weekday = weekday_of(idx);
        log::info!("readings match day {idx} ({weekday})");
        println!("{idx} {weekday}");

        Ok((idx, weekday))
    }
}
