use crate::error::WeatherError;
use crate::table::WeatherTable;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};

/// Results of every query over one table.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub num_days: usize,
    pub min_per_day: Vec<f32>,
    pub max_per_day: Vec<f32>,
    /// `None` when the table has a single day.
    pub largest_drop: Option<f32>,
    pub most_extreme: Vec<f32>,
    pub window: usize,
    pub max_last_k_days: Vec<f32>,
    pub predicted_temperature: f32,
}

impl Report {
    pub fn compute(table: &WeatherTable, window: usize) -> Result<Self, WeatherError> {
        let (min_per_day, max_per_day) = table.find_min_and_max_per_day();

        let largest_drop = match table.find_the_largest_drop() {
            Ok(drop) => Some(drop),
            Err(WeatherError::InsufficientData { .. }) => None,
            Err(err) => return Err(err),
        };

        Ok(Self {
            num_days: table.num_days(),
            min_per_day: min_per_day.to_vec(),
            max_per_day: max_per_day.to_vec(),
            largest_drop,
            most_extreme: table.find_the_most_extreme_day().to_vec(),
            window,
            max_last_k_days: table.max_last_k_days(window)?.to_vec(),
            predicted_temperature: table.predict_temperature(window)?,
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let writer = BufWriter::new(file);

        serde_json::to_writer_pretty(writer, self).context("failed to serialize report")?;
        Ok(())
    }
}
