//! Seeded generator of synthetic weather tables.

use crate::config::SynthConfig;
use crate::table::{READINGS_PER_DAY, WeatherTable};
use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Normal;
use std::f32::consts::PI;

/// Generate a table from the given parameters.
///
/// Each day's base temperature takes a random step from the previous one,
/// readings follow a diurnal cycle around it (coldest at the first reading)
/// plus independent noise. The same seed always yields the same table.
pub fn generate_table(cfg: &SynthConfig) -> Result<WeatherTable> {
    let mut rng = ChaCha12Rng::seed_from_u64(cfg.seed);

    let drift_dist = Normal::new(0.0, cfg.drift_std).context("invalid drift distribution")?;
    let noise_dist = Normal::new(0.0, cfg.noise_std).context("invalid noise distribution")?;

    let cycle: Vec<f32> = (0..READINGS_PER_DAY)
        .map(|j| -(2.0 * PI * j as f32 / READINGS_PER_DAY as f32).cos() * cfg.daily_swing / 2.0)
        .collect();

    let mut vals = Vec::with_capacity(cfg.n_days * READINGS_PER_DAY);
    let mut base = cfg.mean_temp;
    for i_day in 0..cfg.n_days {
        if i_day > 0 {
            base += drift_dist.sample(&mut rng);
        }
        for &offset in &cycle {
            vals.push(base + offset + noise_dist.sample(&mut rng));
        }
    }
    log::info!("generated {} days from seed {}", cfg.n_days, cfg.seed);

    WeatherTable::from_flat(vals).context("failed to construct table")
}
