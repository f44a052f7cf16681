use crate::utils::check_num;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Run configuration.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the table comes from.
    pub source: SourceConfig,
    /// Query parameters.
    pub query: QueryConfig,
}

/// Origin of the weather table.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Readings written out in the configuration, one row per day.
    Inline { days: Vec<Vec<f32>> },
    /// Readings produced by the seeded generator.
    Synthetic(SynthConfig),
}

/// Synthetic table parameters.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Number of days to generate.
    pub n_days: usize,
    /// Seed of the random number generator.
    pub seed: u64,

    /// Base temperature of the first day.
    pub mean_temp: f32,
    /// Standard deviation of the day-to-day base temperature step.
    pub drift_std: f32,
    /// Peak-to-peak amplitude of the diurnal cycle.
    pub daily_swing: f32,
    /// Standard deviation of the noise on each reading.
    pub noise_std: f32,
}

/// Query parameters.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Number of trailing days used by the window queries.
    pub window: usize,
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents = fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.query.window, 1..10_000).context("invalid window")?;

        match &self.source {
            SourceConfig::Inline { days } => {
                if days.is_empty() {
                    bail!("inline source must have at least one day");
                }
            }
            SourceConfig::Synthetic(synth) => {
                synth.validate().context("invalid synthetic source")?;
                if self.query.window > synth.n_days {
                    bail!(
                        "window must not exceed the number of days ({}), but is {}",
                        synth.n_days,
                        self.query.window
                    );
                }
            }
        }

        Ok(())
    }
}

impl SynthConfig {
    fn validate(&self) -> Result<()> {
        check_num(self.n_days, 1..10_000).context("invalid number of days")?;
        check_num(self.mean_temp, -100.0..100.0).context("invalid mean temperature")?;
        check_num(self.drift_std, 0.0..100.0).context("invalid drift standard deviation")?;
        check_num(self.daily_swing, 0.0..200.0).context("invalid daily swing")?;
        check_num(self.noise_std, 0.0..100.0).context("invalid noise standard deviation")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYNTHETIC: &str = r#"
[source]
kind = "synthetic"
n_days = 14
seed = 7
mean_temp = 12.0
drift_std = 1.5
daily_swing = 8.0
noise_std = 0.5

[query]
window = 7
"#;

    const INLINE: &str = r#"
[source]
kind = "inline"
days = [
    [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
    [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0],
]

[query]
window = 2
"#;

    fn parse(contents: &str) -> Result<Config> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn parses_synthetic_source() {
        let config = parse(SYNTHETIC).unwrap();
        assert_eq!(config.query.window, 7);
        match config.source {
            SourceConfig::Synthetic(synth) => {
                assert_eq!(synth.n_days, 14);
                assert_eq!(synth.seed, 7);
            }
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn parses_inline_source() {
        let config = parse(INLINE).unwrap();
        match config.source {
            SourceConfig::Inline { days } => {
                assert_eq!(days.len(), 2);
                assert_eq!(days[1][0], 10.0);
            }
            other => panic!("unexpected source {other:?}"),
        }
    }

    #[test]
    fn rejects_window_past_synthetic_days() {
        let contents = SYNTHETIC.replace("window = 7", "window = 15");
        assert!(parse(&contents).is_err());
    }

    #[test]
    fn rejects_zero_window() {
        let contents = INLINE.replace("window = 2", "window = 0");
        assert!(parse(&contents).is_err());
    }

    #[test]
    fn rejects_negative_noise() {
        let contents = SYNTHETIC.replace("noise_std = 0.5", "noise_std = -0.5");
        assert!(parse(&contents).is_err());
    }

    #[test]
    fn rejects_out_of_range_mean_temp() {
        let contents = SYNTHETIC.replace("mean_temp = 12.0", "mean_temp = 150.0");
        assert!(parse(&contents).is_err());
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Config::from_file("does/not/exist.toml").unwrap_err();
        assert!(format!("{err:#}").contains("failed to read"));
    }
}
