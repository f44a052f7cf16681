//! Descriptive statistics over a table of daily weather measurements.
//!
//! The core is [`WeatherTable`]: an immutable `(num_days, 10)` table with
//! per-day reductions, trend and window queries, and nearest-day lookup.
//! The remaining modules back the `wxstat` command line tool.

pub mod analysis;
pub mod config;
pub mod error;
pub mod manager;
pub mod stats;
pub mod synth;
pub mod table;
mod utils;

pub use error::WeatherError;
pub use table::{READINGS_PER_DAY, WeatherTable, weekday_of};
