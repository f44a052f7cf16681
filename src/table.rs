//! Daily weather measurement table.

use crate::error::WeatherError;
use crate::stats::{compute_mean, first_argmax, first_argmin, l1_distance, nan_max, nan_min};
use crate::utils::{check_len, check_window};
use chrono::Weekday;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, s};

/// Number of measurements recorded per day.
pub const READINGS_PER_DAY: usize = 10;

/// Table of daily weather measurements.
///
/// Holds a `(num_days, 10)` array where each row is one day and each column
/// one reading. The table is immutable after construction: every query is a
/// pure reduction over the stored readings.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherTable {
    data: Array2<f32>,
}

impl WeatherTable {
    /// Build a table from a sequence of rows.
    ///
    /// All rows must have the same length. The readings are flattened in row
    /// order and reshaped into days of [`READINGS_PER_DAY`] readings, so the
    /// total count must be a positive multiple of 10.
    ///
    /// # Errors
    /// Returns [`WeatherError::Shape`] on empty or ragged input, or when the
    /// readings do not split into whole days.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, WeatherError> {
        let first = rows
            .first()
            .ok_or_else(|| WeatherError::Shape("input has no rows".into()))?;
        let row_len = first.as_ref().len();

        let mut vals = Vec::with_capacity(rows.len() * row_len);
        for (i_row, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != row_len {
                return Err(WeatherError::Shape(format!(
                    "row {i_row} has {} values, but row 0 has {row_len}",
                    row.len()
                )));
            }
            vals.extend_from_slice(row);
        }

        Self::from_flat(vals)
    }

    /// Build a table from a flat sequence of readings, 10 per day.
    ///
    /// # Errors
    /// Returns [`WeatherError::Shape`] when `vals` is empty or its length is
    /// not a multiple of 10.
    pub fn from_flat(vals: Vec<f32>) -> Result<Self, WeatherError> {
        let n_vals = vals.len();
        if n_vals == 0 {
            return Err(WeatherError::Shape("input has no readings".into()));
        }
        if n_vals % READINGS_PER_DAY != 0 {
            return Err(WeatherError::Shape(format!(
                "{n_vals} readings do not split into days of {READINGS_PER_DAY}"
            )));
        }
        let num_days = n_vals / READINGS_PER_DAY;
        let data = Array2::from_shape_vec((num_days, READINGS_PER_DAY), vals)
            .map_err(|err| WeatherError::Shape(err.to_string()))?;
        log::debug!("constructed table with {num_days} days");

        Ok(Self { data })
    }

    /// Build a table from any 2-D array, reshaping it in logical row order.
    ///
    /// # Errors
    /// Returns [`WeatherError::Shape`] when the array is empty or its element
    /// count is not a multiple of 10.
    pub fn from_array(data: Array2<f32>) -> Result<Self, WeatherError> {
        Self::from_flat(data.iter().copied().collect())
    }

    pub fn num_days(&self) -> usize {
        self.data.nrows()
    }

    pub fn data(&self) -> ArrayView2<'_, f32> {
        self.data.view()
    }

    /// Readings of day `idx`, or `None` if it is past the end of the table.
    pub fn day(&self, idx: usize) -> Option<ArrayView1<'_, f32>> {
        (idx < self.num_days()).then(|| self.data.row(idx))
    }

    /// Mean of each day's readings.
    pub fn daily_means(&self) -> Array1<f32> {
        daily_means(self.data.view())
    }

    /// Minimum and maximum reading of each day.
    pub fn find_min_and_max_per_day(&self) -> (Array1<f32>, Array1<f32>) {
        (daily_min(self.data.view()), daily_max(self.data.view()))
    }

    /// Smallest day-over-day change of the daily mean.
    ///
    /// Usually negative (a drop), but positive when the daily mean never
    /// decreases.
    ///
    /// # Errors
    /// Returns [`WeatherError::InsufficientData`] with fewer than 2 days.
    pub fn find_the_largest_drop(&self) -> Result<f32, WeatherError> {
        let num_days = self.num_days();
        if num_days < 2 {
            return Err(WeatherError::InsufficientData {
                required: 2,
                available: num_days,
            });
        }

        let means = self.daily_means();
        let drop = means
            .windows(2)
            .into_iter()
            .map(|pair| pair[1] - pair[0])
            .fold(f32::INFINITY, nan_min);
        Ok(drop)
    }

    /// For each day, the reading farthest from that day's mean.
    pub fn find_the_most_extreme_day(&self) -> Array1<f32> {
        self.data.map_axis(Axis(1), |day| {
            let mean = compute_mean(day.iter());
            let idx = first_argmax(day.iter().copied(), |val| (val - mean).abs()).unwrap_or(0);
            day[idx]
        })
    }

    /// Maximum reading of each of the last `k` days, oldest first.
    ///
    /// # Errors
    /// Returns [`WeatherError::Range`] unless `1 <= k <= num_days`.
    pub fn max_last_k_days(&self, k: usize) -> Result<Array1<f32>, WeatherError> {
        let window = self.last_k_days(k)?;
        Ok(daily_max(window))
    }

    /// Forecast the next day as the average of the last `k` daily means.
    ///
    /// # Errors
    /// Returns [`WeatherError::Range`] unless `1 <= k <= num_days`.
    pub fn predict_temperature(&self, k: usize) -> Result<f32, WeatherError> {
        let window = self.last_k_days(k)?;
        Ok(compute_mean(daily_means(window).iter()))
    }

    /// Index of the day whose readings are closest to `readings` in L1 distance.
    ///
    /// Index 0 is the first day of the table; see [`weekday_of`]. Exact ties
    /// resolve to the earliest day.
    ///
    /// # Errors
    /// Returns [`WeatherError::Shape`] unless `readings` holds exactly 10
    /// values.
    pub fn what_day_is_this_from(&self, readings: &[f32]) -> Result<usize, WeatherError> {
        check_len(readings.len(), READINGS_PER_DAY, "readings")?;

        let dists = self
            .data
            .outer_iter()
            .map(|day| l1_distance(day.iter(), readings));
        let idx = first_argmin(dists).unwrap_or(0);
        log::debug!("closest day is {idx}");
        Ok(idx)
    }

    fn last_k_days(&self, k: usize) -> Result<ArrayView2<'_, f32>, WeatherError> {
        let num_days = self.num_days();
        check_window(k, num_days)?;
        log::debug!("selecting days {}..{num_days}", num_days - k);
        Ok(self.data.slice(s![num_days - k.., ..]))
    }
}

/// Weekday of day `idx`, counting from a Monday at index 0.
pub fn weekday_of(idx: usize) -> Weekday {
    // idx % 7 always maps to a weekday.
    Weekday::try_from((idx % 7) as u8).unwrap_or(Weekday::Mon)
}

fn daily_means(days: ArrayView2<f32>) -> Array1<f32> {
    days.map_axis(Axis(1), |day| compute_mean(day.iter()))
}

fn daily_min(days: ArrayView2<f32>) -> Array1<f32> {
    days.map_axis(Axis(1), |day| day.fold(f32::INFINITY, |acc, &val| nan_min(acc, val)))
}

fn daily_max(days: ArrayView2<f32>) -> Array1<f32> {
    days.map_axis(Axis(1), |day| {
        day.fold(f32::NEG_INFINITY, |acc, &val| nan_max(acc, val))
    })
}
