use crate::error::WeatherError;
use anyhow::{Result, bail};
use std::{fmt::Debug, ops::RangeBounds};

pub fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

/// Ensure `k` selects a non-empty trailing window of a table with `num_days` rows.
pub fn check_window(k: usize, num_days: usize) -> Result<(), WeatherError> {
    if !(1..=num_days).contains(&k) {
        return Err(WeatherError::Range { k, num_days });
    }
    Ok(())
}

pub fn check_len(len: usize, exp_len: usize, what: &str) -> Result<(), WeatherError> {
    if len != exp_len {
        return Err(WeatherError::Shape(format!(
            "{what} length must be {exp_len}, but is {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_num_rejects_out_of_range() {
        assert!(check_num(5, 1..10).is_ok());
        assert!(check_num(10, 1..10).is_err());
        assert!(check_num(0.5, 0.0..1.0).is_ok());
        assert!(check_num(-0.1, 0.0..1.0).is_err());
    }

    #[test]
    fn check_window_bounds() {
        assert!(check_window(1, 3).is_ok());
        assert!(check_window(3, 3).is_ok());
        assert_eq!(
            check_window(0, 3),
            Err(WeatherError::Range { k: 0, num_days: 3 })
        );
        assert_eq!(
            check_window(4, 3),
            Err(WeatherError::Range { k: 4, num_days: 3 })
        );
    }

    #[test]
    fn check_len_reports_shape() {
        assert!(check_len(10, 10, "readings").is_ok());
        let err = check_len(9, 10, "readings").unwrap_err();
        assert!(matches!(err, WeatherError::Shape(msg) if msg.contains("but is 9")));
    }
}
