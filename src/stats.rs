//! Reductions over a single day of readings.
//!
//! Ties always resolve to the lowest index. NaN ranks above every other
//! value, so it propagates through min, max and arg reductions.

pub fn compute_mean<'a, I>(vals: I) -> f32
where
    I: IntoIterator<Item = &'a f32>,
{
    let mut n_vals = 0_usize;
    let mut sum = 0.0;
    for &val in vals {
        sum += val;
        n_vals += 1;
    }
    if n_vals == 0 {
        return f32::NAN;
    }
    sum / n_vals as f32
}

/// Smaller of two values, NaN if either is NaN.
pub fn nan_min(acc: f32, val: f32) -> f32 {
    if val.is_nan() || val < acc { val } else { acc }
}

/// Larger of two values, NaN if either is NaN.
pub fn nan_max(acc: f32, val: f32) -> f32 {
    if val.is_nan() || val > acc { val } else { acc }
}

/// Index of the first maximum of `key` over `vals`, or `None` if `vals` is empty.
///
/// The first NaN score wins over any number.
pub fn first_argmax<I, F>(vals: I, key: F) -> Option<usize>
where
    I: IntoIterator<Item = f32>,
    F: Fn(f32) -> f32,
{
    let mut best: Option<(usize, f32)> = None;
    for (idx, val) in vals.into_iter().enumerate() {
        let score = key(val);
        let replace = match best {
            None => true,
            Some((_, best_score)) => {
                !best_score.is_nan() && (score.is_nan() || score > best_score)
            }
        };
        if replace {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Index of the first minimum of `vals`, or `None` if `vals` is empty.
pub fn first_argmin<I>(vals: I) -> Option<usize>
where
    I: IntoIterator<Item = f32>,
{
    first_argmax(vals, |val| -val)
}

/// Sum of absolute elementwise differences.
pub fn l1_distance<'a, A, B>(a: A, b: B) -> f32
where
    A: IntoIterator<Item = &'a f32>,
    B: IntoIterator<Item = &'a f32>,
{
    a.into_iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
