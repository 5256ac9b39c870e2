//! Summary statistics over observation series

/// Arithmetic mean of the series, `None` when it is empty
pub fn mean(series: &[f64]) -> Option<f64> {
    if series.is_empty() {
        return None;
    }
    Some(series.iter().sum::<f64>() / series.len() as f64)
}

/// Ordinary least-squares slope of the values against their 0-based index.
///
/// Uses the closed form `(n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)`.
/// Returns `None` for fewer than two points, where no slope exists.
pub fn ols_slope(series: &[f64]) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }

    let n = series.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for (i, &y) in series.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    // n >= 2 keeps the denominator strictly positive
    Some((n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x))
}
