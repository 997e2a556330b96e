pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Population variance around `mean`.
pub fn variance(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / values.len() as f64
    }
}

/// Least-squares slope of `ys` over `xs`. `None` when the points are
/// degenerate (fewer than two, or all on the same x).
pub fn linear_slope(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let x_mean = mean(xs);
    let y_mean = mean(ys);

    let (num, den) = xs
        .iter()
        .zip(ys)
        .fold((0_f64, 0_f64), |(num, den), (x, y)| {
            let dx = x - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });

    if den.abs() < f64::EPSILON {
        return None;
    }

    let slope = num / den;
    slope.is_finite().then_some(slope)
}

/// Clamps to [0, 100] and rounds. Non-finite input has no score.
pub fn round_score(v: f64) -> Option<u8> {
    if !v.is_finite() {
        return None;
    }
    Some(v.round().clamp(0.0, 100.0) as u8)
}

/// Clamps to [0, 100] and truncates towards zero.
pub fn truncate_score(v: f64) -> Option<u8> {
    if !v.is_finite() {
        return None;
    }
    Some(v.clamp(0.0, 100.0) as u8)
}

pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
