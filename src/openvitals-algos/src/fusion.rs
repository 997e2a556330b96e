use crate::helpers::stats::round_score;

/// Weighted mean over the components that are present. Weight of missing
/// components is redistributed proportionally, so a single component
/// passes through unchanged. `None` when nothing usable is given.
pub fn fuse(components: &[(u8, f64)]) -> Option<u8> {
    let usable = components
        .iter()
        .filter(|(_, weight)| weight.is_finite() && *weight > 0.0);

    let (sum, total_weight) = usable.fold((0.0, 0.0), |(sum, total), (value, weight)| {
        (sum + f64::from(*value) * weight, total + weight)
    });

    if total_weight <= 0.0 {
        return None;
    }

    round_score(sum / total_weight)
}
