use crate::helpers::stats::{mean, variance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Values are compared as-is.
    Linear,
    /// Values are compared as `ln(v)`; ratio-like biometrics are roughly log-normal.
    Log,
}

/// Personal reference distribution that "today" is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub domain: Domain,
    pub mean: f64,
    pub std_dev: f64,
    /// `max(std_dev, floor)`, the divisor for z-scores.
    pub normal_range: f64,
}

impl Baseline {
    /// Range floor for log-domain HRV baselines.
    pub const LOG_RANGE_FLOOR: f64 = 0.05;

    /// Range floor for linear RHR baselines, in bpm.
    pub const RHR_RANGE_FLOOR: f64 = 1.0;

    /// Fits a log-domain baseline over the positive, finite values.
    pub fn log(values: &[f64], floor: f64) -> Option<Self> {
        let logs = values
            .iter()
            .filter(|v| v.is_finite() && **v > 0.0)
            .map(|v| v.ln())
            .collect::<Vec<_>>();
        Self::fit(Domain::Log, &logs, floor)
    }

    /// Fits a linear baseline over the finite values.
    pub fn linear(values: &[f64], floor: f64) -> Option<Self> {
        let values = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect::<Vec<_>>();
        Self::fit(Domain::Linear, &values, floor)
    }

    fn fit(domain: Domain, values: &[f64], floor: f64) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mean = mean(values);
        let variance = variance(values, mean);
        if !mean.is_finite() || !variance.is_finite() {
            debug!("baseline variance is not finite, no baseline");
            return None;
        }

        let std_dev = variance.sqrt();
        Some(Self {
            domain,
            mean,
            std_dev,
            normal_range: std_dev.max(floor),
        })
    }

    /// Distance of `value` from the baseline in normal ranges.
    pub fn z_score(&self, value: f64) -> Option<f64> {
        let value = match self.domain {
            Domain::Linear => value,
            Domain::Log if value > 0.0 => value.ln(),
            Domain::Log => return None,
        };

        let z = (value - self.mean) / self.normal_range;
        z.is_finite().then_some(z)
    }
}
