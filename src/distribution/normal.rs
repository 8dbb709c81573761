use super::{DistributionError, DistributionModel};
use crate::numerics::{self, special};

#[derive(Clone, Copy, PartialEq, Debug)]
/// Normal distribution with mean μ and standard deviation σ, truncated to
/// `[min, max]`: draws invert the cumulative within the probability band the
/// support covers, and the reported mean is the truncated expectation.
pub struct Normal {
    min_value: f64,
    max_value: f64,
    μ: f64,
    σ: f64,
    /// Φ((min − μ)/σ) and Φ((max − μ)/σ).
    band: (f64, f64),
    mean_value: f64,
}

impl Normal {
    pub fn new(min_value: f64, max_value: f64, μ: f64, σ: f64) -> Result<Self, DistributionError> {
        if !min_value.is_finite() || !max_value.is_finite() || min_value >= max_value {
            return Err(DistributionError::InvalidInput(format!(
                "normal support must satisfy min < max, got [{min_value}, {max_value}]"
            )));
        }
        if !μ.is_finite() {
            return Err(DistributionError::InvalidInput(format!(
                "normal mean must be finite, got {μ}"
            )));
        }
        if !σ.is_finite() || σ <= 0.0 {
            return Err(DistributionError::InvalidInput(format!(
                "normal deviation must be positive, got {σ}"
            )));
        }
        let α = (min_value - μ) / σ;
        let β = (max_value - μ) / σ;
        let band = (special::normal_cdf(α), special::normal_cdf(β));
        if band.1 - band.0 <= f64::MIN_POSITIVE {
            // The support sits so deep in a tail that it carries no mass.
            return Err(DistributionError::DegenerateDistribution);
        }
        let mean_value =
            μ + σ * (special::normal_pdf(α) - special::normal_pdf(β)) / (band.1 - band.0);
        Ok(Self {
            min_value,
            max_value,
            μ,
            σ,
            band,
            mean_value,
        })
    }
}

impl DistributionModel for Normal {
    fn sample_at(&self, u: f64) -> f64 {
        if u <= 0.0 {
            return self.min_value;
        }
        if u >= 1.0 {
            return self.max_value;
        }
        let p = numerics::lerp(self.band.0, self.band.1, u);
        (self.μ + self.σ * special::normal_quantile(p)).clamp(self.min_value, self.max_value)
    }

    fn min_value(&self) -> f64 {
        self.min_value
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }

    fn mean_value(&self) -> f64 {
        self.mean_value
    }

    fn clone_model(&self) -> Box<dyn DistributionModel> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::super::{DistributionError, DistributionModel};
    use super::Normal;

    #[test]
    fn symmetric_truncation_keeps_the_mean() {
        let dist = Normal::new(-3.0, 3.0, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(dist.mean_value(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dist.sample_at(0.5), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn asymmetric_truncation_shifts_the_mean_inward() {
        // Keeping only the right half-support pushes the mean above μ.
        let dist = Normal::new(0.0, 6.0, 0.0, 1.0).unwrap();
        assert!(dist.mean_value() > 0.0);
        assert_abs_diff_eq!(dist.mean_value(), 0.797_884_560_8, epsilon = 1e-4);
    }

    #[test]
    fn support_lost_in_a_far_tail_is_degenerate() {
        assert!(matches!(
            Normal::new(60.0, 70.0, 0.0, 1.0),
            Err(DistributionError::DegenerateDistribution)
        ));
    }
}
