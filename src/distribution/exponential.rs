use super::{DistributionError, DistributionModel};

#[derive(Clone, Copy, PartialEq, Debug)]
/// Exponential distribution with rate λ, shifted to start at `min` and
/// truncated at `max`. The tail mass beyond `max` is folded back into the
/// inverse cumulative, so every draw lands on the support.
pub struct Exponential {
    min_value: f64,
    max_value: f64,
    λ: f64,
    /// Untruncated probability mass below `max`: 1 − exp(−λ·(max − min)).
    mass: f64,
}

impl Exponential {
    pub fn new(min_value: f64, max_value: f64, λ: f64) -> Result<Self, DistributionError> {
        if !min_value.is_finite() || !max_value.is_finite() || min_value >= max_value {
            return Err(DistributionError::InvalidInput(format!(
                "exponential support must satisfy min < max, got [{min_value}, {max_value}]"
            )));
        }
        if !λ.is_finite() || λ <= 0.0 {
            return Err(DistributionError::InvalidInput(format!(
                "exponential rate must be positive, got {λ}"
            )));
        }
        let mass = -(-λ * (max_value - min_value)).exp_m1();
        if mass <= f64::MIN_POSITIVE {
            return Err(DistributionError::DegenerateDistribution);
        }
        Ok(Self {
            min_value,
            max_value,
            λ,
            mass,
        })
    }
}

impl DistributionModel for Exponential {
    fn sample_at(&self, u: f64) -> f64 {
        if u <= 0.0 {
            return self.min_value;
        }
        if u >= 1.0 {
            return self.max_value;
        }
        let x = self.min_value - (-u * self.mass).ln_1p() / self.λ;
        x.min(self.max_value)
    }

    fn min_value(&self) -> f64 {
        self.min_value
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }

    fn mean_value(&self) -> f64 {
        let range = self.max_value - self.min_value;
        self.min_value + self.λ.recip() - range * (-self.λ * range).exp() / self.mass
    }

    fn clone_model(&self) -> Box<dyn DistributionModel> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::super::DistributionModel;
    use super::Exponential;

    #[test]
    fn mean_approaches_the_untruncated_mean_on_a_wide_support() {
        let dist = Exponential::new(0.0, 1e3, 2.0).unwrap();
        assert_abs_diff_eq!(dist.mean_value(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn truncation_renormalizes_the_inverse_cumulative() {
        // On [0, max], the median draw inverts u·mass, not u.
        let dist = Exponential::new(0.0, 1.0, 1.0).unwrap();
        let mass = -(-1.0_f64).exp_m1();
        assert_abs_diff_eq!(
            dist.sample_at(0.5),
            -(-0.5 * mass).ln_1p(),
            epsilon = 1e-12
        );
        assert!(dist.sample_at(1.0 - 1e-12) <= 1.0);
    }
}
