use super::{DistributionError, DistributionModel};
use crate::numerics;

#[derive(Clone, Copy, PartialEq, Debug)]
/// Uniform distribution over `[min, max]`.
pub struct Uniform {
    min_value: f64,
    max_value: f64,
}

impl Uniform {
    pub fn new(min_value: f64, max_value: f64) -> Result<Self, DistributionError> {
        if !min_value.is_finite() || !max_value.is_finite() || min_value >= max_value {
            return Err(DistributionError::InvalidInput(format!(
                "uniform support must satisfy min < max, got [{min_value}, {max_value}]"
            )));
        }
        Ok(Self {
            min_value,
            max_value,
        })
    }
}

impl DistributionModel for Uniform {
    fn sample_at(&self, u: f64) -> f64 {
        if u <= 0.0 {
            return self.min_value;
        }
        if u >= 1.0 {
            return self.max_value;
        }
        numerics::lerp(self.min_value, self.max_value, u)
    }

    fn min_value(&self) -> f64 {
        self.min_value
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }

    fn mean_value(&self) -> f64 {
        0.5 * (self.min_value + self.max_value)
    }

    fn clone_model(&self) -> Box<dyn DistributionModel> {
        Box::new(*self)
    }
}
