use super::{DistributionError, DistributionModel};

#[derive(Clone, Copy, PartialEq, Debug)]
/// Degenerate distribution: every draw returns the same value.
pub struct FixedValue {
    value: f64,
}

impl FixedValue {
    pub fn new(value: f64) -> Result<Self, DistributionError> {
        if !value.is_finite() {
            return Err(DistributionError::InvalidInput(format!(
                "fixed value must be finite, got {value}"
            )));
        }
        Ok(Self { value })
    }
}

impl DistributionModel for FixedValue {
    fn sample_at(&self, _u: f64) -> f64 {
        self.value
    }

    fn min_value(&self) -> f64 {
        self.value
    }

    fn max_value(&self) -> f64 {
        self.value
    }

    fn mean_value(&self) -> f64 {
        self.value
    }

    fn clone_model(&self) -> Box<dyn DistributionModel> {
        Box::new(*self)
    }
}
