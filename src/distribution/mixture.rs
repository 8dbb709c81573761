use itertools::Itertools;

use super::{DistributionError, DistributionModel};

#[derive(Clone, Debug)]
/// A weighted combination of arbitrary component models.
///
/// One uniform draw serves double duty: it picks the component from the
/// normalized cumulative weights, then is rescaled to `[0, 1)` within that
/// weight band before being handed on, so a mixture consumes exactly one draw
/// per sample like every other model.
pub struct Mixture {
    /// Components ordered by the start of their support.
    components: Vec<Box<dyn DistributionModel>>,
    /// Cumulative normalized component weights; the last entry is exactly 1.
    bands: Vec<f64>,
    min_value: f64,
    max_value: f64,
    mean_value: f64,
}

impl Mixture {
    pub fn new(
        weighted: Vec<(f64, Box<dyn DistributionModel>)>,
    ) -> Result<Self, DistributionError> {
        if weighted.is_empty() {
            return Err(DistributionError::InvalidInput(
                "a mixture needs at least one component".to_owned(),
            ));
        }
        if weighted.iter().any(|&(w, _)| !w.is_finite() || w < 0.0) {
            return Err(DistributionError::InvalidInput(
                "mixture weights must be finite and non-negative".to_owned(),
            ));
        }
        let total: f64 = weighted.iter().map(|&(w, _)| w).sum();
        if !total.is_finite() {
            return Err(DistributionError::InvalidInput(
                "total mixture weight is not finite".to_owned(),
            ));
        }
        if total <= f64::MIN_POSITIVE {
            return Err(DistributionError::DegenerateDistribution);
        }
        let mut weighted = weighted;
        // A zero-weight component can never be drawn from; drop it up front so
        // the reported support is the support actually sampled.
        weighted.retain(|&(w, _)| w > 0.0);
        weighted.sort_by(|a, b| a.1.min_value().total_cmp(&b.1.min_value()));

        let mut acc = 0.0;
        let mut bands = Vec::with_capacity(weighted.len());
        for &(w, _) in &weighted {
            acc += w / total;
            bands.push(acc);
        }
        // Floating summation can land shy of 1.
        bands[weighted.len() - 1] = 1.0;

        let min_value = weighted
            .iter()
            .map(|(_, m)| m.min_value())
            .fold(f64::INFINITY, f64::min);
        let max_value = weighted
            .iter()
            .map(|(_, m)| m.max_value())
            .fold(f64::NEG_INFINITY, f64::max);
        let mean_value = weighted
            .iter()
            .map(|&(w, ref m)| w / total * m.mean_value())
            .sum();
        let components = weighted.into_iter().map(|(_, m)| m).collect_vec();
        Ok(Self {
            components,
            bands,
            min_value,
            max_value,
            mean_value,
        })
    }

    /// Iterate over the component models.
    pub fn components(&self) -> impl Iterator<Item = &dyn DistributionModel> {
        self.components.iter().map(|model| &**model)
    }
}

impl DistributionModel for Mixture {
    fn sample_at(&self, u: f64) -> f64 {
        if u <= 0.0 {
            return self.min_value;
        }
        if u >= 1.0 {
            return self.max_value;
        }
        // First band whose cumulative weight exceeds u; bands end at exactly
        // 1, so the search cannot run off the table.
        let k = self.bands.partition_point(|&b| b <= u);
        let lo = if k == 0 { 0.0 } else { self.bands[k - 1] };
        let t = (u - lo) / (self.bands[k] - lo);
        self.components[k].sample_at(t)
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
        Box::new(self.clone())
    }
}
