use itertools::Itertools;

use super::{DistributionError, DistributionModel};
use crate::numerics;

/// How the `y` column of a distribution table is interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TableMode {
    /// `y` values sample a probability density function at each `x`.
    Density,
    /// `y` values sample a cumulative distribution function at each `x`.
    Cumulative,
}

#[derive(Clone, PartialEq, Debug)]
/// A distribution specified as (x, y) pairs, with the function taken to be
/// linear between points and `y` read per [`TableMode`]. The table is
/// normalized at construction, whichever way it was specified.
pub struct General {
    /// The (x, f(x)) knots of the table, strictly increasing in x.
    xy: Vec<(f64, f64)>,
    /// Normalized cumulative probability at each knot; starts at 0, ends at 1.
    cdf: Vec<f64>,
    min_value: f64,
    max_value: f64,
    mean_value: f64,
}

impl General {
    pub fn new(xy: Vec<(f64, f64)>, mode: TableMode) -> Result<Self, DistributionError> {
        if xy.len() < 2 {
            return Err(DistributionError::InvalidInput(format!(
                "a distribution table needs at least two points, got {}",
                xy.len()
            )));
        }
        if xy.iter().any(|&(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(DistributionError::InvalidInput(
                "table entries must be finite".to_owned(),
            ));
        }
        if !xy.iter().tuple_windows().all(|(a, b)| a.0 < b.0) {
            return Err(DistributionError::InvalidInput(
                "table x values must be strictly increasing".to_owned(),
            ));
        }
        match mode {
            TableMode::Density => {
                if xy.iter().any(|&(_, y)| y < 0.0) {
                    return Err(DistributionError::InvalidInput(
                        "a density cannot be negative".to_owned(),
                    ));
                }
            }
            TableMode::Cumulative => {
                // Normalization rescales but never shifts, so the table must
                // already start at zero.
                if xy[0].1 != 0.0 {
                    return Err(DistributionError::InvalidInput(
                        "a cumulative table must start at zero".to_owned(),
                    ));
                }
                if !xy.iter().tuple_windows().all(|(a, b)| b.1 >= a.1) {
                    return Err(DistributionError::InvalidInput(
                        "cumulative values must be non-decreasing".to_owned(),
                    ));
                }
            }
        }

        let mut cdf = match mode {
            TableMode::Density => {
                // Trapezoidal prefix sum of the piecewise-linear density.
                let mut cdf = Vec::with_capacity(xy.len());
                cdf.push(0.0);
                let mut acc = 0.0;
                for (&(x0, y0), &(x1, y1)) in xy.iter().tuple_windows() {
                    acc += 0.5 * (y0 + y1) * (x1 - x0);
                    cdf.push(acc);
                }
                cdf
            }
            TableMode::Cumulative => xy.iter().map(|&(_, y)| y).collect_vec(),
        };
        let total = cdf[cdf.len() - 1];
        if !total.is_finite() {
            return Err(DistributionError::InvalidInput(
                "total probability mass is not finite".to_owned(),
            ));
        }
        if total <= f64::MIN_POSITIVE {
            return Err(DistributionError::DegenerateDistribution);
        }
        for c in &mut cdf {
            *c /= total;
        }

        let mean_value = match mode {
            TableMode::Density => {
                // First moment of a linear segment:
                // ∫ x·y(x) dx = Δx·(y₀(2x₀ + x₁) + y₁(x₀ + 2x₁))/6.
                let moment: f64 = xy
                    .iter()
                    .tuple_windows()
                    .map(|(&(x0, y0), &(x1, y1))| {
                        (x1 - x0) * (y0 * (2.0 * x0 + x1) + y1 * (x0 + 2.0 * x1)) / 6.0
                    })
                    .sum();
                moment / total
            }
            TableMode::Cumulative => {
                // The effective density is constant across each segment, so a
                // segment contributes its probability mass at its midpoint.
                xy.iter()
                    .tuple_windows()
                    .zip(cdf.iter().tuple_windows())
                    .map(|((&(x0, _), &(x1, _)), (&c0, &c1))| (c1 - c0) * 0.5 * (x0 + x1))
                    .sum()
            }
        };

        let min_value = xy[0].0;
        let max_value = xy[xy.len() - 1].0;
        Ok(Self {
            xy,
            cdf,
            min_value,
            max_value,
            mean_value,
        })
    }
}

impl DistributionModel for General {
    fn sample_at(&self, u: f64) -> f64 {
        if u <= 0.0 {
            return self.min_value;
        }
        if u >= 1.0 {
            return self.max_value;
        }
        // First knot whose cumulative value exceeds u; the bracketing segment
        // is [hi − 1, hi]. cdf[0] = 0 < u, so hi ≥ 1.
        let hi = self.cdf.partition_point(|&c| c <= u);
        if hi == self.cdf.len() {
            return self.max_value;
        }
        let lo = hi - 1;
        let span = self.cdf[hi] - self.cdf[lo];
        if span <= 0.0 {
            // A zero-width segment concentrates its mass on the left knot.
            return self.xy[lo].0;
        }
        numerics::lerp(self.xy[lo].0, self.xy[hi].0, (u - self.cdf[lo]) / span)
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
