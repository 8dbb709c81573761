pub mod exponential;
pub mod fixed_value;
pub mod general;
pub mod mixture;
pub mod normal;
pub mod rosin_rammler;
pub mod spec;
pub mod uniform;

use std::fmt::Debug;

use rand::{Rng, RngCore};
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum DistributionError {
    /// Malformed table or parameters; construction cannot proceed.
    #[error("invalid distribution input: {0}")]
    InvalidInput(String),
    /// The distribution carries no probability mass to normalize.
    #[error("distribution has zero total probability mass")]
    DegenerateDistribution,
}

/// A one-dimensional particle size distribution.
///
/// Models are immutable once constructed. Sampling reads the model and draws
/// exactly one uniform variate from the caller's random source, so a built
/// model can be shared between threads as long as each caller brings its own
/// generator.
pub trait DistributionModel: Debug + Send + Sync {
    /// Invert the cumulative distribution at probability `u`.
    ///
    /// Draws at or below 0 clamp to [`min_value`](Self::min_value), and draws
    /// at or above 1 clamp to [`max_value`](Self::max_value); a constructed
    /// model never fails here.
    fn sample_at(&self, u: f64) -> f64;

    /// The smallest value the model can produce.
    fn min_value(&self) -> f64;

    /// The largest value the model can produce.
    fn max_value(&self) -> f64;

    /// The expectation of the distribution, computed at construction.
    fn mean_value(&self) -> f64;

    /// Copy the model into a fresh owning handle.
    fn clone_model(&self) -> Box<dyn DistributionModel>;

    /// Draw one sample using the caller's random source.
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        self.sample_at(rng.gen())
    }
}

impl Clone for Box<dyn DistributionModel> {
    fn clone(&self) -> Self {
        self.clone_model()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::exponential::Exponential;
    use super::general::{General, TableMode};
    use super::mixture::Mixture;
    use super::normal::Normal;
    use super::rosin_rammler::RosinRammler;
    use super::uniform::Uniform;
    use super::DistributionModel;

    const TRIANGLE: [(f64, f64); 3] = [(0., 0.), (1., 2.), (2., 0.)];

    fn family() -> Vec<Box<dyn DistributionModel>> {
        vec![
            Box::new(General::new(TRIANGLE.to_vec(), TableMode::Density).unwrap()),
            Box::new(Uniform::new(2.0, 8.0).unwrap()),
            Box::new(Normal::new(1e-6, 9e-6, 4e-6, 2e-6).unwrap()),
            Box::new(Exponential::new(0.0, 5.0, 1.5).unwrap()),
            Box::new(RosinRammler::new(10e-6, 200e-6, 80e-6, 2.5).unwrap()),
            Box::new(
                Mixture::new(vec![
                    (1.0, Box::new(Uniform::new(0.0, 1.0).unwrap())),
                    (3.0, Box::new(Uniform::new(2.0, 4.0).unwrap())),
                ])
                .unwrap(),
            ),
        ]
    }

    fn monte_carlo_mean(model: &dyn DistributionModel, n: u32, seed: u64) -> f64 {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| model.sample(&mut rng)).sum::<f64>() / f64::from(n)
    }

    #[test]
    fn sampled_mean_matches_analytic_mean() {
        for (i, model) in family().iter().enumerate() {
            let sampled = monte_carlo_mean(model.as_ref(), 10_000, 0xB0B + i as u64);
            let analytic = model.mean_value();
            assert!(
                ((sampled - analytic) / analytic).abs() < 0.05,
                "model {i}: sampled mean {sampled}, analytic mean {analytic}"
            );
        }
    }

    #[test]
    fn samples_stay_on_support() {
        for model in family() {
            for i in 0..=1000 {
                let x = model.sample_at(f64::from(i) / 1000.);
                assert!(
                    (model.min_value()..=model.max_value()).contains(&x),
                    "{model:?} left its support at u = {}",
                    f64::from(i) / 1000.
                );
            }
        }
    }

    #[test]
    fn boundary_draws_hit_the_support_ends() {
        for model in family() {
            assert_eq!(model.sample_at(0.0), model.min_value());
            assert_eq!(model.sample_at(1.0), model.max_value());
        }
    }

    #[test]
    fn cloned_model_samples_identically() {
        for model in family() {
            let copy = model.clone();
            for i in 0..=100 {
                let u = f64::from(i) / 100.;
                assert_eq!(model.sample_at(u), copy.sample_at(u));
            }
        }
    }
}
