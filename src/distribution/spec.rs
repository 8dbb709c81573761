use serde::Deserialize;

use super::exponential::Exponential;
use super::fixed_value::FixedValue;
use super::general::{General, TableMode};
use super::mixture::Mixture;
use super::normal::Normal;
use super::rosin_rammler::RosinRammler;
use super::uniform::Uniform;
use super::{DistributionError, DistributionModel};

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
/// A declarative description of a distribution model, deserializable from any
/// serde format. [`build`](Self::build) turns it into a ready-to-sample model
/// and runs the full validation; the description only carries parameters, it
/// does not check them.
pub enum DistributionSpec {
    #[serde(rename_all = "camelCase")]
    FixedValue { value: f64 },
    #[serde(rename_all = "camelCase")]
    Uniform { min_value: f64, max_value: f64 },
    #[serde(rename_all = "camelCase")]
    Normal {
        min_value: f64,
        max_value: f64,
        mean: f64,
        deviation: f64,
    },
    #[serde(rename_all = "camelCase")]
    Exponential {
        min_value: f64,
        max_value: f64,
        rate: f64,
    },
    #[serde(rename_all = "camelCase")]
    RosinRammler {
        min_value: f64,
        max_value: f64,
        scale: f64,
        shape: f64,
    },
    #[serde(rename_all = "camelCase")]
    General {
        distribution: Vec<(f64, f64)>,
        #[serde(default)]
        cumulative: bool,
    },
    #[serde(rename_all = "camelCase")]
    Mixture { components: Vec<MixtureComponentSpec> },
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MixtureComponentSpec {
    pub weight: f64,
    pub model: DistributionSpec,
}

impl DistributionSpec {
    /// Build the described model behind its owning handle.
    pub fn build(&self) -> Result<Box<dyn DistributionModel>, DistributionError> {
        Ok(match *self {
            Self::FixedValue { value } => Box::new(FixedValue::new(value)?),
            Self::Uniform {
                min_value,
                max_value,
            } => Box::new(Uniform::new(min_value, max_value)?),
            Self::Normal {
                min_value,
                max_value,
                mean,
                deviation,
            } => Box::new(Normal::new(min_value, max_value, mean, deviation)?),
            Self::Exponential {
                min_value,
                max_value,
                rate,
            } => Box::new(Exponential::new(min_value, max_value, rate)?),
            Self::RosinRammler {
                min_value,
                max_value,
                scale,
                shape,
            } => Box::new(RosinRammler::new(min_value, max_value, scale, shape)?),
            Self::General {
                ref distribution,
                cumulative,
            } => {
                let mode = if cumulative {
                    TableMode::Cumulative
                } else {
                    TableMode::Density
                };
                Box::new(General::new(distribution.clone(), mode)?)
            }
            Self::Mixture { ref components } => {
                let weighted = components
                    .iter()
                    .map(|component| Ok((component.weight, component.model.build()?)))
                    .collect::<Result<Vec<_>, DistributionError>>()?;
                Box::new(Mixture::new(weighted)?)
            }
        })
    }
}
