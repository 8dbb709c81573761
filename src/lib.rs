#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

//! One-dimensional particle size distribution models for Lagrangian spray
//! simulation: a table-driven general model plus the usual parametric family
//! (fixed value, uniform, truncated normal/exponential, Rosin–Rammler,
//! mixtures), all sampled by inverse transform from an injected random source.

pub mod distribution;
pub mod numerics;
