#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;

use polydisperse::distribution::spec::DistributionSpec;
use polydisperse::distribution::DistributionModel;

const SAMPLE_COUNT: u32 = 100_000;
const HISTOGRAM_BINS: usize = 40;
const HISTOGRAM_WIDTH: usize = 60;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: polydisperse <spec.json>")?;
    let spec: DistributionSpec = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    let model = spec.build()?;

    println!("min  = {:.6e}", model.min_value());
    println!("max  = {:.6e}", model.max_value());
    println!("mean = {:.6e}", model.mean_value());

    let mut rng = StdRng::from_entropy();
    let samples = (0..SAMPLE_COUNT)
        .map(|_| model.sample(&mut rng))
        .collect_vec();
    let sampled_mean = samples.iter().sum::<f64>() / f64::from(SAMPLE_COUNT);
    println!("mean of {SAMPLE_COUNT} draws = {sampled_mean:.6e}");

    let span = model.max_value() - model.min_value();
    if span > 0.0 {
        println!();
        let mut bins = [0_u32; HISTOGRAM_BINS];
        for &x in &samples {
            let i = ((x - model.min_value()) / span * HISTOGRAM_BINS as f64) as usize;
            bins[i.min(HISTOGRAM_BINS - 1)] += 1;
        }
        let peak = bins.iter().copied().max().unwrap_or(1).max(1) as usize;
        for (i, &count) in bins.iter().enumerate() {
            let edge = model.min_value() + span * i as f64 / HISTOGRAM_BINS as f64;
            let bar = "#".repeat(count as usize * HISTOGRAM_WIDTH / peak);
            println!("{edge:>13.4e} | {bar}");
        }
    }
    Ok(())
}
