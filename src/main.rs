#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(clippy::pedantic)]
#![allow(clippy::cast_precision_loss, clippy::wildcard_imports)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use range_primitive::*;
use serde::{Deserialize, Serialize};

#[macro_use]
extern crate log;

//
// Args
//

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed of the sampler used for random draws.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Random draws per range.
    #[arg(long, default_value_t = 3)]
    samples: u32,

    /// RON file with the ranges to demonstrate.
    #[arg(long)]
    ranges: Option<PathBuf>,

    /// Write the ranges in use to this RON file.
    #[arg(long)]
    write_ranges: Option<PathBuf>,
}

//
// Ranges
//

#[derive(Serialize, Deserialize, Debug)]
struct DemoRanges {
    int: IntRange,
    float: FloatRange,
    vec2f: Vec2fRange,
    vec2i: Vec2iRange,
    vec3f: Vec3fRange,
    vec3i: Vec3iRange,
}

impl Default for DemoRanges {
    fn default() -> Self {
        Self {
            int: Range::new(12, 168),
            float: Range::new(99.5, -5.5),
            vec2f: Range::new(vector![-10.0, -10.0], vector![10.0, 10.0]),
            vec2i: Range::new(vector![10, -100], vector![100, 100]),
            vec3f: Range::new(vector![1.0, 100.0, 0.0], vector![99.5, 100.0, -1.0]),
            vec3i: Range::new(vector![-10, 100, 1], vector![1000, 100, 50]),
        }
    }
}

//
// Main
//

fn main() -> Result<()> {
    // Init logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Init ranges.
    let args = Args::parse();
    let ranges: DemoRanges = if let Some(path) = &args.ranges {
        cfg::read_from_file(path)?
    } else {
        DemoRanges::default()
    };
    if let Some(path) = &args.write_ranges {
        cfg::write_to_file(path, &ranges)?;
    }
    let mut sampler = UniformSampler::new_with_seed(args.seed);

    info!("--- One-dimensional ---");
    describe(ranges.int, args.samples, &mut sampler);
    info!("Reordered: {}", ranges.int.reorder());
    describe(ranges.float, args.samples, &mut sampler);
    info!("Reordered: {}", ranges.float.reorder());

    info!("--- Two-dimensional ---");
    describe(ranges.vec2i, args.samples, &mut sampler);
    describe(ranges.vec2f, args.samples, &mut sampler);
    let probe = vector![-8.3, 15.0];
    info!("Contains {}: {}", Axes(probe), ranges.vec2f.contains(probe));

    info!("--- Three-dimensional ---");
    describe(ranges.vec3i, args.samples, &mut sampler);
    describe(ranges.vec3f, args.samples, &mut sampler);

    Ok(())
}

fn describe<T: Boundary>(range: Range<T>, samples: u32, sampler: &mut UniformSampler) {
    info!("Range {range:.2}");
    let lerps = (0..=4)
        .map(|i| format!("{:.2}", Axes(range.lerp(i as f32 / 4.0))))
        .collect::<Vec<_>>();
    info!("  Lerp at 0, 0.25, 0.5, 0.75, 1: {}", lerps.join(" "));
    info!("  Smooth step at 0.25: {:.2}", Axes(range.smooth_step(0.25)));
    info!("  Delta {:.2}, size {:.2}", Axes(range.delta()), Axes(range.size()));
    info!("  Center {:.2}", Axes(range.center()));
    info!(
        "  Inverse lerp of min {:.2}, of max {:.2}",
        Axes(range.inverse_lerp(range.min)),
        Axes(range.inverse_lerp(range.max))
    );
    info!("  Reordered per component {:.2}", range.reorder_per_component());
    for _ in 0..samples {
        let value = range.random(sampler);
        debug_assert!(range.contains(value));
        info!("  Random {:.2}, clamped to itself {:.2}", Axes(value), Axes(range.clamp(value)));
    }
}
