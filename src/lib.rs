#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(clippy::pedantic)]
#![allow(
    clippy::cast_precision_loss,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::wildcard_imports
)]

//! A `Range` holds two boundary values of the same shape, a scalar or an
//! axis-aligned vector, and offers interpolation, clamping, containment and
//! sampling over them. Boundaries are stored verbatim, so `min > max` is a
//! legal range.

use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter},
    ops::RangeInclusive,
    path::Path,
};

use anyhow::{Context, Result};
use nalgebra as na;
use rand::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[macro_use]
extern crate log;

//
// Modules
//

pub mod cfg;
mod component;
mod math;
mod ops;
mod range;
mod sampling;

//
// Re-exports
//

pub use component::{Boundary, Component};
pub use math::*;
pub use range::*;
pub use sampling::{UniformSampler, UniformSource};
