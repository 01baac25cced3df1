//! # Elevation profile preparation
//!
//! Turns raw elevation samples into the evenly spaced, rescaled
//! heights the `mesh` crate builds bars from, and into straight cut
//! lines for a laser cutter.

mod cut;
mod drawing;
mod error;
mod math;
mod normalize;
mod resample;
mod track;

pub use crate::{
    cut::{bar_lengths, cut_paths},
    drawing::{save_svg, to_svg},
    error::ProfileError,
    normalize::normalize,
    resample::resample,
    track::track_fractions,
};
