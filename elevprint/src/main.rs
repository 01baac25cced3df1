#![allow(clippy::cast_precision_loss)]

mod input;
mod options;

use anyhow::{ensure, Error as AnyError};
use clap::Parser;
use input::Samples;
use log::info;
use mesh::{Feature, Solid};
use options::{Cli, Command as CliCmd, Stl};
use std::path::Path;
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    let Cli {
        points,
        min_height,
        multiplier,
        width,
        input,
        cmd,
    } = Cli::parse();

    env_logger::init();

    ensure!(points > 0, "--points must be at least 1");

    let samples = Samples::open(&input)?;
    let heights = samples.heights(points, min_height, multiplier)?;

    match cmd {
        CliCmd::Stl(stl) => write_stl(&heights, width, &stl),
        CliCmd::Svg { out } => write_svg(&heights, width, &out),
        CliCmd::Plot => {
            plot_ascii(&heights);
            Ok(())
        }
    }
}

/// Builds a row of bars, one per height, plus any parallel copies, and
/// writes them as an STL mesh.
fn write_stl(heights: &[f64], width: f64, opts: &Stl) -> Result<(), AnyError> {
    let solid = build_solid(heights, width, opts)?;
    solid.save()?;
    info!(
        "wrote {} bars ({} facets) to {}",
        solid.len(),
        solid.facet_count(),
        solid.path().display()
    );
    Ok(())
}

fn build_solid(heights: &[f64], width: f64, opts: &Stl) -> Result<Solid, AnyError> {
    let hills = Feature::builder()
        .along(opts.along.0)
        .thickness(opts.thickness)
        .lengths(profile::bar_lengths(heights.len(), width))
        .heights(heights.to_vec())
        .build()?;
    let copies = hills.duplicate_n_times(opts.copies, opts.spacing.unwrap_or(opts.thickness));

    let mut solid = Solid::new(&opts.out);
    solid.add(hills);
    solid.add_all(copies);
    solid.move_by(opts.move_x, opts.move_y);
    Ok(solid)
}

fn write_svg(heights: &[f64], width: f64, out: &Path) -> Result<(), AnyError> {
    let lines = profile::cut_paths(heights, width);
    profile::save_svg(out, &lines)?;
    info!("wrote {} cut lines to {}", lines.len(), out.display());
    Ok(())
}

fn plot_ascii(heights: &[f64]) {
    let plot_data: Vec<(f32, f32)> = heights
        .iter()
        .enumerate()
        .map(|(idx, elev)| (idx as f32, *elev as f32))
        .collect();
    Chart::new(300, 150, 0.0, plot_data.len() as f32)
        .lineplot(&Shape::Lines(&plot_data))
        .display();
}
