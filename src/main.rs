//! Wavegrid - headless driver for the procedural water surface
//!
//! Builds the grid, ticks it at a fixed rate for the requested duration and
//! reports surface statistics. Optionally writes a point-cloud snapshot of
//! the final frame.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use wavegrid::cli::Args;
use wavegrid::debug::PointCloud;
use wavegrid::error::Result;
use wavegrid::water::{SurfaceFrame, WaterSurface};

/// Min and max height over a frame
fn height_range(frame: &SurfaceFrame) -> (f32, f32) {
    frame
        .positions
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        })
}

fn run(args: &Args) -> Result<()> {
    let params = args.surface_params()?;
    let run = args.run_config()?;
    let snapshot = args.snapshot_config()?;

    let mut surface = WaterSurface::new(params)?;
    surface.build()?;

    let ticks = run.total_ticks();
    info!(
        "Running {} ticks ({}s at {} fps)",
        ticks, run.duration_secs, run.fps
    );

    let start = Instant::now();
    let (mut lowest, mut highest) = (f32::INFINITY, f32::NEG_INFINITY);
    for tick in 0..=ticks {
        if let Some(frame) = surface.tick(run.tick_time(tick)) {
            let (lo, hi) = height_range(frame);
            lowest = lowest.min(lo);
            highest = highest.max(hi);
        }
    }
    let elapsed = start.elapsed();

    info!("Height range over run: [{:.3}, {:.3}]", lowest, highest);
    info!(
        "Tick time: {:.3}ms average",
        elapsed.as_secs_f64() * 1000.0 / (ticks + 1) as f64
    );

    if let (Some(snapshot), Some(frame)) = (snapshot, surface.frame()) {
        PointCloud::new(snapshot.marker_radius).save(&frame.positions, &snapshot)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
