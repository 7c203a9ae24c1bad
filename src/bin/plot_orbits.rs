use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use plotters::prelude::*;
use rust_nbody::file::read_file;
use rust_nbody::model::{BodyKind, System};
use rust_nbody::presets::solar_system;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs a scenario and draws every body's path in the xy plane.
#[derive(Debug, Parser)]
struct Args {
    /// Scenario file; the built-in solar system is used if omitted
    scenario: Option<PathBuf>,

    /// Where to write the picture
    #[arg(short, long, default_value = "plots/orbits.png")]
    output: PathBuf,

    #[arg(short = 'n', long, default_value_t = 365)]
    steps: u64,

    /// Step size applied to every body, in seconds per tick
    #[arg(short, long, default_value_t = 86400.0)]
    step_size: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut system = match &args.scenario {
        Some(path) => read_file(path)?,
        None => solar_system()?,
    };
    system.set_step_size(args.step_size)?;

    let paths = record_paths(&mut system, args.steps)?;
    draw_paths(&args.output, &system, &paths)?;
    info!(output = %args.output.display(), "wrote plot");
    Ok(())
}

// One path per body, in system order, starting with the initial position
fn record_paths(system: &mut System, steps: u64) -> Result<Vec<Vec<(f64, f64)>>, Box<dyn Error>> {
    let mut paths: Vec<Vec<(f64, f64)>> = system
        .bodies()
        .map(|b| vec![(b.position().vector().x, b.position().vector().y)])
        .collect();

    for _ in 0..steps {
        system.step()?;
        for (path, body) in paths.iter_mut().zip(system.bodies()) {
            let p = body.position().vector();
            path.push((p.x, p.y));
        }
    }
    Ok(paths)
}

fn draw_paths(
    name: &Path,
    system: &System,
    paths: &[Vec<(f64, f64)>],
) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = name.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Square plot, centered on the origin, big enough for every path
    let extent = paths
        .iter()
        .flatten()
        .map(|(x, y)| x.abs().max(y.abs()))
        .fold(1.0, f64::max)
        * 1.05;

    let root = BitMapBackend::new(name, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart.configure_mesh().draw()?;

    for (path, body) in paths.iter().zip(system.bodies()) {
        let color = match body.category().kind() {
            BodyKind::Star => RED,
            BodyKind::Planet => BLUE,
            BodyKind::Satellite => GREEN,
        };
        chart
            .draw_series(LineSeries::new(path.iter().copied(), &color))?
            .label(body.name().to_owned())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE)
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
