use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rust_nbody::file::read_file;
use rust_nbody::math::units::GravitationalConstant;
use rust_nbody::model::System;
use rust_nbody::presets::solar_system;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Steps an n-body scenario forward and prints where everything ends up.
#[derive(Debug, Parser)]
struct Args {
    /// Scenario file; see `rust_nbody::file::parse_scenario` for the format
    #[arg(default_value = "solar-bodies.txt")]
    scenario: PathBuf,

    /// Ignore the scenario file and use the built-in solar system
    #[arg(long)]
    solar_system: bool,

    /// Number of ticks to run
    #[arg(short = 'n', long, default_value_t = 365)]
    steps: u64,

    /// Step size applied to every body, in seconds per tick
    #[arg(short, long)]
    step_size: Option<f64>,

    /// Override the gravitational constant, in m^3 kg^-1 s^-2
    #[arg(short = 'g', long)]
    gravitational_constant: Option<f64>,

    /// Print a table every this many ticks (0 prints only the final state)
    #[arg(short, long, default_value_t = 0)]
    print_every: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut system = if args.solar_system {
        solar_system()?
    } else {
        read_file(&args.scenario)?
    };
    if let Some(step_size) = args.step_size {
        system.set_step_size(step_size)?;
    }
    if let Some(g) = args.gravitational_constant {
        system.set_gravitational_constant(GravitationalConstant::new(g))?;
    }

    info!(
        bodies = system.len(),
        steps = args.steps,
        "starting simulation"
    );

    for tick in 1..=args.steps {
        system.step()?;
        if args.print_every != 0 && tick % args.print_every == 0 {
            print_state(&system);
        }
    }
    print_state(&system);

    Ok(())
}

fn print_state(system: &System) {
    println!("After {} ticks:", system.ticks());
    for body in system.bodies() {
        let p = body.position().vector();
        let v = body.physical_velocity().vector();
        println!(
            "- {:<12} {:<10} x = ({:+.6e}, {:+.6e}, {:+.6e}) m, |v| = {:.3} m/s",
            body.name(),
            body.category().to_string(),
            p.x,
            p.y,
            p.z,
            v.norm()
        );
    }
    println!();
}
