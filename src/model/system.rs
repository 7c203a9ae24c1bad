use nalgebra::Vector3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::body::{Body, BodyID};
use super::error::{Result, SimulationError};
use crate::math::units::{Acceleration, GravitationalConstant, Position};

/// A set of bodies sharing one inertial frame and one gravitational constant.
///
/// Bodies are kept in insertion order, which is also the summation order for
/// accelerations, so repeated runs are bit-for-bit reproducible.
#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>,
    gravitational_constant: GravitationalConstant,
    ticks: u64,
}

impl System {
    pub fn new(gravitational_constant: GravitationalConstant) -> Result<Self> {
        check_gravitational_constant(gravitational_constant)?;
        Ok(System {
            bodies: Vec::new(),
            gravitational_constant,
            ticks: 0,
        })
    }

    pub fn gravitational_constant(&self) -> GravitationalConstant {
        self.gravitational_constant
    }

    /// Can be changed between ticks; the next `step` uses the new value.
    pub fn set_gravitational_constant(&mut self, value: GravitationalConstant) -> Result<()> {
        check_gravitational_constant(value)?;
        debug!(
            old = self.gravitational_constant.value(),
            new = value.value(),
            "changed gravitational constant"
        );
        self.gravitational_constant = value;
        Ok(())
    }

    pub fn add_body(&mut self, body: Body) -> Result<BodyID> {
        if self.find_body(body.name()).is_some() {
            return Err(SimulationError::DuplicateBody(body.name().to_owned()));
        }

        let id = BodyID(self.bodies.len());
        debug!(id = id.0, name = body.name(), category = %body.category(), "added body");
        self.bodies.push(body);
        Ok(id)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn body_ids(&self) -> impl Iterator<Item = BodyID> {
        (0..self.bodies.len()).map(BodyID)
    }

    pub fn get_body(&self, id: BodyID) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    /// Renaming a body through this handle bypasses the duplicate-name check.
    pub fn get_body_mut(&mut self, id: BodyID) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    pub fn find_body(&self, name: &str) -> Option<BodyID> {
        self.bodies
            .iter()
            .position(|b| b.name() == name)
            .map(BodyID)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of ticks that have completed successfully.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Gives every body the same step size. Physical velocities are unchanged.
    /// Either every body gets the new step size or none does.
    pub fn set_step_size(&mut self, step_size: f64) -> Result<()> {
        if !(step_size.is_finite() && step_size > 0.0) {
            return Err(SimulationError::InvalidSystemStepSize(step_size));
        }
        for body in self.bodies.iter() {
            body.rescaled_velocity(step_size)?;
        }
        for body in self.bodies.iter_mut() {
            body.set_step_size(step_size)?;
        }
        Ok(())
    }

    /// Advances the simulation by one tick.
    ///
    /// Three full passes, each finishing before the next starts:
    /// 1. every body's acceleration, from the positions at the start of the tick
    /// 2. every body's velocity
    /// 3. every body's position
    ///
    /// If any acceleration can't be computed, or the new velocities or
    /// positions would overflow, the tick is abandoned and no body is modified.
    pub fn step(&mut self) -> Result<()> {
        let accelerations = self
            .compute_accelerations()
            .and_then(|accelerations| {
                self.check_tick(&accelerations)?;
                Ok(accelerations)
            })
            .map_err(|err| {
                warn!(tick = self.ticks, %err, "abandoning tick");
                err
            })?;

        for (body, acceleration) in self.bodies.iter_mut().zip(accelerations) {
            body.set_acceleration(acceleration)?;
        }
        for body in self.bodies.iter_mut() {
            body.integrate_velocity();
        }
        for body in self.bodies.iter_mut() {
            body.integrate_position();
        }

        self.ticks += 1;
        trace!(tick = self.ticks, bodies = self.bodies.len(), "completed tick");
        Ok(())
    }

    /// Calls `step` `num_ticks` times, stopping at the first failure.
    pub fn run(&mut self, num_ticks: u64) -> Result<()> {
        for _ in 0..num_ticks {
            self.step()?;
        }
        Ok(())
    }

    // Dry run of the velocity and position passes.
    fn check_tick(&self, accelerations: &[Acceleration]) -> Result<()> {
        for (body, acceleration) in self.bodies.iter().zip(accelerations) {
            let velocity = body.velocity() + acceleration.over_tick();
            check_finite(body, "velocity", velocity.is_finite())?;
            let position = body.position() + velocity.over_tick();
            check_finite(body, "position", position.is_finite())?;
        }
        Ok(())
    }

    #[cfg(not(feature = "parallel"))]
    fn compute_accelerations(&self) -> Result<Vec<Acceleration>> {
        let g = self.gravitational_constant;
        self.bodies
            .iter()
            .map(|body| body.net_acceleration(&self.bodies, g))
            .collect()
    }

    // Each body only reads the shared snapshot, so this splits cleanly. The
    // collect is the barrier before anything gets written.
    #[cfg(feature = "parallel")]
    fn compute_accelerations(&self) -> Result<Vec<Acceleration>> {
        let g = self.gravitational_constant;
        self.bodies
            .par_iter()
            .map(|body| body.net_acceleration(&self.bodies, g))
            .collect()
    }

    /// Sum of mass times physical velocity, in kg m/s.
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.bodies
            .iter()
            .map(|b| b.physical_velocity().vector() * b.mass().kilograms())
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    pub fn center_of_mass(&self) -> Option<Position> {
        if self.bodies.is_empty() {
            return None;
        }

        let total_mass: f64 = self.bodies.iter().map(|b| b.mass().kilograms()).sum();
        let weighted = self
            .bodies
            .iter()
            .map(|b| b.position().vector() * b.mass().kilograms())
            .fold(Vector3::zeros(), |acc, x| acc + x);
        Some(Position::from_vector(weighted / total_mass))
    }
}

fn check_gravitational_constant(value: GravitationalConstant) -> Result<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(SimulationError::InvalidGravitationalConstant(value.value()))
    }
}

fn check_finite(body: &Body, quantity: &'static str, is_finite: bool) -> Result<()> {
    if is_finite {
        Ok(())
    } else {
        Err(SimulationError::NonFiniteState {
            name: body.name().to_owned(),
            quantity,
        })
    }
}
