use strum_macros::{Display, EnumIter, EnumString};

use super::error::{Result, SimulationError};
use crate::math::units::{
    Acceleration, GravitationalConstant, Length, Mass, Position, Velocity,
};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

/// What a body looks like to whoever draws it. Has no effect on the physics.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BodyCategory {
    Star,
    Sun,
    Planet,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Satellite,
    Moon,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
    Satellite,
}

impl BodyCategory {
    pub fn kind(&self) -> BodyKind {
        match self {
            BodyCategory::Star | BodyCategory::Sun => BodyKind::Star,
            BodyCategory::Satellite | BodyCategory::Moon => BodyKind::Satellite,
            _ => BodyKind::Planet,
        }
    }
}

/// A point mass with a name and a size.
///
/// Velocity is stored pre-multiplied by `step_size`, and acceleration by
/// `step_size^2`. With that convention a tick is just two vector additions:
///   v <- v + a
///   x <- x + v
/// Callers always hand in and get back the physical velocity through
/// `set_velocity` / `physical_velocity`; `velocity` exposes the stored form.
#[derive(Debug, Clone)]
pub struct Body {
    category: BodyCategory,
    name: String,
    radius: Length,
    mass: Mass,
    position: Position,
    velocity: Velocity,
    acceleration: Acceleration,
    step_size: f64,
}

impl Body {
    pub fn new(
        category: BodyCategory,
        name: &str,
        radius: Length,
        mass: Mass,
        position: Position,
        velocity: Velocity,
    ) -> Result<Self> {
        check_radius(name, radius)?;
        check_mass(name, mass)?;
        check_finite(name, "position", position.is_finite())?;
        check_finite(name, "velocity", velocity.is_finite())?;

        let step_size = 1.0;
        Ok(Body {
            category,
            name: name.to_owned(),
            radius,
            mass,
            position,
            velocity: velocity.scale(step_size),
            acceleration: Acceleration::zeros(),
            step_size,
        })
    }

    pub fn with_step_size(mut self, step_size: f64) -> Result<Self> {
        self.set_step_size(step_size)?;
        Ok(self)
    }

    /// Acceleration felt by this body due to `other` alone, already scaled
    /// by this body's `step_size^2`.
    ///
    /// Coincident positions have no defined answer and are reported as
    /// `SingularGeometry`, as is a separation small enough to overflow.
    pub fn acceleration_due_to(
        &self,
        other: &Body,
        gravitational_constant: GravitationalConstant,
    ) -> Result<Acceleration> {
        let displacement = other.position - self.position;
        let distance = displacement.norm();
        if distance.is_nan() || distance == 0.0 {
            return Err(self.singular_with(other));
        }

        let direction = displacement.scale(1.0 / distance);
        let magnitude = gravitational_constant.value()
            * self.step_size.powi(2)
            * other.mass.kilograms()
            / (distance * distance);

        let acceleration = Acceleration::from_vector(direction.vector() * magnitude);
        if !acceleration.is_finite() {
            return Err(self.singular_with(other));
        }
        Ok(acceleration)
    }

    /// Sum of `acceleration_due_to` over `bodies`, in iteration order. If this
    /// body itself shows up in `bodies` it is skipped, so the whole body list
    /// of a system can be passed in directly. Does not store the result.
    ///
    /// A sum that overflows is reported as `NonFiniteState`.
    pub fn net_acceleration<'a, I>(
        &self,
        bodies: I,
        gravitational_constant: GravitationalConstant,
    ) -> Result<Acceleration>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let mut total = Acceleration::zeros();
        for other in bodies {
            if std::ptr::eq(self, other) {
                continue;
            }
            total += self.acceleration_due_to(other, gravitational_constant)?;
        }
        // Finite terms can still add up past f64::MAX
        check_finite(&self.name, "acceleration", total.is_finite())?;
        Ok(total)
    }

    /// Like `net_acceleration`, but the total becomes this body's current
    /// acceleration. On error the stored acceleration is left untouched.
    pub fn sum_acceleration<'a, I>(
        &mut self,
        others: I,
        gravitational_constant: GravitationalConstant,
    ) -> Result<Acceleration>
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let total = self.net_acceleration(others, gravitational_constant)?;
        self.acceleration = total;
        Ok(total)
    }

    pub fn integrate_velocity(&mut self) -> Velocity {
        self.velocity += self.acceleration.over_tick();
        self.velocity
    }

    pub fn integrate_position(&mut self) {
        self.position += self.velocity.over_tick();
    }

    fn singular_with(&self, other: &Body) -> SimulationError {
        SimulationError::SingularGeometry {
            body: self.name.clone(),
            other: other.name.clone(),
        }
    }
}

// Accessors
impl Body {
    pub fn category(&self) -> BodyCategory {
        self.category
    }

    pub fn set_category(&mut self, category: BodyCategory) {
        self.category = category;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn set_radius(&mut self, radius: Length) -> Result<()> {
        check_radius(&self.name, radius)?;
        self.radius = radius;
        Ok(())
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn set_mass(&mut self, mass: Mass) -> Result<()> {
        check_mass(&self.name, mass)?;
        self.mass = mass;
        Ok(())
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) -> Result<()> {
        check_finite(&self.name, "position", position.is_finite())?;
        self.position = position;
        Ok(())
    }

    /// The stored velocity, i.e. physical velocity times `step_size`.
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn physical_velocity(&self) -> Velocity {
        self.velocity.scale(1.0 / self.step_size)
    }

    /// Takes a physical velocity and stores it scaled by the current step size.
    pub fn set_velocity(&mut self, velocity: Velocity) -> Result<()> {
        check_finite(&self.name, "velocity", velocity.is_finite())?;
        self.velocity = velocity.scale(self.step_size);
        Ok(())
    }

    /// The stored acceleration, i.e. physical acceleration times `step_size^2`.
    pub fn acceleration(&self) -> Acceleration {
        self.acceleration
    }

    /// Takes an already step-scaled acceleration, as `acceleration` returns it.
    pub fn set_acceleration(&mut self, acceleration: Acceleration) -> Result<()> {
        check_finite(&self.name, "acceleration", acceleration.is_finite())?;
        self.acceleration = acceleration;
        Ok(())
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Changes the step size without changing the physical velocity. The
    /// stored acceleration is not rescaled; it gets recomputed on the next tick.
    /// Nothing changes if the rescaled velocity would overflow.
    pub fn set_step_size(&mut self, step_size: f64) -> Result<()> {
        self.velocity = self.rescaled_velocity(step_size)?;
        self.step_size = step_size;
        Ok(())
    }

    /// The stored velocity this body would have at `step_size`.
    pub(crate) fn rescaled_velocity(&self, step_size: f64) -> Result<Velocity> {
        if !(step_size.is_finite() && step_size > 0.0) {
            return Err(SimulationError::InvalidStepSize {
                name: self.name.clone(),
                value: step_size,
            });
        }

        let velocity = self.physical_velocity().scale(step_size);
        check_finite(&self.name, "velocity", velocity.is_finite())?;
        Ok(velocity)
    }
}

fn check_radius(name: &str, radius: Length) -> Result<()> {
    if radius.is_positive() {
        Ok(())
    } else {
        Err(SimulationError::InvalidRadius {
            name: name.to_owned(),
            value: radius.meters(),
        })
    }
}

fn check_mass(name: &str, mass: Mass) -> Result<()> {
    if mass.is_positive() {
        Ok(())
    } else {
        Err(SimulationError::InvalidMass {
            name: name.to_owned(),
            value: mass.kilograms(),
        })
    }
}

fn check_finite(name: &str, quantity: &'static str, is_finite: bool) -> Result<()> {
    if is_finite {
        Ok(())
    } else {
        Err(SimulationError::NonFiniteState {
            name: name.to_owned(),
            quantity,
        })
    }
}
