use approx::{AbsDiffEq, RelativeEq};
use derive_more::{Add, AddAssign, Neg, Sub, SubAssign};
use nalgebra::Vector3;

use crate::consts::NEWTON_G;

// Each wrapper only knows how to combine with itself. Anything that changes
// units goes through a named method below, so a length can never be added to
// a mass by accident.

macro_rules! scalar_quantity {
    ($name:ident, $ctor:ident, $getter:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign)]
        pub struct $name(f64);

        impl $name {
            pub fn $ctor(value: f64) -> Self {
                Self(value)
            }

            pub fn $getter(&self) -> f64 {
                self.0
            }

            pub fn scale(&self, factor: f64) -> Self {
                Self(self.0 * factor)
            }

            /// Positive and finite, which is what every physical property in
            /// the simulation requires.
            pub fn is_positive(&self) -> bool {
                self.0.is_finite() && self.0 > 0.0
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl RelativeEq for $name {
            fn default_max_relative() -> f64 {
                f64::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

macro_rules! vector_quantity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Add, Sub, AddAssign, SubAssign, Neg)]
        pub struct $name(Vector3<f64>);

        impl $name {
            pub fn new(x: f64, y: f64, z: f64) -> Self {
                Self(Vector3::new(x, y, z))
            }

            pub fn from_vector(v: Vector3<f64>) -> Self {
                Self(v)
            }

            pub fn zeros() -> Self {
                Self(Vector3::zeros())
            }

            pub fn vector(&self) -> Vector3<f64> {
                self.0
            }

            pub fn norm(&self) -> f64 {
                self.0.norm()
            }

            pub fn scale(&self, factor: f64) -> Self {
                Self(self.0 * factor)
            }

            pub fn is_finite(&self) -> bool {
                self.0.iter().all(|x| x.is_finite())
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                f64::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl RelativeEq for $name {
            fn default_max_relative() -> f64 {
                f64::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

scalar_quantity!(Length, from_meters, meters);
scalar_quantity!(Mass, from_kilograms, kilograms);

vector_quantity!(
    /// Position in meters, in the inertial frame shared by a whole system.
    /// The difference of two positions is a displacement, also in meters.
    Position
);

vector_quantity!(
    /// Velocity in m/s. Inside a `Body` this is stored multiplied by the
    /// body's step size, which makes it the displacement covered in one tick.
    Velocity
);

vector_quantity!(
    /// Acceleration in m/s^2. Inside a `Body` this is stored multiplied by the
    /// square of the step size, which makes it the velocity change over one
    /// tick.
    Acceleration
);

impl Position {
    pub fn distance_to(&self, other: &Position) -> Length {
        Length((other.0 - self.0).norm())
    }
}

impl Velocity {
    /// Reinterprets a step-scaled velocity as the displacement it produces
    /// over a single tick.
    pub fn over_tick(self) -> Position {
        Position(self.0)
    }
}

impl Acceleration {
    /// Reinterprets a step^2-scaled acceleration as the velocity change it
    /// produces over a single tick (still step-scaled).
    pub fn over_tick(self) -> Velocity {
        Velocity(self.0)
    }
}

/// Newton's G, in m^3 kg^-1 s^-2.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GravitationalConstant(f64);

impl GravitationalConstant {
    pub const SI: GravitationalConstant = GravitationalConstant(NEWTON_G);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl Default for GravitationalConstant {
    fn default() -> Self {
        Self::SI
    }
}
