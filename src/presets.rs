//! Ready-made bodies with realistic SI values.
//!
//! Each planet starts on the +x axis at its mean distance from the sun, moving
//! along +y at circular-orbit speed. The moon is placed the same way around
//! the earth. The sun sits at rest at the origin.

use crate::consts::*;
use crate::math::units::{GravitationalConstant, Length, Mass, Position, Velocity};
use crate::model::{Body, BodyCategory, Result, System};

fn orbiting(
    category: BodyCategory,
    name: &str,
    radius: f64,
    mass: f64,
    orbit_radius: f64,
    primary_mass: f64,
) -> Result<Body> {
    let speed = get_circular_velocity(orbit_radius, NEWTON_G * primary_mass);
    Body::new(
        category,
        name,
        Length::from_meters(radius),
        Mass::from_kilograms(mass),
        Position::new(orbit_radius, 0.0, 0.0),
        Velocity::new(0.0, speed, 0.0),
    )
}

pub fn sun() -> Result<Body> {
    Body::new(
        BodyCategory::Sun,
        "Sun",
        Length::from_meters(SUN_RADIUS),
        Mass::from_kilograms(SUN_MASS),
        Position::zeros(),
        Velocity::zeros(),
    )
}

pub fn mercury() -> Result<Body> {
    orbiting(
        BodyCategory::Mercury,
        "Mercury",
        MERCURY_RADIUS,
        MERCURY_MASS,
        MERCURY_ORBIT_RADIUS,
        SUN_MASS,
    )
}

pub fn venus() -> Result<Body> {
    orbiting(
        BodyCategory::Venus,
        "Venus",
        VENUS_RADIUS,
        VENUS_MASS,
        VENUS_ORBIT_RADIUS,
        SUN_MASS,
    )
}

pub fn earth() -> Result<Body> {
    orbiting(
        BodyCategory::Earth,
        "Earth",
        EARTH_RADIUS,
        EARTH_MASS,
        EARTH_ORBIT_RADIUS,
        SUN_MASS,
    )
}

/// Earth with ten times the mass, for seeing what a heavier neighbour does
/// to everything else.
pub fn bigger_earth() -> Result<Body> {
    orbiting(
        BodyCategory::Earth,
        "Bigger Earth",
        EARTH_RADIUS,
        10.0 * EARTH_MASS,
        EARTH_ORBIT_RADIUS,
        SUN_MASS,
    )
}

pub fn moon() -> Result<Body> {
    let earth = earth()?;
    let speed = get_circular_velocity(MOON_ORBIT_RADIUS, NEWTON_G * EARTH_MASS);
    Body::new(
        BodyCategory::Moon,
        "Moon",
        Length::from_meters(MOON_RADIUS),
        Mass::from_kilograms(MOON_MASS),
        earth.position() + Position::new(MOON_ORBIT_RADIUS, 0.0, 0.0),
        earth.physical_velocity() + Velocity::new(0.0, speed, 0.0),
    )
}

pub fn mars() -> Result<Body> {
    orbiting(
        BodyCategory::Mars,
        "Mars",
        MARS_RADIUS,
        MARS_MASS,
        MARS_ORBIT_RADIUS,
        SUN_MASS,
    )
}

pub fn jupiter() -> Result<Body> {
    orbiting(
        BodyCategory::Jupiter,
        "Jupiter",
        JUPITER_RADIUS,
        JUPITER_MASS,
        JUPITER_ORBIT_RADIUS,
        SUN_MASS,
    )
}

pub fn saturn() -> Result<Body> {
    orbiting(
        BodyCategory::Saturn,
        "Saturn",
        SATURN_RADIUS,
        SATURN_MASS,
        SATURN_ORBIT_RADIUS,
        SUN_MASS,
    )
}

pub fn uranus() -> Result<Body> {
    orbiting(
        BodyCategory::Uranus,
        "Uranus",
        URANUS_RADIUS,
        URANUS_MASS,
        URANUS_ORBIT_RADIUS,
        SUN_MASS,
    )
}

pub fn neptune() -> Result<Body> {
    orbiting(
        BodyCategory::Neptune,
        "Neptune",
        NEPTUNE_RADIUS,
        NEPTUNE_MASS,
        NEPTUNE_ORBIT_RADIUS,
        SUN_MASS,
    )
}

pub fn pluto() -> Result<Body> {
    orbiting(
        BodyCategory::Pluto,
        "Pluto",
        PLUTO_RADIUS,
        PLUTO_MASS,
        PLUTO_ORBIT_RADIUS,
        SUN_MASS,
    )
}

/// The sun, the nine classical planets and the moon.
pub fn solar_system() -> Result<System> {
    let mut system = System::new(GravitationalConstant::SI)?;
    let bodies = vec![
        sun()?,
        mercury()?,
        venus()?,
        earth()?,
        moon()?,
        mars()?,
        jupiter()?,
        saturn()?,
        uranus()?,
        neptune()?,
        pluto()?,
    ];
    for body in bodies {
        system.add_body(body)?;
    }
    Ok(system)
}
