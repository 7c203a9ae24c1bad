// Newton's gravitational constant, in m^3 kg^-1 s^-2
pub const NEWTON_G: f64 = 6.67430e-11;

// Masses (kg) and mean radii (m), from the NASA planetary fact sheets
pub const SUN_MASS: f64 = 1.9885e30;
pub const SUN_RADIUS: f64 = 6.957e8;
pub const MERCURY_MASS: f64 = 3.3011e23;
pub const MERCURY_RADIUS: f64 = 2.4397e6;
pub const VENUS_MASS: f64 = 4.8675e24;
pub const VENUS_RADIUS: f64 = 6.0518e6;
pub const EARTH_MASS: f64 = 5.97237e24;
pub const EARTH_RADIUS: f64 = 6.371e6;
pub const MOON_MASS: f64 = 7.342e22;
pub const MOON_RADIUS: f64 = 1.7374e6;
pub const MARS_MASS: f64 = 6.4171e23;
pub const MARS_RADIUS: f64 = 3.3895e6;
pub const JUPITER_MASS: f64 = 1.8982e27;
pub const JUPITER_RADIUS: f64 = 6.9911e7;
pub const SATURN_MASS: f64 = 5.6834e26;
pub const SATURN_RADIUS: f64 = 5.8232e7;
pub const URANUS_MASS: f64 = 8.681e25;
pub const URANUS_RADIUS: f64 = 2.5362e7;
pub const NEPTUNE_MASS: f64 = 1.02413e26;
pub const NEPTUNE_RADIUS: f64 = 2.4622e7;
pub const PLUTO_MASS: f64 = 1.303e22;
pub const PLUTO_RADIUS: f64 = 1.1883e6;

// Semi-major axes (m). The moon's is relative to the earth.
pub const MERCURY_ORBIT_RADIUS: f64 = 5.7909e10;
pub const VENUS_ORBIT_RADIUS: f64 = 1.08209e11;
pub const EARTH_ORBIT_RADIUS: f64 = 1.495978707e11;
pub const MOON_ORBIT_RADIUS: f64 = 3.844e8;
pub const MARS_ORBIT_RADIUS: f64 = 2.27939e11;
pub const JUPITER_ORBIT_RADIUS: f64 = 7.78479e11;
pub const SATURN_ORBIT_RADIUS: f64 = 1.43353e12;
pub const URANUS_ORBIT_RADIUS: f64 = 2.870972e12;
pub const NEPTUNE_ORBIT_RADIUS: f64 = 4.498253e12;
pub const PLUTO_ORBIT_RADIUS: f64 = 5.90638e12;

pub fn get_circular_velocity(radius: f64, mu: f64) -> f64 {
    (mu / radius).sqrt()
}
