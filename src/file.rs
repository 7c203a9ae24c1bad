use std::fs;
use std::num::ParseFloatError;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::math::units::{GravitationalConstant, Length, Mass, Position, Velocity};
use crate::model::{Body, BodyCategory, SimulationError, System};

#[derive(Debug, Error)]
pub enum FileError {
    #[error("could not read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: bad value for `{field}`: {source}")]
    ParseFloat {
        line: usize,
        field: &'static str,
        source: ParseFloatError,
    },

    #[error("line {line}: unknown body category `{category}`")]
    UnknownCategory { line: usize, category: String },

    #[error("line {line}: unexpected extra field `{field}`")]
    TrailingField { line: usize, field: String },

    #[error("line {line}: {source}")]
    Simulation {
        line: usize,
        source: SimulationError,
    },
}

/// Reads a scenario file. See `parse_scenario` for the format.
pub fn read_file(filename: impl AsRef<Path>) -> Result<System, FileError> {
    let text = fs::read_to_string(filename)?;
    parse_scenario(&text)
}

/// Builds a system from whitespace-separated text, one body per line:
///
/// ```text
/// # name  category  mass(kg)  radius(m)  x y z (m)  vx vy vz (m/s)  [step]
/// Sun     sun       1.9885e30 6.957e8    0 0 0      0 0 0
/// ```
///
/// Velocities are physical; the optional last column sets the body's step
/// size. A line `G <value>` overrides the gravitational constant. Everything
/// after a `#` is ignored.
pub fn parse_scenario(text: &str) -> Result<System, FileError> {
    let mut gravitational_constant = (0, GravitationalConstant::SI);
    let mut bodies = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let content = match raw_line.split('#').next() {
            Some(s) => s.trim(),
            None => continue,
        };
        if content.is_empty() {
            continue;
        }

        let mut fields = content.split_ascii_whitespace();

        macro_rules! next_string {
            ($field:expr) => {
                fields
                    .next()
                    .ok_or(FileError::MissingField { line, field: $field })?
            };
        }

        macro_rules! parse_f64 {
            ($s:expr, $field:expr) => {
                $s.parse::<f64>().map_err(|source| FileError::ParseFloat {
                    line,
                    field: $field,
                    source,
                })?
            };
        }

        macro_rules! next_f64 {
            ($field:expr) => {
                parse_f64!(next_string!($field), $field)
            };
        }

        let name = next_string!("name");
        if name == "G" {
            gravitational_constant = (line, GravitationalConstant::new(next_f64!("G")));
        } else {
            let category_name = next_string!("category");
            let category = BodyCategory::from_str(category_name).map_err(|_| {
                FileError::UnknownCategory {
                    line,
                    category: category_name.to_owned(),
                }
            })?;

            let mass = Mass::from_kilograms(next_f64!("mass"));
            let radius = Length::from_meters(next_f64!("radius"));
            let position = Position::new(next_f64!("x"), next_f64!("y"), next_f64!("z"));
            let velocity = Velocity::new(next_f64!("vx"), next_f64!("vy"), next_f64!("vz"));
            let step_size = match fields.next() {
                Some(s) => Some(parse_f64!(s, "step")),
                None => None,
            };

            let body = Body::new(category, name, radius, mass, position, velocity)
                .and_then(|body| match step_size {
                    Some(step_size) => body.with_step_size(step_size),
                    None => Ok(body),
                })
                .map_err(|source| FileError::Simulation { line, source })?;
            bodies.push((line, body));
        }

        if let Some(extra) = fields.next() {
            return Err(FileError::TrailingField {
                line,
                field: extra.to_owned(),
            });
        }
    }

    let (g_line, g) = gravitational_constant;
    let mut system =
        System::new(g).map_err(|source| FileError::Simulation { line: g_line, source })?;
    for (line, body) in bodies {
        system
            .add_body(body)
            .map_err(|source| FileError::Simulation { line, source })?;
    }

    debug!(
        bodies = system.len(),
        g = system.gravitational_constant().value(),
        "loaded scenario"
    );
    Ok(system)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::model::BodyID;

    const SCENARIO: &str = "
# name   category  mass      radius   x      y  z   vx  vy     vz  step
Sun      sun       1.9885e30 6.957e8  0      0  0   0   0      0
Earth    earth     5.97e24   6.371e6  1.5e11 0  0   0   29780  0   # circular-ish
Probe    satellite 720.0     2.0      1.6e11 0  0   0   30000  0   60
";

    #[test]
    fn test_parse_scenario() {
        let system = parse_scenario(SCENARIO).unwrap();
        assert_eq!(system.len(), 3);
        assert_eq!(system.gravitational_constant(), GravitationalConstant::SI);

        let earth = system.get_body(BodyID(1)).unwrap();
        assert_eq!(earth.name(), "Earth");
        assert_eq!(earth.category(), BodyCategory::Earth);
        assert_eq!(earth.mass(), Mass::from_kilograms(5.97e24));
        assert_eq!(earth.position(), Position::new(1.5e11, 0.0, 0.0));
        assert_eq!(earth.step_size(), 1.0);

        let probe = system.get_body(system.find_body("Probe").unwrap()).unwrap();
        assert_eq!(probe.step_size(), 60.0);
        assert_relative_eq!(
            probe.physical_velocity(),
            Velocity::new(0.0, 30000.0, 0.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(probe.velocity(), Velocity::new(0.0, 1.8e6, 0.0));
    }

    #[test]
    fn test_gravitational_constant_directive() {
        let system = parse_scenario("G 1.0\na planet 1 1 0 0 0 0 0 0").unwrap();
        assert_eq!(system.gravitational_constant().value(), 1.0);

        let err = parse_scenario("G -2.0").unwrap_err();
        assert!(matches!(
            err,
            FileError::Simulation {
                line: 1,
                source: SimulationError::InvalidGravitationalConstant(_)
            }
        ));
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        let missing = parse_scenario("\n\na planet 1 1 0 0 0 0 0").unwrap_err();
        assert!(matches!(
            missing,
            FileError::MissingField {
                line: 3,
                field: "vz"
            }
        ));

        let bad_float = parse_scenario("a planet heavy 1 0 0 0 0 0 0").unwrap_err();
        assert!(matches!(
            bad_float,
            FileError::ParseFloat {
                line: 1,
                field: "mass",
                ..
            }
        ));

        let category = parse_scenario("a comet 1 1 0 0 0 0 0 0").unwrap_err();
        assert!(matches!(category, FileError::UnknownCategory { line: 1, .. }));

        let trailing = parse_scenario("a planet 1 1 0 0 0 0 0 0 1 extra").unwrap_err();
        assert!(matches!(trailing, FileError::TrailingField { line: 1, .. }));
    }

    #[test]
    fn test_invalid_bodies_are_rejected() {
        let massless = parse_scenario("a planet 0 1 0 0 0 0 0 0").unwrap_err();
        assert!(matches!(
            massless,
            FileError::Simulation {
                line: 1,
                source: SimulationError::InvalidMass { .. }
            }
        ));

        let duplicate =
            parse_scenario("a planet 1 1 0 0 0 0 0 0\na planet 1 1 5 0 0 0 0 0").unwrap_err();
        assert!(matches!(
            duplicate,
            FileError::Simulation {
                line: 2,
                source: SimulationError::DuplicateBody(_)
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_file("definitely/not/a/scenario.txt"),
            Err(FileError::Io(_))
        ));
    }
}
