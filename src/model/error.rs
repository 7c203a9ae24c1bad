use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("mass of {name} must be positive and finite, got {value} kg")]
    InvalidMass { name: String, value: f64 },

    #[error("radius of {name} must be positive and finite, got {value} m")]
    InvalidRadius { name: String, value: f64 },

    #[error("step size of {name} must be positive and finite, got {value}")]
    InvalidStepSize { name: String, value: f64 },

    #[error("system step size must be positive and finite, got {0}")]
    InvalidSystemStepSize(f64),

    #[error("gravitational constant must be positive and finite, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("{name} has a non-finite {quantity}")]
    NonFiniteState {
        name: String,
        quantity: &'static str,
    },

    #[error("a body named {0} is already part of this system")]
    DuplicateBody(String),

    #[error("{body} and {other} occupy the same position")]
    SingularGeometry { body: String, other: String },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
