mod body;
mod error;
mod system;

pub use body::{Body, BodyCategory, BodyID, BodyKind};
pub use error::{Result, SimulationError};
pub use system::System;
