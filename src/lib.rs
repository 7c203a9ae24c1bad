pub mod consts;
pub mod file;
pub mod math;
pub mod model;
pub mod presets;
