pub mod error;
pub mod glutils;
pub mod math;
pub mod shaders;
pub mod shapes;
pub mod system;

pub use error::{Error, Result};
