//! Page components.

pub mod create_set;

pub use create_set::*;
