//! Weather Report math utilities.

pub mod math;

pub use math::moments::*;
pub use math::outlier::*;
