//! Small 3D rotation kernel: a `Vector3f`, a `Quaternion` that can be built
//! from an axis and angle, and the Hamilton product to compose rotations.
//!
//! All arithmetic follows IEEE-754: nothing panics or returns an error,
//! degenerate inputs produce `NaN`/`inf` components.

pub mod vector;
pub mod quaternion;
pub mod angle;
pub mod config;
pub mod error;

pub use crate::vector::Vector3f;
pub use crate::quaternion::Quaternion;
