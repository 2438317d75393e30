/*!
 * Data Model
 * Immutable snapshot inputs consumed by the analysis entry points
 */

pub mod matrix;
pub mod snapshot;

pub use matrix::Matrix;
pub use snapshot::{DetectionSnapshot, SafetySnapshot};
