/*!
 * Input Adapter
 * Text-to-matrix parsing for the presentation layer
 */

pub mod parse;

pub use parse::{parse_labels, parse_matrix, parse_vector};
