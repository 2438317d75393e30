/*!
 * Text Encoding Parser
 * The comma/semicolon matrix encoding accepted by the CLI
 *
 * A row is comma-separated non-negative integers; matrix rows are separated
 * by semicolons. Labels are comma-separated. Parse failures surface as
 * `MalformedInput` through the same channel as dimension errors.
 */

use crate::core::errors::AnalysisError;
use crate::core::types::{AnalysisResult, Units};
use crate::model::Matrix;

/// Parse a comma-separated label list, trimming surrounding whitespace
pub fn parse_labels(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parse a comma-separated row of non-negative integers
pub fn parse_vector(name: &str, text: &str) -> AnalysisResult<Vec<Units>> {
    text.split(',')
        .map(|token| {
            token.trim().parse::<Units>().map_err(|_| {
                AnalysisError::MalformedInput(format!(
                    "{name}: entry {:?} is not a non-negative integer",
                    token.trim()
                ))
            })
        })
        .collect()
}

/// Parse a semicolon-separated sequence of rows
pub fn parse_matrix(name: &str, text: &str) -> AnalysisResult<Matrix> {
    text.split(';').map(|row| parse_vector(name, row)).collect()
}
