/*!
 * Matrix Shape Validation
 * Row-major per-process matrices and their well-formedness checks
 */

use crate::core::errors::AnalysisError;
use crate::core::types::{AnalysisResult, Units};

/// Row-major matrix: one row per process, one column per resource type
pub type Matrix = Vec<Vec<Units>>;

/// Verify a matrix has exactly `rows` rows of exactly `cols` columns each
pub fn ensure_shape(name: &str, matrix: &Matrix, rows: usize, cols: usize) -> AnalysisResult<()> {
    if matrix.len() != rows {
        return Err(AnalysisError::MalformedInput(format!(
            "{} matrix has {} rows, expected {} (one per process)",
            name,
            matrix.len(),
            rows
        )));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != cols {
            return Err(AnalysisError::MalformedInput(format!(
                "{} matrix row {} has {} columns, expected {} (one per resource)",
                name,
                i,
                row.len(),
                cols
            )));
        }
    }
    Ok(())
}

/// Verify a per-resource vector has exactly `cols` entries
pub fn ensure_width(name: &str, vector: &[Units], cols: usize) -> AnalysisResult<()> {
    if vector.len() != cols {
        return Err(AnalysisError::MalformedInput(format!(
            "{} vector has {} entries, expected {} (one per resource)",
            name,
            vector.len(),
            cols
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_accepts_rectangular() {
        let m: Matrix = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert!(ensure_shape("allocation", &m, 2, 3).is_ok());
    }

    #[test]
    fn test_shape_rejects_row_count() {
        let m: Matrix = vec![vec![1, 2]];
        let err = ensure_shape("allocation", &m, 2, 2).unwrap_err();
        assert!(err.to_string().contains("1 rows"));
    }

    #[test]
    fn test_shape_rejects_ragged_row() {
        let m: Matrix = vec![vec![1, 2], vec![3]];
        let err = ensure_shape("request", &m, 2, 2).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_width_rejects_short_vector() {
        assert!(ensure_width("available", &[1, 2], 3).is_err());
    }
}
