//! Error types for the garment_colors library

use thiserror::Error;

/// Result type alias for garment_colors operations
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Error types for dominant-color extraction
///
/// Only misconfiguration surfaces to callers. Image-content-driven
/// conditions (too few usable pixels, every merged group below the
/// probability floor) are represented as an empty output list, and
/// segmentation failures degrade to a full-frame foreground mask.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Foreground/background separation failed
    #[error("Segmentation failed during {operation}")]
    Segmentation {
        operation: String,
        #[source]
        source: Option<opencv::Error>,
    },
}

impl ExtractionError {
    /// Create an invalid-parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a segmentation error with OpenCV context
    pub fn segmentation(operation: impl Into<String>, source: opencv::Error) -> Self {
        Self::Segmentation {
            operation: operation.into(),
            source: Some(source),
        }
    }

    /// Create a segmentation error without an underlying OpenCV error
    pub fn segmentation_degenerate(operation: impl Into<String>) -> Self {
        Self::Segmentation {
            operation: operation.into(),
            source: None,
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Segmentation failures are always recoverable: the pipeline falls
    /// back to treating the entire region as foreground.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExtractionError::Segmentation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ExtractionError::invalid_parameter("cluster_count", 0);
        assert_eq!(err.to_string(), "Invalid parameter: cluster_count = 0");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_segmentation_recoverable() {
        let err = ExtractionError::segmentation_degenerate("seed rectangle");
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("seed rectangle"));
    }
}
