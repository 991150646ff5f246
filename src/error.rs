//! Error types for the color_harmony library

use thiserror::Error;

/// Result type alias for color_harmony operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types for harmony analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No image data was provided
    #[error("No image data provided")]
    MissingInput,

    /// Image bytes could not be decoded
    #[error("Failed to decode image: {message}")]
    DecodeError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic processing error
    #[error("Processing error: {message}")]
    ProcessingError { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl AnalysisError {
    /// Create a decode error with context
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::DecodeError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a generic processing error
    pub fn processing(message: impl Into<String>) -> Self {
        Self::ProcessingError {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error was caused by the caller's input rather than
    /// a failure inside the pipeline
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::MissingInput | AnalysisError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::MissingInput => {
                "No image was provided. Please upload an image and try again.".to_string()
            }
            AnalysisError::DecodeError { .. } => {
                "Could not read the image. Please check the file format and try again.".to_string()
            }
            AnalysisError::InvalidParameter { parameter, value } => {
                format!("Invalid setting: {} = {}.", parameter, value)
            }
            _ => "Color analysis failed. Please try with a different image.".to_string(),
        }
    }
}
