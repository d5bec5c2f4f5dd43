//! Error types and utilities for gdraw

use crate::types::VertexId;
use thiserror::Error;

/// Result type alias for gdraw operations
pub type Result<T> = std::result::Result<T, GDrawError>;

/// Main error type for gdraw operations
#[derive(Error, Debug)]
pub enum GDrawError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An edge, label, or colour refers to a vertex the graph does not define
    #[error("Unknown vertex {vertex} referenced by {context}")]
    UnknownVertex {
        vertex: VertexId,
        context: String,
    },

    /// A vertex was added twice
    #[error("Vertex {vertex} is already in the graph")]
    DuplicateVertex { vertex: VertexId },

    /// The output path has an extension no backend can write
    #[error("Unsupported output format: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// Drawing backend errors
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for configuration or graph data
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Serialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GDrawError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unknown-vertex error
    pub fn unknown_vertex(vertex: VertexId, context: impl Into<String>) -> Self {
        Self::UnknownVertex {
            vertex,
            context: context.into(),
        }
    }

    /// Create an unsupported-format error
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// The field a validation error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

// Error conversion implementations for external types

/// Convert from toml::de::Error to GDrawError
impl From<toml::de::Error> for GDrawError {
    fn from(err: toml::de::Error) -> Self {
        Self::config_with_source("TOML parsing error", err)
    }
}

/// Convert from toml::ser::Error to GDrawError
impl From<toml::ser::Error> for GDrawError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            message: "TOML serialization error".to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to GDrawError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for GDrawError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = GDrawError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));

        let vertex_error = GDrawError::unknown_vertex(7, "edge (3, 7)");
        assert_eq!(
            vertex_error.to_string(),
            "Unknown vertex 7 referenced by edge (3, 7)"
        );

        let format_error = GDrawError::unsupported_format("pdf");
        assert_eq!(format_error.to_string(), "Unsupported output format: 'pdf'");

        let validation_error = GDrawError::validation_field("must be positive", "dpi");
        assert!(validation_error.to_string().contains("Validation error"));
        assert_eq!(validation_error.field(), Some("dpi"));
    }

    #[test]
    fn test_error_with_source() {
        let render_error = GDrawError::render_with_source(
            "Failed to write image",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );

        assert!(render_error.to_string().contains("Render error"));
        assert!(render_error.source().is_some());
        assert!(GDrawError::render("no source").source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let gdraw_error: GDrawError = io_error.into();

        assert!(gdraw_error.to_string().contains("I/O error"));
        assert!(gdraw_error.source().is_some());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("dpi = ").unwrap_err();
        let gdraw_error: GDrawError = toml_error.into();

        assert!(matches!(gdraw_error, GDrawError::Config { .. }));
        assert!(gdraw_error.source().is_some());
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = GDrawError::config_with_source("Middle layer", root_error);
        let top_error = GDrawError::render_with_source("Top layer", middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;

        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert_eq!(error_count, 2);
        assert_eq!(current_error.to_string(), "Root cause");
    }
}
