//! Error types for the label layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The product record carries no reference to encode
    #[error("product record has an empty reference")]
    EmptyReference,

    /// A divider would fall on or outside the outer border
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// The label does not fit on the configured page
    #[error("label {label_width}x{label_height} mm does not fit on a {page_width}x{page_height} mm page")]
    LabelExceedsPage {
        label_width: f64,
        label_height: f64,
        page_width: f64,
        page_height: f64,
    },
}

impl LayoutError {
    /// Create an invalid geometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}
