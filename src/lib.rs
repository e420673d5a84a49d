//! Label Press - printable product label generation
//!
//! This library renders paginated PDF documents where every page is one
//! physical product label: a Code 128 barcode, a QR code, a product image
//! and descriptive text on a fixed millimeter grid. Both symbols encode the
//! product reference verbatim.
//!
//! # Example
//!
//! ```rust
//! use label_press::{generate_labels, ProductRecord};
//!
//! let record = ProductRecord::new("ABC123", "Widget");
//! let pdf = generate_labels(&record, 2).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

pub mod catalog;
pub mod layout;
pub mod renderer;
pub mod symbols;

pub use catalog::{Catalog, CatalogError, ProductRecord};
pub use layout::{LabelConfig, LabelLayout, LayoutError};
pub use renderer::PdfConfig;
pub use symbols::SymbolError;

use thiserror::Error;

/// Errors that can occur during label generation
#[derive(Debug, Error)]
pub enum RenderError {
    /// The request itself is malformed (zero copies)
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// Error during layout computation
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// A symbol encoder rejected the reference
    #[error("symbol error: {0}")]
    Symbol(#[from] SymbolError),

    /// Error during PDF serialization
    #[error("PDF generation error: {0}")]
    Pdf(String),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Label geometry and typography
    pub label: LabelConfig,
    /// Page and PDF output options
    pub pdf: PdfConfig,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label configuration
    pub fn with_label(mut self, config: LabelConfig) -> Self {
        self.label = config;
        self
    }

    /// Set the PDF configuration
    pub fn with_pdf(mut self, config: PdfConfig) -> Self {
        self.pdf = config;
        self
    }
}

/// One render request: a resolved product record plus a copy count
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub record: ProductRecord,
    /// Number of label pages to produce; must be at least 1
    pub copies: u32,
}

impl RenderRequest {
    pub fn new(record: ProductRecord, copies: u32) -> Self {
        Self { record, copies }
    }

    /// Render this request with default configuration
    pub fn render(&self) -> Result<Vec<u8>, RenderError> {
        generate_labels(&self.record, self.copies)
    }

    /// Render this request with custom configuration
    pub fn render_with_config(&self, config: &RenderConfig) -> Result<Vec<u8>, RenderError> {
        generate_labels_with_config(&self.record, self.copies, config)
    }
}

/// Generate a label document with default configuration
///
/// Produces exactly `copies` identical pages; `copies = 0` is rejected. The
/// returned bytes are a complete PDF, ready to write or stream.
pub fn generate_labels(record: &ProductRecord, copies: u32) -> Result<Vec<u8>, RenderError> {
    generate_labels_with_config(record, copies, &RenderConfig::default())
}

/// Generate a label document with custom configuration
///
/// # Example
///
/// ```rust
/// use label_press::{generate_labels_with_config, LabelConfig, ProductRecord, RenderConfig};
///
/// let config = RenderConfig::new()
///     .with_label(LabelConfig::new().with_provenance("MADE IN PORTUGAL", "BATCH 7"));
/// let record = ProductRecord::new("TBL-001", "Oak table");
/// let pdf = generate_labels_with_config(&record, 1, &config).unwrap();
/// assert!(pdf.starts_with(b"%PDF"));
/// ```
pub fn generate_labels_with_config(
    record: &ProductRecord,
    copies: u32,
    config: &RenderConfig,
) -> Result<Vec<u8>, RenderError> {
    let layout = layout::compute(
        record,
        &config.label,
        config.pdf.page_width,
        config.pdf.page_height,
    )?;
    renderer::render_document(&layout, copies, &config.pdf)
}
