//! PDF renderer and pagination driver
//!
//! Consumes a [`crate::layout::LabelLayout`] and produces the finished
//! multi-page document as bytes.

mod config;
mod pdf;

pub use config::PdfConfig;
pub use pdf::render_document;
