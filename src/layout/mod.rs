//! Label layout engine
//!
//! Computes the absolute millimeter coordinates of every visual element of a
//! label (border, dividers, text baselines, image slot, barcode and QR
//! frames) without touching a drawing surface. The renderer consumes the
//! resulting [`LabelLayout`].

mod config;
mod engine;
mod error;
mod types;

pub use config::LabelConfig;
pub use engine::compute;
pub use error::LayoutError;
pub use types::{
    FontWeight, ImageSlot, LabelLayout, Point, Rect, Regions, Segment, SymbolOrientation,
    SymbolPlacement, TextAnchor, TextElement,
};
