//! Core types for the label layout engine

use std::path::PathBuf;

/// A 2D point in label space (millimeters, origin at the page's bottom-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge y-coordinate
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Shrink the rectangle by `margin` on every side
    pub fn inset(&self, margin: f64) -> Rect {
        Rect {
            x: self.x + margin,
            y: self.y + margin,
            width: (self.width - 2.0 * margin).max(0.0),
            height: (self.height - 2.0 * margin).max(0.0),
        }
    }

    /// Check if this rectangle fully contains another
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.top() <= self.top()
    }

    /// Check if the interiors of this rectangle and another overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }

    /// Largest rectangle of the given width/height ratio that fits inside
    /// this one, centered
    pub fn fit_centered(&self, aspect: f64) -> Rect {
        let (w, h) = if self.width / self.height > aspect {
            (self.height * aspect, self.height)
        } else {
            (self.width, self.width / aspect)
        };
        Rect {
            x: self.x + (self.width - w) / 2.0,
            y: self.y + (self.height - h) / 2.0,
            width: w,
            height: h,
        }
    }

    /// Largest square that fits inside this rectangle, centered
    pub fn largest_centered_square(&self) -> Rect {
        self.fit_centered(1.0)
    }
}

/// A straight line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn vertical(x: f64, y0: f64, y1: f64) -> Self {
        Self::new(Point::new(x, y0), Point::new(x, y1))
    }

    pub fn horizontal(y: f64, x0: f64, x1: f64) -> Self {
        Self::new(Point::new(x0, y), Point::new(x1, y))
    }
}

/// Font weight for a text element (builtin Helvetica family)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Horizontal anchoring of a text element around its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Position is the start of the baseline
    Left,
    /// Position is the midpoint of the baseline
    Center,
}

/// A positioned line of text, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    /// Baseline anchor position in millimeters
    pub position: Point,
    /// Font size in points
    pub size: f64,
    pub weight: FontWeight,
    pub anchor: TextAnchor,
}

impl TextElement {
    pub fn new(
        content: impl Into<String>,
        position: Point,
        size: f64,
        weight: FontWeight,
        anchor: TextAnchor,
    ) -> Self {
        Self {
            content: content.into(),
            position,
            size,
            weight,
            anchor,
        }
    }
}

/// Symbol orientation on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolOrientation {
    Upright,
    /// Rotated 90 degrees clockwise (bars run vertically)
    Rotated90,
}

/// Placement of a machine-readable symbol (barcode or QR)
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolPlacement {
    /// Bounding box the rendered symbol must fit inside
    pub frame: Rect,
    /// The exact string the symbol encodes
    pub payload: String,
    pub orientation: SymbolOrientation,
}

/// The image region: a frame plus the fallback drawn when the asset is missing
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlot {
    pub frame: Rect,
    pub path: Option<PathBuf>,
    /// Drawn centered in the frame when the asset cannot be loaded
    pub placeholder: TextElement,
}

/// The three content regions of a label, split into five drawable areas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regions {
    /// Full-height strip holding provenance text and the barcode
    pub left_strip: Rect,
    /// Image area above the horizontal divider
    pub center_top: Rect,
    /// Text block below the horizontal divider
    pub center_bottom: Rect,
    /// Bordered "0" box above the horizontal divider
    pub right_top: Rect,
    /// QR area below the horizontal divider
    pub right_bottom: Rect,
}

/// Fully computed placement of every visual element of one label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    /// Outer border rectangle
    pub border: Rect,
    /// Two vertical dividers and one horizontal divider, in that order
    pub dividers: [Segment; 3],
    pub regions: Regions,
    /// All free-standing text lines (provenance, caption, text block, "0")
    pub texts: Vec<TextElement>,
    /// Rule drawn under the "PRODUCT NAME" heading
    pub separator: Segment,
    /// Frame of the bordered box containing the literal "0"
    pub zero_box: Rect,
    pub barcode: SymbolPlacement,
    pub qr: SymbolPlacement,
    pub image: ImageSlot,
}
