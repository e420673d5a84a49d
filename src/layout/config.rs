//! Configuration for the label layout engine

/// Design constants for one label, all lengths in millimeters
///
/// The defaults describe a 140 x 95 mm label centered on an A4 page, split
/// into a full-height left strip (barcode), a center column (image over
/// text) and a right strip ("0" box over QR).
#[derive(Debug, Clone)]
pub struct LabelConfig {
    /// Label width
    pub label_width: f64,

    /// Label height
    pub label_height: f64,

    /// Width of the full-height left strip
    pub left_strip_width: f64,

    /// Width of the right strip
    pub right_strip_width: f64,

    /// Fraction of the label height at which the horizontal divider sits
    pub horizontal_split: f64,

    /// Inner margin between a region edge and its content
    pub content_margin: f64,

    /// First static line drawn at the top of the left strip
    pub provenance_line1: String,

    /// Second static line drawn under the first
    pub provenance_line2: String,

    /// Font size of the "PRODUCT NAME" heading, in points
    pub heading_size: f64,

    /// Font size of the reference and description lines, in points
    pub body_size: f64,

    /// Font size of small print (provenance, barcode caption), in points
    pub small_size: f64,

    /// Text drawn in the image area when the asset cannot be loaded
    pub image_placeholder: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            label_width: 140.0,
            label_height: 95.0,
            left_strip_width: 30.0,
            right_strip_width: 40.0,
            horizontal_split: 0.40,
            content_margin: 2.0,
            provenance_line1: "MADE IN PORTUGAL".to_string(),
            provenance_line2: "PRODUCTION LABEL".to_string(),
            heading_size: 10.0,
            body_size: 9.0,
            small_size: 6.0,
            image_placeholder: "Image not found".to_string(),
        }
    }
}

impl LabelConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label dimensions
    pub fn with_label_size(mut self, width: f64, height: f64) -> Self {
        self.label_width = width;
        self.label_height = height;
        self
    }

    /// Set the left strip width
    pub fn with_left_strip_width(mut self, width: f64) -> Self {
        self.left_strip_width = width;
        self
    }

    /// Set the right strip width
    pub fn with_right_strip_width(mut self, width: f64) -> Self {
        self.right_strip_width = width;
        self
    }

    /// Set the horizontal divider position as a fraction of the label height
    pub fn with_horizontal_split(mut self, split: f64) -> Self {
        self.horizontal_split = split;
        self
    }

    /// Set the inner content margin
    pub fn with_content_margin(mut self, margin: f64) -> Self {
        self.content_margin = margin;
        self
    }

    /// Set the two static provenance lines of the left strip
    pub fn with_provenance(
        mut self,
        line1: impl Into<String>,
        line2: impl Into<String>,
    ) -> Self {
        self.provenance_line1 = line1.into();
        self.provenance_line2 = line2.into();
        self
    }

    /// Set the placeholder text for a missing image asset
    pub fn with_image_placeholder(mut self, text: impl Into<String>) -> Self {
        self.image_placeholder = text.into();
        self
    }
}
