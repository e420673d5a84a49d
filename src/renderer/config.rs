//! Configuration for PDF output

/// Configuration options for the PDF renderer
///
/// Page dimensions are millimeters; line weights are points, matching the
/// units the underlying PDF primitives take.
#[derive(Debug, Clone)]
pub struct PdfConfig {
    /// Page width (default A4 portrait)
    pub page_width: f64,

    /// Page height (default A4 portrait)
    pub page_height: f64,

    /// Stroke weight of the outer border, in points
    pub border_weight: f64,

    /// Stroke weight of the divider lines and the "0" box, in points
    pub divider_weight: f64,

    /// Stroke weight of the rule under the heading, in points
    pub separator_weight: f64,

    /// Pixels per Code 128 module in the generated strip
    pub barcode_module_px: u32,

    /// Pixel height of the generated Code 128 strip before rotation
    pub barcode_height_px: u32,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            border_weight: 1.0,
            divider_weight: 0.5,
            separator_weight: 1.5,
            barcode_module_px: 2,
            barcode_height_px: 120,
        }
    }
}

impl PdfConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page dimensions in millimeters
    pub fn with_page_size(mut self, width: f64, height: f64) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Set the border stroke weight in points
    pub fn with_border_weight(mut self, weight: f64) -> Self {
        self.border_weight = weight;
        self
    }

    /// Set the divider stroke weight in points
    pub fn with_divider_weight(mut self, weight: f64) -> Self {
        self.divider_weight = weight;
        self
    }

    /// Set the pixel resolution of the generated barcode strip
    pub fn with_barcode_resolution(mut self, module_px: u32, height_px: u32) -> Self {
        self.barcode_module_px = module_px;
        self.barcode_height_px = height_px;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PdfConfig::default();
        assert_eq!(config.page_width, 210.0);
        assert_eq!(config.page_height, 297.0);
        assert_eq!(config.border_weight, 1.0);
        assert_eq!(config.divider_weight, 0.5);
        assert_eq!(config.separator_weight, 1.5);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PdfConfig::new()
            .with_page_size(100.0, 150.0)
            .with_border_weight(2.0)
            .with_barcode_resolution(3, 200);

        assert_eq!(config.page_width, 100.0);
        assert_eq!(config.page_height, 150.0);
        assert_eq!(config.border_weight, 2.0);
        assert_eq!(config.barcode_module_px, 3);
        assert_eq!(config.barcode_height_px, 200);
    }
}
