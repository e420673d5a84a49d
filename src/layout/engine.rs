//! Label layout computation
//!
//! Turns one `ProductRecord` plus a `LabelConfig` into the absolute position
//! of every visual element of a label: border, dividers, text baselines,
//! image slot and symbol frames. The computation is pure; nothing here
//! touches the filesystem or a drawing surface.

use log::debug;

use crate::catalog::ProductRecord;

use super::config::LabelConfig;
use super::error::LayoutError;
use super::types::{
    FontWeight, ImageSlot, LabelLayout, Point, Rect, Regions, Segment, SymbolOrientation,
    SymbolPlacement, TextAnchor, TextElement,
};

/// Vertical distance between the tops of consecutive provenance lines, mm
const PROVENANCE_LINE_STEP: f64 = 4.0;

/// Height reserved at the top of the left strip for the provenance lines, mm
const PROVENANCE_BAND: f64 = 10.0;

/// Height reserved at the bottom of the left strip for the caption, mm
const CAPTION_BAND: f64 = 6.0;

/// Minimum height left for the barcode between the two reserved bands, mm
const BARCODE_MIN_HEIGHT: f64 = 10.0;

/// Distance from the horizontal divider down to the deepest baseline of the
/// center-bottom text block, mm
const TEXT_BLOCK_DEPTH: f64 = 18.0;

/// Font size of the "0" glyph in the right-top box, points
const ZERO_GLYPH_SIZE: f64 = 14.0;

/// Maximum side of the "0" box, mm
const ZERO_BOX_MAX_SIDE: f64 = 12.0;

/// Compute the placement of every element of one label
///
/// The label is centered on a `page_width` x `page_height` mm page. Fails
/// when the record has no reference, when the label does not fit the page,
/// or when the configured strips and split leave no interior regions.
pub fn compute(
    record: &ProductRecord,
    config: &LabelConfig,
    page_width: f64,
    page_height: f64,
) -> Result<LabelLayout, LayoutError> {
    if record.reference.is_empty() {
        return Err(LayoutError::EmptyReference);
    }
    validate_geometry(config, page_width, page_height)?;

    let border = Rect::new(
        (page_width - config.label_width) / 2.0,
        (page_height - config.label_height) / 2.0,
        config.label_width,
        config.label_height,
    );

    // Divider coordinates partitioning the label
    let vx1 = border.x + config.left_strip_width;
    let vx2 = border.right() - config.right_strip_width;
    let hy = border.y + config.horizontal_split * config.label_height;

    debug!(
        "label for '{}': border at ({:.1}, {:.1}), dividers x={:.1}/{:.1}, y={:.1}",
        record.reference, border.x, border.y, vx1, vx2, hy
    );

    let dividers = [
        Segment::vertical(vx1, border.y, border.top()),
        Segment::vertical(vx2, border.y, border.top()),
        Segment::horizontal(hy, vx1, border.right()),
    ];

    let regions = Regions {
        left_strip: Rect::new(border.x, border.y, config.left_strip_width, border.height),
        center_top: Rect::new(vx1, hy, vx2 - vx1, border.top() - hy),
        center_bottom: Rect::new(vx1, border.y, vx2 - vx1, hy - border.y),
        right_top: Rect::new(vx2, hy, config.right_strip_width, border.top() - hy),
        right_bottom: Rect::new(vx2, border.y, config.right_strip_width, hy - border.y),
    };

    let m = config.content_margin;
    let mut texts = Vec::new();

    // Left strip: two provenance lines at the top, caption at the bottom
    let strip = regions.left_strip;
    texts.push(TextElement::new(
        config.provenance_line1.clone(),
        Point::new(strip.x + m, strip.top() - PROVENANCE_LINE_STEP),
        config.small_size,
        FontWeight::Regular,
        TextAnchor::Left,
    ));
    texts.push(TextElement::new(
        config.provenance_line2.clone(),
        Point::new(strip.x + m, strip.top() - 2.0 * PROVENANCE_LINE_STEP),
        config.small_size,
        FontWeight::Regular,
        TextAnchor::Left,
    ));
    texts.push(TextElement::new(
        record.reference.clone(),
        Point::new(strip.center().x, strip.y + m),
        config.small_size,
        FontWeight::Regular,
        TextAnchor::Center,
    ));

    let barcode = SymbolPlacement {
        frame: Rect::new(
            strip.x + m,
            strip.y + CAPTION_BAND,
            strip.width - 2.0 * m,
            strip.height - PROVENANCE_BAND - CAPTION_BAND,
        ),
        payload: record.reference.clone(),
        orientation: SymbolOrientation::Rotated90,
    };

    // Center-bottom text block: heading, rule, reference, description
    let text_x = regions.center_bottom.x + 3.0;
    let block_top = regions.center_bottom.top();
    texts.push(TextElement::new(
        "PRODUCT NAME",
        Point::new(text_x, block_top - 7.0),
        config.heading_size,
        FontWeight::Bold,
        TextAnchor::Left,
    ));
    let separator = Segment::horizontal(
        block_top - 9.0,
        regions.center_bottom.x + m,
        regions.center_bottom.right() - m,
    );
    texts.push(TextElement::new(
        record.reference.clone(),
        Point::new(text_x, block_top - 13.0),
        config.body_size,
        FontWeight::Bold,
        TextAnchor::Left,
    ));
    texts.push(TextElement::new(
        record.description.clone(),
        Point::new(text_x, block_top - TEXT_BLOCK_DEPTH),
        config.body_size,
        FontWeight::Regular,
        TextAnchor::Left,
    ));

    // Right-top: bordered box with the literal "0"
    let inner = regions.right_top.inset(m);
    let side = inner.width.min(inner.height).min(ZERO_BOX_MAX_SIDE);
    let zero_box = Rect::new(
        regions.right_top.center().x - side / 2.0,
        regions.right_top.center().y - side / 2.0,
        side,
        side,
    );
    texts.push(TextElement::new(
        "0",
        Point::new(zero_box.center().x, zero_box.center().y - 1.5),
        ZERO_GLYPH_SIZE,
        FontWeight::Bold,
        TextAnchor::Center,
    ));

    // Right-bottom: QR in the largest centered square
    let qr = SymbolPlacement {
        frame: regions.right_bottom.inset(m).largest_centered_square(),
        payload: record.reference.clone(),
        orientation: SymbolOrientation::Upright,
    };

    let image_frame = regions.center_top.inset(m);
    let image = ImageSlot {
        frame: image_frame,
        path: record.image_path.clone(),
        placeholder: TextElement::new(
            config.image_placeholder.clone(),
            image_frame.center(),
            config.body_size,
            FontWeight::Regular,
            TextAnchor::Center,
        ),
    };

    Ok(LabelLayout {
        border,
        dividers,
        regions,
        texts,
        separator,
        zero_box,
        barcode,
        qr,
        image,
    })
}

fn validate_geometry(
    config: &LabelConfig,
    page_width: f64,
    page_height: f64,
) -> Result<(), LayoutError> {
    if config.label_width > page_width || config.label_height > page_height {
        return Err(LayoutError::LabelExceedsPage {
            label_width: config.label_width,
            label_height: config.label_height,
            page_width,
            page_height,
        });
    }
    if config.left_strip_width <= 0.0 || config.right_strip_width <= 0.0 {
        return Err(LayoutError::invalid_geometry(
            "strip widths must be positive",
        ));
    }
    if config.left_strip_width + config.right_strip_width >= config.label_width {
        return Err(LayoutError::invalid_geometry(format!(
            "strips ({} + {} mm) leave no center column in a {} mm label",
            config.left_strip_width, config.right_strip_width, config.label_width
        )));
    }
    if config.horizontal_split <= 0.0 || config.horizontal_split >= 1.0 {
        return Err(LayoutError::invalid_geometry(format!(
            "horizontal split {} must lie strictly between 0 and 1",
            config.horizontal_split
        )));
    }
    // The text block and the left strip bands sit at fixed offsets; a label
    // too short for them would push baselines or the barcode past the border.
    let text_block_height = config.horizontal_split * config.label_height;
    if text_block_height < TEXT_BLOCK_DEPTH {
        return Err(LayoutError::invalid_geometry(format!(
            "text block is {:.1} mm tall but its lines need {} mm below the horizontal divider",
            text_block_height, TEXT_BLOCK_DEPTH
        )));
    }
    let strip_min = PROVENANCE_BAND + CAPTION_BAND + BARCODE_MIN_HEIGHT;
    if config.label_height < strip_min {
        return Err(LayoutError::invalid_geometry(format!(
            "label height {} mm is shorter than the {} mm the left strip needs",
            config.label_height, strip_min
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            reference: "ABC123".to_string(),
            description: "Widget".to_string(),
            image_path: None,
        }
    }

    fn layout() -> LabelLayout {
        compute(&record(), &LabelConfig::default(), 210.0, 297.0).unwrap()
    }

    #[test]
    fn test_border_centered_on_page() {
        let l = layout();
        assert_eq!(l.border.x, (210.0 - 140.0) / 2.0);
        assert_eq!(l.border.y, (297.0 - 95.0) / 2.0);
    }

    #[test]
    fn test_dividers_strictly_inside_border() {
        let l = layout();
        let [v1, v2, h] = l.dividers;
        assert!(v1.from.x > l.border.x && v1.from.x < l.border.right());
        assert!(v2.from.x > l.border.x && v2.from.x < l.border.right());
        assert!(v2.from.x > v1.from.x);
        assert!(h.from.y > l.border.y && h.from.y < l.border.top());
    }

    #[test]
    fn test_regions_do_not_overlap() {
        let r = layout().regions;
        let all = [
            r.left_strip,
            r.center_top,
            r.center_bottom,
            r.right_top,
            r.right_bottom,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in all.iter().skip(i + 1) {
                assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_regions_inside_border() {
        let l = layout();
        let r = l.regions;
        for region in [
            r.left_strip,
            r.center_top,
            r.center_bottom,
            r.right_top,
            r.right_bottom,
        ] {
            assert!(l.border.contains(&region), "{:?} escapes border", region);
        }
    }

    #[test]
    fn test_symbol_payloads_verbatim() {
        let l = layout();
        assert_eq!(l.barcode.payload, "ABC123");
        assert_eq!(l.qr.payload, "ABC123");
        assert_eq!(l.barcode.orientation, SymbolOrientation::Rotated90);
        assert_eq!(l.qr.orientation, SymbolOrientation::Upright);
    }

    #[test]
    fn test_symbol_frames_inside_their_regions() {
        let l = layout();
        assert!(l.regions.left_strip.contains(&l.barcode.frame));
        assert!(l.regions.right_bottom.contains(&l.qr.frame));
        assert_eq!(l.qr.frame.width, l.qr.frame.height);
    }

    #[test]
    fn test_zero_box_centered_in_right_top() {
        let l = layout();
        assert!(l.regions.right_top.contains(&l.zero_box));
        let (a, b) = (l.zero_box.center(), l.regions.right_top.center());
        assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
        let glyph = l.texts.iter().find(|t| t.content == "0").unwrap();
        assert_eq!(glyph.weight, FontWeight::Bold);
    }

    #[test]
    fn test_text_block_contents() {
        let l = layout();
        let contents: Vec<&str> = l.texts.iter().map(|t| t.content.as_str()).collect();
        assert!(contents.contains(&"PRODUCT NAME"));
        assert!(contents.contains(&"Widget"));
        // Reference appears twice: caption in the left strip and text block
        assert_eq!(contents.iter().filter(|c| **c == "ABC123").count(), 2);
    }

    #[test]
    fn test_empty_description_still_laid_out() {
        let rec = ProductRecord {
            description: String::new(),
            ..record()
        };
        let l = compute(&rec, &LabelConfig::default(), 210.0, 297.0).unwrap();
        assert!(l.texts.iter().any(|t| t.content.is_empty()));
    }

    #[test]
    fn test_placeholder_centered_in_image_frame() {
        let l = layout();
        assert_eq!(l.image.placeholder.position, l.image.frame.center());
        assert_eq!(l.image.placeholder.content, "Image not found");
        assert!(l.image.path.is_none());
    }

    #[test]
    fn test_empty_reference_rejected() {
        let rec = ProductRecord {
            reference: String::new(),
            ..record()
        };
        let err = compute(&rec, &LabelConfig::default(), 210.0, 297.0).unwrap_err();
        assert!(matches!(err, LayoutError::EmptyReference));
    }

    #[test]
    fn test_oversized_label_rejected() {
        let config = LabelConfig::default().with_label_size(250.0, 95.0);
        let err = compute(&record(), &config, 210.0, 297.0).unwrap_err();
        assert!(matches!(err, LayoutError::LabelExceedsPage { .. }));
    }

    #[test]
    fn test_strips_consuming_label_rejected() {
        let config = LabelConfig::default()
            .with_left_strip_width(80.0)
            .with_right_strip_width(80.0);
        let err = compute(&record(), &config, 210.0, 297.0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_short_label_rejected() {
        // 25 mm leaves no room for the text block or the strip bands
        let config = LabelConfig::default().with_label_size(140.0, 25.0);
        let err = compute(&record(), &config, 210.0, 297.0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_shallow_text_block_rejected() {
        // Tall enough label, but the split leaves under 18 mm for the text
        let config = LabelConfig::default().with_horizontal_split(0.1);
        let err = compute(&record(), &config, 210.0, 297.0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_degenerate_split_rejected() {
        for split in [0.0, 1.0, -0.2, 1.4] {
            let config = LabelConfig::default().with_horizontal_split(split);
            let err = compute(&record(), &config, 210.0, 297.0).unwrap_err();
            assert!(matches!(err, LayoutError::InvalidGeometry { .. }));
        }
    }

    #[test]
    fn test_invariants_hold_for_custom_geometry() {
        let config = LabelConfig::new()
            .with_label_size(100.0, 60.0)
            .with_left_strip_width(20.0)
            .with_right_strip_width(25.0)
            .with_horizontal_split(0.5);
        let l = compute(&record(), &config, 210.0, 297.0).unwrap();
        let [v1, v2, h] = l.dividers;
        assert!(v1.from.x > l.border.x && v2.from.x < l.border.right());
        assert!(h.from.y > l.border.y && h.from.y < l.border.top());
        assert!(l.regions.left_strip.contains(&l.barcode.frame));
        assert!(l.regions.right_bottom.contains(&l.qr.frame));
    }
}
