//! PDF rendering and pagination
//!
//! Draws a computed [`LabelLayout`] onto `printpdf` pages, one label per
//! page, `copies` times, then serializes the document to bytes. Symbols and
//! the image asset are prepared once before the page loop; every page is
//! drawn from the same prepared state, so all pages are identical.
//!
//! Stroke weight and color are set immediately before each stroked
//! primitive rather than inherited across regions, so no drawing step
//! depends on state left behind by an earlier one.

use std::io::{BufWriter, Cursor};

use image::{DynamicImage, GrayImage};
use log::{debug, warn};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point as PdfPoint, Px,
    Rect as PdfRect, Rgb,
};

use crate::layout::{
    FontWeight, LabelLayout, Rect, Segment, SymbolOrientation, TextAnchor, TextElement,
};
use crate::symbols;
use crate::RenderError;

use super::config::PdfConfig;

const PT_TO_MM: f64 = 0.352_777_78;

/// Approximate advance width of builtin Helvetica, as a fraction of the
/// font size. Used only to center short strings.
const HELVETICA_AVG_ADVANCE: f64 = 0.5;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Render `copies` identical label pages and serialize the document
///
/// `copies` must be at least 1; zero is an invocation error, never an empty
/// document. Symbol encoding failures and PDF serialization failures
/// propagate; only a missing image asset is recovered (placeholder text).
pub fn render_document(
    layout: &LabelLayout,
    copies: u32,
    config: &PdfConfig,
) -> Result<Vec<u8>, RenderError> {
    if copies == 0 {
        return Err(RenderError::InvalidRequest {
            reason: "copies must be at least 1".to_string(),
        });
    }

    // Encode each symbol once; every page embeds the same bitmaps.
    let barcode = symbols::code128_strip(
        &layout.barcode.payload,
        config.barcode_module_px,
        config.barcode_height_px,
    )?;
    let barcode = match layout.barcode.orientation {
        SymbolOrientation::Rotated90 => image::imageops::rotate90(&barcode),
        SymbolOrientation::Upright => barcode,
    };
    let qr = symbols::qr_bitmap(&layout.qr.payload)?;
    let qr = match layout.qr.orientation {
        SymbolOrientation::Rotated90 => image::imageops::rotate90(&qr),
        SymbolOrientation::Upright => qr,
    };
    let asset = load_asset(layout);

    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("Labels for {}", layout.barcode.payload),
        Mm(config.page_width as f32),
        Mm(config.page_height as f32),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
    };

    debug!(
        "rendering {} page(s) for '{}'",
        copies, layout.barcode.payload
    );

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    for copy in 0..copies {
        if copy > 0 {
            let (page, page_layer) = doc.add_page(
                Mm(config.page_width as f32),
                Mm(config.page_height as f32),
                "Layer 1",
            );
            layer = doc.get_page(page).get_layer(page_layer);
        }
        draw_label(&layer, layout, config, &fonts, asset.as_ref(), &barcode, &qr);
    }

    let mut buf = Vec::new();
    {
        let cursor = Cursor::new(&mut buf);
        let mut writer = BufWriter::new(cursor);
        doc.save(&mut writer)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
    }
    Ok(buf)
}

/// Load the image asset, degrading to `None` (placeholder) on any failure
fn load_asset(layout: &LabelLayout) -> Option<DynamicImage> {
    let path = layout.image.path.as_ref()?;
    match image::open(path) {
        Ok(img) => Some(img),
        Err(e) => {
            warn!(
                "image asset '{}' could not be loaded ({}); drawing placeholder",
                path.display(),
                e
            );
            None
        }
    }
}

/// Draw one complete label onto a page layer
fn draw_label(
    layer: &PdfLayerReference,
    layout: &LabelLayout,
    config: &PdfConfig,
    fonts: &Fonts,
    asset: Option<&DynamicImage>,
    barcode: &GrayImage,
    qr: &GrayImage,
) {
    stroke_rect(layer, &layout.border, config.border_weight);
    for divider in &layout.dividers {
        stroke_segment(layer, divider, config.divider_weight);
    }
    stroke_segment(layer, &layout.separator, config.separator_weight);
    stroke_rect(layer, &layout.zero_box, config.divider_weight);

    for text in &layout.texts {
        draw_text(layer, text, fonts);
    }

    match asset {
        Some(img) => embed_asset(layer, img, &layout.image.frame),
        None => draw_text(layer, &layout.image.placeholder, fonts),
    }

    embed_bitmap(layer, barcode, &layout.barcode.frame);
    embed_bitmap(layer, qr, &layout.qr.frame);
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn stroke_rect(layer: &PdfLayerReference, rect: &Rect, weight: f64) {
    layer.set_outline_color(black());
    layer.set_outline_thickness(weight as f32);
    layer.add_rect(
        PdfRect::new(
            Mm(rect.x as f32),
            Mm(rect.y as f32),
            Mm(rect.right() as f32),
            Mm(rect.top() as f32),
        )
        .with_mode(PaintMode::Stroke),
    );
}

fn stroke_segment(layer: &PdfLayerReference, segment: &Segment, weight: f64) {
    layer.set_outline_color(black());
    layer.set_outline_thickness(weight as f32);
    layer.add_line(Line {
        points: vec![
            (
                PdfPoint::new(Mm(segment.from.x as f32), Mm(segment.from.y as f32)),
                false,
            ),
            (
                PdfPoint::new(Mm(segment.to.x as f32), Mm(segment.to.y as f32)),
                false,
            ),
        ],
        is_closed: false,
    });
}

fn draw_text(layer: &PdfLayerReference, text: &TextElement, fonts: &Fonts) {
    if text.content.is_empty() {
        return;
    }
    let font = match text.weight {
        FontWeight::Regular => &fonts.regular,
        FontWeight::Bold => &fonts.bold,
    };
    let x = match text.anchor {
        TextAnchor::Left => text.position.x,
        TextAnchor::Center => text.position.x - approx_width_mm(&text.content, text.size) / 2.0,
    };
    layer.use_text(
        &text.content,
        text.size as f32,
        Mm(x as f32),
        Mm(text.position.y as f32),
        font,
    );
}

fn approx_width_mm(content: &str, size_pt: f64) -> f64 {
    content.chars().count() as f64 * size_pt * HELVETICA_AVG_ADVANCE * PT_TO_MM
}

/// Embed a grayscale symbol bitmap, scaled to fit `frame` with the bitmap's
/// aspect ratio preserved and centered
fn embed_bitmap(layer: &PdfLayerReference, bitmap: &GrayImage, frame: &Rect) {
    let (w, h) = bitmap.dimensions();
    if w == 0 || h == 0 || frame.width <= 0.0 || frame.height <= 0.0 {
        return;
    }
    let target = frame.fit_centered(w as f64 / h as f64);
    let image = Image::from(ImageXObject {
        width: Px(w as usize),
        height: Px(h as usize),
        color_space: ColorSpace::Greyscale,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: bitmap.as_raw().clone(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });
    place_image(layer, image, w, &target);
}

/// Embed the product image, scaled to fit `frame` preserving aspect ratio
fn embed_asset(layer: &PdfLayerReference, img: &DynamicImage, frame: &Rect) {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    if w == 0 || h == 0 || frame.width <= 0.0 || frame.height <= 0.0 {
        return;
    }
    let target = frame.fit_centered(w as f64 / h as f64);
    let image = Image::from(ImageXObject {
        width: Px(w as usize),
        height: Px(h as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: rgb.into_raw(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });
    place_image(layer, image, w, &target);
}

/// Position an image so its physical width equals the target rectangle
///
/// The image DPI is derived from the pixel width against the target width;
/// since the target preserves the bitmap's aspect ratio, the height lands on
/// the target height as well.
fn place_image(layer: &PdfLayerReference, image: Image, pixel_width: u32, target: &Rect) {
    let dpi = pixel_width as f64 / (target.width / 25.4);
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(target.x as f32)),
            translate_y: Some(Mm(target.y as f32)),
            dpi: Some(dpi as f32),
            ..Default::default()
        },
    );
}
