//! Machine-readable symbol generation
//!
//! Thin integration over the `barcoders` and `qrcode` encoders. Both
//! functions return grayscale bitmaps that the renderer embeds at whatever
//! physical size the layout dictates; neither adds a prefix, suffix or
//! human-readable text to the payload.

use barcoders::sym::code128::Code128;
use image::{GrayImage, Luma};
use qrcode::QrCode;
use thiserror::Error;

/// Errors raised when an encoder rejects a payload
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("Code 128 encoding rejected '{payload}': {reason}")]
    Barcode { payload: String, reason: String },
    #[error("QR encoding rejected '{payload}': {reason}")]
    Qr { payload: String, reason: String },
}

/// Code 128 character set B selector
///
/// Consumed by the encoder to pick the character set covering the full
/// printable ASCII range; it is not part of the encoded data.
const CHARSET_B: char = '\u{0181}';

/// Quiet zone on each side of the barcode, in modules
const QUIET_ZONE_MODULES: u32 = 10;

/// Encode a payload as a Code 128 module strip
///
/// Bars are black on white, `module_width` pixels per module, `height`
/// pixels tall, with a quiet zone on both sides. The strip is generated
/// upright; the renderer rotates it when the layout calls for vertical bars.
pub fn code128_strip(
    payload: &str,
    module_width: u32,
    height: u32,
) -> Result<GrayImage, SymbolError> {
    let barcode =
        Code128::new(format!("{CHARSET_B}{payload}")).map_err(|e| SymbolError::Barcode {
            payload: payload.to_string(),
            reason: e.to_string(),
        })?;
    let modules = barcode.encode();

    let width = (modules.len() as u32 + 2 * QUIET_ZONE_MODULES) * module_width;
    let strip = GrayImage::from_fn(width, height, |x, _| {
        let module = x / module_width;
        let bar = module
            .checked_sub(QUIET_ZONE_MODULES)
            .and_then(|i| modules.get(i as usize))
            .copied()
            .unwrap_or(0);
        if bar == 1 {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });
    Ok(strip)
}

/// Encode a payload as a QR bitmap with a quiet zone
pub fn qr_bitmap(payload: &str) -> Result<GrayImage, SymbolError> {
    let code = QrCode::new(payload.as_bytes()).map_err(|e| SymbolError::Qr {
        payload: payload.to_string(),
        reason: e.to_string(),
    })?;
    Ok(code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(8, 8)
        .build())
}
