//! Terminal QR rendering for the `qr` command (§6). Uses the teacher's
//! `qrcodegen` matrix generation (`src/qr.rs`) but renders to Unicode
//! half-block glyphs for a terminal instead of SVG — there is no SVG
//! consumer in a CLI — matching
//! `examples/original_source/ward/qr.go`'s `qrc.PrintAA` intent.

use qrcodegen::{QrCode, QrCodeEcc};

use crate::error::{Error, Result};

/// Render `text` as a QR code, two source rows per printed line (each
/// printed row uses the upper/lower half-block characters to pack two
/// pixel rows into one character cell).
pub fn render_terminal(text: &str) -> Result<String> {
    let qr = QrCode::encode_text(text, QrCodeEcc::Medium)
        .map_err(|_| Error::InvalidSettings("text too long to encode as a QR code".into()))?;

    let size = qr.size();
    let border = 2;
    let mut out = String::new();

    let module_at = |x: i32, y: i32| -> bool {
        if x < 0 || y < 0 || x >= size || y >= size {
            false
        } else {
            qr.get_module(x, y)
        }
    };

    let mut y = -border;
    while y < size + border {
        for x in -border..size + border {
            let top = module_at(x, y);
            let bottom = module_at(x, y + 1);
            let glyph = match (top, bottom) {
                (true, true) => '\u{2588}',  // full block
                (true, false) => '\u{2580}', // upper half
                (false, true) => '\u{2584}', // lower half
                (false, false) => ' ',
            };
            out.push(glyph);
        }
        out.push('\n');
        y += 2;
    }

    Ok(out)
}
