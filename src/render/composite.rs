//! Rasterize the overlay document and blend it over the base image.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use usvg::fontdb;

use crate::error::CaptionError;

/// Fonts available to the overlay's text elements. Loading the system fonts
/// is expensive, so this runs once at startup and the database is shared by
/// all requests.
pub fn load_fontdb() -> Arc<fontdb::Database> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
}

/// Composite the overlay SVG over the JPEG at `path` and encode the result
/// as PNG.
pub fn composite_caption(
    path: &Path,
    overlay_svg: &str,
    fontdb: Arc<fontdb::Database>,
) -> Result<Vec<u8>, CaptionError> {
    let mut base = ImageReader::open(path)?.decode()?.to_rgba8();
    let (width, height) = base.dimensions();

    let opts = usvg::Options {
        fontdb,
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(overlay_svg.as_bytes(), &opts)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CaptionError::Render("failed to allocate overlay pixmap".to_string()))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    over_in_place(&mut base, pixmap.data());

    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(base).write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Alpha-over blend of a premultiplied RGBA8 overlay onto a straight-alpha
/// base image, in place.
fn over_in_place(base: &mut RgbaImage, overlay_premul: &[u8]) {
    for (dst, src) in base
        .chunks_exact_mut(4)
        .zip(overlay_premul.chunks_exact(4))
    {
        let sa = u16::from(src[3]);
        if sa == 0 {
            continue;
        }

        let inv = 255 - sa;
        let da = u16::from(dst[3]);
        let out_a = src[3].saturating_add(mul_div255(da, inv));

        for i in 0..3 {
            // Premultiply dst, blend, then unpremultiply against the new alpha.
            let dc = mul_div255(u16::from(dst[i]), da);
            let premul = u32::from(src[i]) + u32::from(mul_div255(u16::from(dc), inv));
            dst[i] = unpremultiply(premul.min(255) as u8, out_a);
        }
        dst[3] = out_a;
    }
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn unpremultiply(c: u8, a: u8) -> u8 {
    if a == 0 {
        0
    } else {
        ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
    }
}
