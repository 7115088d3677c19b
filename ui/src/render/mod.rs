//! Static images of a routine: a bar chart and a timeline strip.
//!
//! Both renderers split into a pure layout step (plain numbers, easy to
//! test) and a rasterization step producing a `tiny_skia::Pixmap`. Output is
//! deterministic for a given input and the static color table.

mod bar_chart;
mod timeline;

pub use bar_chart::{Bar, BarChart, CHART_HEIGHT, CHART_WIDTH, Y_AXIS_MAX_HOURS};
pub use timeline::{Segment, TimelineStrip, STRIP_HEIGHT, STRIP_WIDTH};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tiny_skia::Pixmap;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("chart markup rejected: {0}")]
    Svg(String),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

/// Encode an opaque pixmap as PNG.
///
/// Pixmap data is premultiplied; every renderer here paints an opaque
/// background first, so the bytes are plain RGBA.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.write_header()?.write_image_data(pixmap.data())?;
    }
    Ok(buffer)
}

/// `data:` URL suitable for an `img` source.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub(crate) fn canvas(width: u32, height: u32) -> Result<Pixmap, RenderError> {
    Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })
}
