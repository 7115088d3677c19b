use api::{Category, RoutineInput};
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

use super::{canvas, encode_png, RenderError};
use crate::core::palette::{self, Rgb};

pub const STRIP_WIDTH: u32 = 1200;
pub const STRIP_HEIGHT: u32 = 150;

/// Unused width narrower than this is treated as float noise, not filler.
const FILL_EPSILON: f64 = 1e-6;

/// One colored run of the strip. `category` is `None` for the trailing filler.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub category: Option<Category>,
    pub start: f64,
    pub width: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStrip {
    /// Hours the full width stands for: `max(24, total)`.
    pub scale_hours: f64,
    pub segments: Vec<Segment>,
}

impl TimelineStrip {
    pub fn layout(input: &RoutineInput) -> Self {
        let width = f64::from(STRIP_WIDTH);
        let scale_hours = input.total().max(api::routine::DAY_HOURS);
        let pixels_per_hour = width / scale_hours;

        let mut segments = Vec::with_capacity(Category::ALL.len() + 1);
        let mut cursor = 0.0;
        for (category, hours) in input.iter() {
            if hours <= 0.0 {
                continue;
            }
            let section = hours * pixels_per_hour;
            segments.push(Segment {
                category: Some(category),
                start: cursor,
                width: section,
                color: palette::color_for(category),
            });
            cursor += section;
        }

        if width - cursor > FILL_EPSILON {
            segments.push(Segment {
                category: None,
                start: cursor,
                width: width - cursor,
                color: palette::OTHERS,
            });
        }

        Self {
            scale_hours,
            segments,
        }
    }

    /// Paint the segments onto a white strip. Edges are snapped to whole
    /// pixels and shared by neighbours, and the last segment always reaches
    /// the right border, so fractional widths never leave uncovered columns.
    pub fn rasterize(&self) -> Result<Pixmap, RenderError> {
        let mut pixmap = canvas(STRIP_WIDTH, STRIP_HEIGHT)?;
        pixmap.fill(Color::WHITE);

        let last = self.segments.len().saturating_sub(1);
        for (index, segment) in self.segments.iter().enumerate() {
            let (x0, x1) = pixel_span(segment, index == last);
            let Some(rect) = Rect::from_ltrb(x0, 0.0, x1, STRIP_HEIGHT as f32) else {
                continue;
            };
            let Rgb(r, g, b) = segment.color;
            let mut paint = Paint::default();
            paint.set_color_rgba8(r, g, b, 255);
            paint.anti_alias = false;
            pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }

        Ok(pixmap)
    }

    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        encode_png(&self.rasterize()?)
    }
}

fn pixel_span(segment: &Segment, is_last: bool) -> (f32, f32) {
    let x0 = segment.start.round();
    let x1 = if is_last {
        f64::from(STRIP_WIDTH)
    } else {
        (segment.start + segment.width).round()
    };
    (x0 as f32, x1 as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(pixmap: &Pixmap, x: u32) -> Rgb {
        let px = pixmap.pixel(x, STRIP_HEIGHT / 2).unwrap();
        Rgb(px.red(), px.green(), px.blue())
    }

    #[test]
    fn under_budget_day_leaves_fallback_filler() {
        // 19h of 24h.
        let strip = TimelineStrip::layout(&RoutineInput::default());
        assert_eq!(strip.scale_hours, 24.0);

        let filler = strip.segments.last().unwrap();
        assert_eq!(filler.category, None);
        assert_eq!(filler.color, palette::OTHERS);
        assert!((filler.width - 1200.0 * 5.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn over_budget_scales_to_total_without_filler() {
        let input = RoutineInput::from_hours([12.0, 12.0, 6.0, 0.0, 0.0]);
        let strip = TimelineStrip::layout(&input);
        assert_eq!(strip.scale_hours, 30.0);
        assert_eq!(strip.segments.len(), 3);
        assert!(strip.segments.iter().all(|s| s.category.is_some()));
        assert!((strip.segments[0].width - 480.0).abs() < 1e-9);
    }

    #[test]
    fn empty_day_is_all_filler() {
        let strip = TimelineStrip::layout(&RoutineInput::zero());
        assert_eq!(strip.segments.len(), 1);
        assert_eq!(strip.segments[0].start, 0.0);
        assert_eq!(strip.segments[0].width, 1200.0);
    }

    #[test]
    fn raster_paints_categories_left_to_right() {
        let input = RoutineInput::from_hours([12.0, 0.0, 0.0, 0.0, 12.0]);
        let pixmap = TimelineStrip::layout(&input).rasterize().unwrap();
        assert_eq!(pixel(&pixmap, 10), palette::SLEEP);
        assert_eq!(pixel(&pixmap, 1190), palette::SOCIAL);
    }
}
