use std::sync::Arc;

use api::{Category, RoutineInput};
use once_cell::sync::Lazy;
use tiny_skia::{Pixmap, Transform};

use super::{canvas, encode_png, RenderError};
use crate::core::format::format_hours_label;
use crate::core::palette::{self, Rgb};

pub const CHART_WIDTH: u32 = 800;
pub const CHART_HEIGHT: u32 = 400;

/// Fixed y-axis top. Above 24 so an over-budget single bar stays visible.
pub const Y_AXIS_MAX_HOURS: f64 = 25.0;

const GRID_STEP_HOURS: f64 = 5.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 40.0;
const BAR_FILL_RATIO: f64 = 0.8;

const BACKGROUND: &str = "#0F1116";
const INK: &str = "#FFFFFF";

static FONTS: Lazy<Arc<usvg::fontdb::Database>> = Lazy::new(|| {
    #[allow(unused_mut)]
    let mut db = usvg::fontdb::Database::new();
    #[cfg(not(target_arch = "wasm32"))]
    db.load_system_fonts();
    Arc::new(db)
});

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: Category,
    /// Exactly the input value, never clipped.
    pub hours: f64,
    pub color: Rgb,
    pub x: f64,
    pub width: f64,
    /// Drawn height in pixels, clipped to the plot area.
    pub height_px: f64,
    /// `"7.0h"`, absent for zero-hour bars.
    pub label: Option<String>,
}

impl Bar {
    pub fn top(&self) -> f64 {
        baseline() - self.height_px
    }
}

/// One bar per category on a fixed 0–25 h axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
}

fn plot_width() -> f64 {
    f64::from(CHART_WIDTH) - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    f64::from(CHART_HEIGHT) - MARGIN_TOP - MARGIN_BOTTOM
}

fn baseline() -> f64 {
    MARGIN_TOP + plot_height()
}

fn y_for(hours: f64) -> f64 {
    baseline() - hours / Y_AXIS_MAX_HOURS * plot_height()
}

impl BarChart {
    pub fn layout(input: &RoutineInput) -> Self {
        let slot = plot_width() / Category::ALL.len() as f64;
        let width = slot * BAR_FILL_RATIO;

        let bars = input
            .iter()
            .enumerate()
            .map(|(index, (category, hours))| {
                let drawn = hours.min(Y_AXIS_MAX_HOURS);
                Bar {
                    category,
                    hours,
                    color: palette::color_for(category),
                    x: MARGIN_LEFT + slot * index as f64 + (slot - width) / 2.0,
                    width,
                    height_px: drawn / Y_AXIS_MAX_HOURS * plot_height(),
                    label: (hours > 0.0).then(|| format_hours_label(hours)),
                }
            })
            .collect();

        Self { bars }
    }

    pub fn to_svg(&self) -> String {
        let mut body = String::new();

        let mut tick = 0.0;
        while tick <= Y_AXIS_MAX_HOURS {
            let y = y_for(tick);
            body.push_str(&format!(
                "<line x1='{MARGIN_LEFT}' y1='{y:.2}' x2='{x2}' y2='{y:.2}' stroke='{INK}' stroke-opacity='0.3' stroke-dasharray='4 4'/>\n\
                 <text x='{tx}' y='{ty:.2}' fill='{INK}' font-size='11' text-anchor='end'>{tick}</text>\n",
                x2 = MARGIN_LEFT + plot_width(),
                tx = MARGIN_LEFT - 8.0,
                ty = y + 4.0,
            ));
            tick += GRID_STEP_HOURS;
        }

        for bar in &self.bars {
            let center = bar.x + bar.width / 2.0;
            body.push_str(&format!(
                "<rect x='{x:.2}' y='{y:.2}' width='{w:.2}' height='{h:.2}' fill='{fill}' fill-opacity='0.9' stroke='{INK}' stroke-width='0.5'/>\n\
                 <text x='{center:.2}' y='{ly:.2}' fill='{INK}' font-size='12' text-anchor='middle'>{name}</text>\n",
                x = bar.x,
                y = bar.top(),
                w = bar.width,
                h = bar.height_px,
                fill = bar.color.to_hex(),
                ly = baseline() + 20.0,
                name = bar.category.name(),
            ));
            if let Some(label) = &bar.label {
                body.push_str(&format!(
                    "<text x='{center:.2}' y='{y:.2}' fill='{INK}' font-size='12' font-weight='bold' text-anchor='middle'>{label}</text>\n",
                    y = (bar.top() - 6.0).max(MARGIN_TOP - 4.0),
                ));
            }
        }

        format!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='{CHART_WIDTH}' height='{CHART_HEIGHT}' viewBox='0 0 {CHART_WIDTH} {CHART_HEIGHT}' font-family='Inter, Helvetica, Arial, sans-serif'>\n\
             <rect width='{CHART_WIDTH}' height='{CHART_HEIGHT}' fill='{BACKGROUND}'/>\n\
             <text x='{title_x}' y='32' fill='{INK}' font-size='18' font-weight='bold' text-anchor='middle'>Daily Time Distribution</text>\n\
             <text x='18' y='{axis_y:.2}' fill='{INK}' font-size='12' font-weight='bold' text-anchor='middle' transform='rotate(-90 18 {axis_y:.2})'>Hours</text>\n\
             <line x1='{MARGIN_LEFT}' y1='{base:.2}' x2='{x2}' y2='{base:.2}' stroke='{INK}'/>\n\
             {body}</svg>",
            title_x = f64::from(CHART_WIDTH) / 2.0,
            axis_y = MARGIN_TOP + plot_height() / 2.0,
            base = baseline(),
            x2 = MARGIN_LEFT + plot_width(),
        )
    }

    /// Render through `usvg`/`resvg`. Text needs system fonts and is skipped
    /// on the web, where the SVG itself is shown instead.
    pub fn rasterize(&self) -> Result<Pixmap, RenderError> {
        let mut options = usvg::Options::default();
        options.fontdb = FONTS.clone();
        let tree = usvg::Tree::from_str(&self.to_svg(), &options)
            .map_err(|err| RenderError::Svg(err.to_string()))?;

        let mut pixmap = canvas(CHART_WIDTH, CHART_HEIGHT)?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
        Ok(pixmap)
    }

    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        encode_png(&self.rasterize()?)
    }
}
