//! Layout of a scatter plot as a list of draw commands.
//!
//! [`build`] is a pure function of the plot state and configuration. Its output
//! is consumed by the egui canvas and by the SVG writer, so neither surface
//! does any layout arithmetic of its own.
//!
//! Coordinates are canvas pixels with the origin at the top-left corner.

use crate::color::Rgb;
use crate::config::PlotConfig;
use crate::constants::{
    ARROW_HALF_WIDTH, ARROW_LENGTH, AXIS_LABEL_OFFSET, LABEL_FONT_SIZE, SWATCH_LABEL_GAP,
    SWATCH_SIZE, TICK_LENGTH, TITLE_FONT_SIZE, Y_TICK_LABEL_DROP, Y_TICK_LABEL_OFFSET,
};
use crate::error::{Axis, Result};
use crate::plot::ScatterPlot;
use crate::scale::{self, LinearMap};
use egui::{pos2, vec2, Pos2, Rect};

/// Horizontal alignment of a text run relative to its baseline point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the point
    Start,
    /// Text is centered on the point
    Middle,
}

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A straight stroke
    Line {
        /// Start point
        from: Pos2,
        /// End point
        to: Pos2,
        /// Stroke color
        color: Rgb,
    },
    /// A filled, outlined circle
    Circle {
        /// Center point
        center: Pos2,
        /// Radius in pixels
        radius: f32,
        /// Fill color
        fill: Rgb,
        /// Outline color
        outline: Rgb,
    },
    /// A filled, outlined axis-aligned rectangle
    Rect {
        /// Rectangle bounds
        rect: Rect,
        /// Fill color
        fill: Rgb,
        /// Outline color
        outline: Rgb,
    },
    /// A single line of text positioned by its baseline
    Text {
        /// Baseline anchor point
        pos: Pos2,
        /// Horizontal alignment
        anchor: TextAnchor,
        /// Content
        text: String,
        /// Font size in pixels
        size: f32,
        /// Text color
        color: Rgb,
    },
}

/// A laid-out plot: the surface size and its draw commands in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Surface width, legend margin included
    pub width: f32,
    /// Surface height
    pub height: f32,
    /// Commands in paint order
    pub commands: Vec<DrawCommand>,
}

/// Lays out axes, ticks, points, title and legend for `plot`.
///
/// Ticks are recomputed on every call. Fails only if an axis range or the
/// layout cannot produce at least two ticks.
pub fn build(plot: &ScatterPlot, config: &PlotConfig) -> Result<Scene> {
    let mut commands = Vec::new();
    push_axes(&mut commands, config);
    push_ticks(&mut commands, plot, config)?;
    push_points(&mut commands, plot, config)?;
    push_title(&mut commands, config);
    push_legend(&mut commands, plot, config);

    let [width, height] = config.window_size();
    Ok(Scene {
        width,
        height,
        commands,
    })
}

/// The rectangle data points are mapped into.
pub fn plot_rect(config: &PlotConfig) -> Rect {
    let u = config.unit;
    Rect::from_min_max(
        pos2(2.0 * u, 2.0 * u),
        pos2(config.canvas_width - 2.0 * u, config.canvas_height - 2.0 * u),
    )
}

fn line(from: Pos2, to: Pos2) -> DrawCommand {
    DrawCommand::Line {
        from,
        to,
        color: Rgb::BLACK,
    }
}

fn label(pos: Pos2, text: impl Into<String>) -> DrawCommand {
    DrawCommand::Text {
        pos,
        anchor: TextAnchor::Start,
        text: text.into(),
        size: LABEL_FONT_SIZE,
        color: Rgb::BLACK,
    }
}

fn push_axes(out: &mut Vec<DrawCommand>, config: &PlotConfig) {
    let (w, h, u) = (config.canvas_width, config.canvas_height, config.unit);
    let origin = pos2(u, h - u);

    // x-axis with an arrowhead pointing right
    let x_end = pos2(w - u, h - u);
    out.push(line(origin, x_end));
    out.push(line(x_end + vec2(-ARROW_LENGTH, ARROW_HALF_WIDTH), x_end));
    out.push(line(x_end + vec2(-ARROW_LENGTH, -ARROW_HALF_WIDTH), x_end));
    out.push(label(x_end + vec2(0.0, AXIS_LABEL_OFFSET), &config.x_name));

    // y-axis with an arrowhead pointing up
    let y_end = pos2(u, u);
    out.push(line(origin, y_end));
    out.push(line(y_end, y_end + vec2(ARROW_HALF_WIDTH, ARROW_LENGTH)));
    out.push(line(y_end, y_end + vec2(-ARROW_HALF_WIDTH, ARROW_LENGTH)));
    out.push(label(y_end - vec2(AXIS_LABEL_OFFSET, 0.0), &config.y_name));
}

fn push_ticks(out: &mut Vec<DrawCommand>, plot: &ScatterPlot, config: &PlotConfig) -> Result<()> {
    let (w, h, u) = (config.canvas_width, config.canvas_height, config.unit);
    let e = plot.extrema();

    let x_ticks = scale::ticks(Axis::X, e.x_min, e.x_max, scale::tick_count(w, u))?;
    for (i, tick) in x_ticks.into_iter().enumerate() {
        let at = pos2(2.0 * u + u * i as f32, h - u);
        out.push(line(at, at - vec2(0.0, TICK_LENGTH)));
        out.push(label(at + vec2(-TICK_LENGTH, AXIS_LABEL_OFFSET), tick.label));
    }

    let y_ticks = scale::ticks(Axis::Y, e.y_min, e.y_max, scale::tick_count(h, u))?;
    for (i, tick) in y_ticks.into_iter().enumerate() {
        let at = pos2(u, h - 2.0 * u - u * i as f32);
        out.push(line(at, at + vec2(TICK_LENGTH, 0.0)));
        out.push(label(
            at + vec2(-Y_TICK_LABEL_OFFSET, Y_TICK_LABEL_DROP),
            tick.label,
        ));
    }
    Ok(())
}

fn push_points(out: &mut Vec<DrawCommand>, plot: &ScatterPlot, config: &PlotConfig) -> Result<()> {
    let rect = plot_rect(config);
    let e = plot.extrema();
    let x_map = LinearMap::new(Axis::X, (e.x_min, e.x_max), (rect.left(), rect.right()))?;
    // Screen rows grow downward, so the y range runs bottom to top.
    let y_map = LinearMap::new(Axis::Y, (e.y_min, e.y_max), (rect.bottom(), rect.top()))?;

    let d = config.point_diameter;
    let data = plot.dataset();
    let points = data
        .xs()
        .iter()
        .zip(data.ys())
        .zip(data.ids())
        .zip(plot.point_colors());
    for (((&x, &y), id), &fill) in points {
        let center = pos2(x_map.map(x), y_map.map(y));
        out.push(DrawCommand::Circle {
            center,
            radius: d / 2.0,
            fill,
            outline: Rgb::BLACK,
        });
        out.push(label(center + vec2(d, d / 2.0), id.as_str()));
    }
    Ok(())
}

fn push_title(out: &mut Vec<DrawCommand>, config: &PlotConfig) {
    out.push(DrawCommand::Text {
        pos: pos2(config.canvas_width / 2.0, config.unit),
        anchor: TextAnchor::Middle,
        text: config.chart_title.clone(),
        size: TITLE_FONT_SIZE,
        color: Rgb::BLACK,
    });
}

fn push_legend(out: &mut Vec<DrawCommand>, plot: &ScatterPlot, config: &PlotConfig) {
    let u = config.unit;
    for (k, (category, fill)) in plot.colors().iter().enumerate() {
        let min = pos2(config.canvas_width - u, 1.5 * u + (u / 2.0) * k as f32);
        out.push(DrawCommand::Rect {
            rect: Rect::from_min_size(min, vec2(SWATCH_SIZE, SWATCH_SIZE)),
            fill,
            outline: Rgb::BLACK,
        });
        out.push(label(min + vec2(SWATCH_LABEL_GAP, SWATCH_SIZE), category));
    }
}
