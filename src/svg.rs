//! SVG rendering of a [`Scene`].
//!
//! Produces a standalone SVG document as a string. Nothing is written to disk.

use crate::constants::STROKE_WIDTH;
use crate::scene::{DrawCommand, Scene, TextAnchor};
use std::fmt::Write as _;

/// Renders `scene` to an SVG document on a white background.
pub fn render(scene: &Scene) -> String {
    let width = scene.width.ceil().max(1.0) as u32;
    let height = scene.height.ceil().max(1.0) as u32;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    );
    let _ = writeln!(
        out,
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"#ffffff\" />"
    );

    for command in &scene.commands {
        match command {
            DrawCommand::Line { from, to, color } => {
                let _ = writeln!(
                    out,
                    "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"{STROKE_WIDTH}\" />",
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    color.to_hex()
                );
            }
            DrawCommand::Circle {
                center,
                radius,
                fill,
                outline,
            } => {
                let _ = writeln!(
                    out,
                    "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{STROKE_WIDTH}\" />",
                    center.x,
                    center.y,
                    radius,
                    fill.to_hex(),
                    outline.to_hex()
                );
            }
            DrawCommand::Rect {
                rect,
                fill,
                outline,
            } => {
                let _ = writeln!(
                    out,
                    "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{STROKE_WIDTH}\" />",
                    rect.min.x,
                    rect.min.y,
                    rect.width(),
                    rect.height(),
                    fill.to_hex(),
                    outline.to_hex()
                );
            }
            DrawCommand::Text {
                pos,
                anchor,
                text,
                size,
                color,
            } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                };
                let _ = writeln!(
                    out,
                    "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{size}\" fill=\"{}\" text-anchor=\"{anchor}\">{}</text>",
                    pos.x,
                    pos.y,
                    color.to_hex(),
                    escape_xml(text)
                );
            }
        }
    }

    let _ = writeln!(out, "</svg>");
    out
}

fn escape_xml(input: &str) -> String {
    let mut s = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&apos;"),
            _ => s.push(ch),
        }
    }
    s
}
