//! # Scatter Plot
//!
//! A desktop viewer that reads a small comma-separated data file and draws it
//! as a scatter plot. Each row is `category,id,x,y` after a header line.
//!
//! ## Features
//! - Axes with arrowheads, axis names and evenly spaced tick labels
//! - One circle per record, labelled with its id
//! - One seeded-random color per category, shown in a legend
//! - Layout computed as plain draw commands, painted by egui or written as SVG

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod color;
mod config;
mod constants;
mod data;
mod error;
mod plot;
mod scale;
mod scene;
mod svg;
mod ui;

// Re-export public types and functions
pub use color::{assign_colors, ColorTable, Rgb};
pub use config::PlotConfig;
pub use data::{Dataset, Extrema, Record};
pub use error::{Axis, Error, Result};
pub use plot::ScatterPlot;
pub use scale::{format_tick, tick_count, ticks, LinearMap, Tick};
pub use scene::{build as build_scene, plot_rect, DrawCommand, Scene, TextAnchor};
pub use svg::render as render_svg;
pub use ui::{paint_scene, ScatterApp};

/// Loads the configured data file and runs the plot window until it is closed.
///
/// All data errors are reported before the window opens.
///
/// # Example
///
/// ```no_run
/// use scatter_plot::{run_app, PlotConfig};
///
/// fn main() -> Result<(), scatter_plot::Error> {
///     run_app(PlotConfig::default())
/// }
/// ```
pub fn run_app(config: PlotConfig) -> Result<()> {
    let plot = ScatterPlot::load(&config)?;
    log::info!(
        "Showing {} points in {} categories",
        plot.dataset().len(),
        plot.colors().len()
    );

    let title = config.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(title.as_str())
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ScatterApp::new(plot, config)))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_app_reports_missing_file_before_opening_window() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlotConfig {
            data_path: dir.path().join("missing.txt"),
            ..PlotConfig::default()
        };
        assert!(matches!(run_app(config), Err(Error::Io { .. })));
    }

    #[test]
    fn test_run_app_rejects_invalid_layout() {
        let config = PlotConfig {
            unit: -1.0,
            ..PlotConfig::default()
        };
        assert!(matches!(run_app(config), Err(Error::InvalidConfig(_))));
    }
}
