//! Application state.
//!
//! The app owns the prepared plot and the configuration it was built with.
//! Neither changes while the window is open.

use crate::config::PlotConfig;
use crate::plot::ScatterPlot;

/// The window's application struct, handed to eframe.
pub struct ScatterApp {
    /// Records, extrema and colors to draw
    pub plot: ScatterPlot,
    /// Layout and text settings
    pub config: PlotConfig,
}

impl ScatterApp {
    /// Creates the app for an already prepared plot.
    pub fn new(plot: ScatterPlot, config: PlotConfig) -> Self {
        Self { plot, config }
    }
}
