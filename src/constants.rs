//! Shared application-wide constants.
//! Centralizes default layout values and fixed drawing sizes used by the scene builder.

// Canvas defaults
/// Default canvas width in pixels.
pub const CANVAS_WIDTH: f32 = 1000.0;
/// Default canvas height in pixels.
pub const CANVAS_HEIGHT: f32 = 500.0;
/// Default layout unit in pixels; axes, ticks and the plot rectangle are laid out in multiples of it.
pub const UNIT: f32 = 50.0;
/// Extra width to the right of the canvas so legend labels are not clipped.
pub const LEGEND_MARGIN: f32 = 50.0;
/// Default diameter of a data point circle.
pub const POINT_DIAMETER: f32 = 10.0;

// Text
/// Default window and chart title.
pub const DEFAULT_TITLE: &str = "Scatter Plot";
/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.txt";
/// Default seed for category colors.
pub const DEFAULT_SEED: u64 = 500;
/// Font size for tick labels, point ids and legend entries.
pub const LABEL_FONT_SIZE: f32 = 10.0;
/// Font size for the chart title.
pub const TITLE_FONT_SIZE: f32 = 20.0;

// Axis decoration
/// Length of an arrowhead stroke along the axis.
pub const ARROW_LENGTH: f32 = 10.0;
/// Half the spread of an arrowhead across the axis.
pub const ARROW_HALF_WIDTH: f32 = 5.0;
/// Length of a tick mark.
pub const TICK_LENGTH: f32 = 10.0;
/// Offset of the axis-name and x tick labels below the x-axis.
pub const AXIS_LABEL_OFFSET: f32 = 20.0;
/// Offset of y tick labels to the left of the y-axis.
pub const Y_TICK_LABEL_OFFSET: f32 = 30.0;
/// Downward shift of a y tick label's baseline from its tick.
pub const Y_TICK_LABEL_DROP: f32 = 5.0;

// Legend
/// Side of a legend color swatch.
pub const SWATCH_SIZE: f32 = 10.0;
/// Gap between a swatch's left edge and its label.
pub const SWATCH_LABEL_GAP: f32 = 15.0;

/// Stroke width of axes, ticks and outlines.
pub const STROKE_WIDTH: f32 = 1.0;

/// Largest canvas side, in layout units, that a configuration may ask for.
pub const MAX_UNITS_PER_SIDE: f32 = 1000.0;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "SCATTER_PLOT_CONFIG";
