//! The loaded plot state: records, extrema and colors.
//!
//! Everything here is computed once at startup and never mutated afterwards.

use crate::color::{assign_colors, ColorTable, Rgb};
use crate::config::PlotConfig;
use crate::data::{Dataset, Extrema};
use crate::error::{Axis, Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A dataset ready to be drawn.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    dataset: Dataset,
    extrema: Extrema,
    colors: ColorTable,
    point_colors: Vec<Rgb>,
}

impl ScatterPlot {
    /// Prepares a dataset for drawing, taking category colors from `rng`.
    ///
    /// Fails when the dataset is empty or either axis has zero range.
    pub fn new<R: Rng + ?Sized>(dataset: Dataset, rng: &mut R) -> Result<Self> {
        let extrema = Extrema::of(&dataset).ok_or(Error::EmptyData)?;
        if extrema.x_max <= extrema.x_min {
            return Err(Error::DegenerateRange {
                axis: Axis::X,
                value: extrema.x_min,
            });
        }
        if extrema.y_max <= extrema.y_min {
            return Err(Error::DegenerateRange {
                axis: Axis::Y,
                value: extrema.y_min,
            });
        }
        let (colors, point_colors) = assign_colors(dataset.categories(), rng);
        log::debug!(
            "Prepared {} points in {} categories",
            dataset.len(),
            colors.len()
        );
        Ok(Self {
            dataset,
            extrema,
            colors,
            point_colors,
        })
    }

    /// Reads the configured data file and seeds colors from the configured seed.
    pub fn load(config: &PlotConfig) -> Result<Self> {
        config.validate()?;
        let dataset = Dataset::from_path(&config.data_path)?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        Self::new(dataset, &mut rng)
    }

    /// The records.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Observed extrema.
    pub fn extrema(&self) -> Extrema {
        self.extrema
    }

    /// Category colors in first-occurrence order.
    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// Color of each record, parallel to the dataset.
    pub fn point_colors(&self) -> &[Rgb] {
        &self.point_colors
    }
}
