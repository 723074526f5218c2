//! Axis ticks and value-to-pixel mapping.

use crate::error::{Axis, Error, Result};

/// One labelled graduation on an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Data value at this tick
    pub value: f64,
    /// Value formatted to one decimal place
    pub label: String,
}

/// Number of ticks that fit a pixel budget when one tick is placed per unit,
/// leaving two units free at each end: `floor((budget - 4 * unit) / unit) + 1`.
pub fn tick_count(pixel_budget: f32, unit: f32) -> usize {
    let steps = ((pixel_budget - 4.0 * unit) / unit).floor();
    if steps.is_finite() && steps >= 0.0 {
        (steps as usize).saturating_add(1)
    } else {
        0
    }
}

/// Evenly spaced ticks from `min` to `max` inclusive.
///
/// Fails with [`Error::InvalidConfig`] when fewer than two ticks fit the
/// axis, and with [`Error::DegenerateRange`] when the range is empty.
pub fn ticks(axis: Axis, min: f64, max: f64, count: usize) -> Result<Vec<Tick>> {
    if count < 2 {
        return Err(Error::InvalidConfig(format!(
            "{axis} axis has room for {count} ticks, at least 2 are needed"
        )));
    }
    if max <= min {
        return Err(Error::DegenerateRange { axis, value: min });
    }
    let step = (max - min) / (count - 1) as f64;
    Ok((0..count)
        .map(|i| {
            let value = min + i as f64 * step;
            Tick {
                value,
                label: format_tick(value),
            }
        })
        .collect())
}

/// Formats a tick value to one decimal place, without a negative zero.
pub fn format_tick(value: f64) -> String {
    let text = format!("{value:.1}");
    if text == "-0.0" {
        "0.0".to_string()
    } else {
        text
    }
}

/// Linear mapping from a data interval onto a pixel interval.
///
/// The pixel interval may be reversed, which is how the y-axis is flipped
/// for a top-left screen origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    domain_min: f64,
    domain_max: f64,
    range_start: f32,
    range_end: f32,
}

impl LinearMap {
    /// Creates a mapping; the domain must have a positive width.
    pub fn new(axis: Axis, domain: (f64, f64), range: (f32, f32)) -> Result<Self> {
        if domain.1 <= domain.0 {
            return Err(Error::DegenerateRange {
                axis,
                value: domain.0,
            });
        }
        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Maps a data value to a pixel coordinate.
    pub fn map(&self, value: f64) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_start + (t as f32) * (self.range_end - self.range_start)
    }
}
