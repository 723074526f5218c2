//! Category colors.
//!
//! Each distinct category gets one random RGB color the first time it is
//! seen, drawn from a caller-supplied generator so a fixed seed always yields
//! the same palette. Every point then takes the color of its own category.

use rand::Rng;
use std::collections::HashMap;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Black, used for axes, outlines and text.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draws a color with every channel uniform in `0..255`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(0..255),
            rng.gen_range(0..255),
            rng.gen_range(0..255),
        )
    }

    /// `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(c: Rgb) -> Self {
        egui::Color32::from_rgb(c.r, c.g, c.b)
    }
}

/// Category to color table, kept in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    entries: Vec<(String, Rgb)>,
    index: HashMap<String, usize>,
}

impl ColorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the color for `category`, generating it on first sight.
    pub fn get_or_insert<R: Rng + ?Sized>(&mut self, category: &str, rng: &mut R) -> Rgb {
        if let Some(&idx) = self.index.get(category) {
            return self.entries[idx].1;
        }
        let color = Rgb::random(rng);
        log::debug!("Assigned {} to category {category:?}", color.to_hex());
        self.index.insert(category.to_string(), self.entries.len());
        self.entries.push((category.to_string(), color));
        color
    }

    /// Color of a known category.
    pub fn get(&self, category: &str) -> Option<Rgb> {
        self.index.get(category).map(|&idx| self.entries[idx].1)
    }

    /// Categories and colors in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.entries.iter().map(|(name, color)| (name.as_str(), *color))
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no category has been seen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the color table for `categories` and the parallel per-point colors.
pub fn assign_colors<R: Rng + ?Sized>(categories: &[String], rng: &mut R) -> (ColorTable, Vec<Rgb>) {
    let mut table = ColorTable::new();
    let point_colors = categories
        .iter()
        .map(|category| table.get_or_insert(category, rng))
        .collect();
    (table, point_colors)
}
