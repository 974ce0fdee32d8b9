use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Category;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category level → Color32
// ---------------------------------------------------------------------------

/// Maps the levels of a categorical column to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    pub category: Category,
    mapping: BTreeMap<&'static str, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the category's levels.
    pub fn new(category: Category) -> Self {
        let levels = category.levels();
        let palette = generate_palette(levels.len());
        let mapping: BTreeMap<&'static str, Color32> =
            levels.iter().copied().zip(palette).collect();

        ColorMap {
            category,
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given level.
    pub fn color_for(&self, level: &str) -> Color32 {
        self.mapping
            .get(level)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_sizes() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(4).len(), 4);
    }

    #[test]
    fn every_level_gets_a_distinct_colour() {
        let cm = ColorMap::new(Category::Day);
        let colours: Vec<_> = Category::Day
            .levels()
            .iter()
            .map(|l| cm.color_for(l))
            .collect();
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_level_falls_back_to_default() {
        let cm = ColorMap::new(Category::Sex);
        assert_eq!(cm.color_for("Unknown"), Color32::GRAY);
    }
}
