use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::{Color, PaletteError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    pub rgb: Color,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, rgb: Color) -> Self {
        Self {
            name: name.into(),
            rgb,
        }
    }
}

/// One flavour: a display name, a short identifier and its colors in
/// emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Shown in banner comments, e.g. "Frappé".
    pub name: String,
    /// Lowercase id used in identifiers and file names, e.g. "frappe".
    pub identifier: String,
    pub colors: Vec<NamedColor>,
}

impl Palette {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: identifier.into(),
            colors: Vec::new(),
        }
    }

    /// Builder-style append, keeps insertion order.
    pub fn with_color(mut self, name: impl Into<String>, rgb: Color) -> Self {
        self.colors.push(NamedColor::new(name, rgb));
        self
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.rgb)
    }

    pub fn color_names(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.name.clone()).collect()
    }

    /// Non-empty, and no two colors share a name once uppercased.
    pub fn validate(&self) -> Result<(), PaletteError> {
        if self.colors.is_empty() {
            return Err(PaletteError::EmptyPalette {
                palette: self.identifier.clone(),
            });
        }

        let mut seen = BTreeSet::new();
        for c in &self.colors {
            if !seen.insert(c.name.to_uppercase()) {
                return Err(PaletteError::DuplicateColor {
                    palette: self.identifier.clone(),
                    color: c.name.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let p = Palette::new("Mocha", "mocha").with_color("base", Color::new(30, 30, 46));
        assert_eq!(p.color("BASE"), Some(Color::new(30, 30, 46)));
        assert_eq!(p.color("text"), None);
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = Palette::new("Mocha", "mocha").validate().unwrap_err();
        assert!(matches!(err, PaletteError::EmptyPalette { ref palette } if palette == "mocha"));
    }

    #[test]
    fn duplicate_color_names_are_rejected() {
        let p = Palette::new("Mocha", "mocha")
            .with_color("base", Color::new(30, 30, 46))
            .with_color("Base", Color::new(0, 0, 0));

        let err = p.validate().unwrap_err();
        assert!(matches!(err, PaletteError::DuplicateColor { ref color, .. } if color == "Base"));
    }

    #[test]
    fn keeps_insertion_order() {
        let p = Palette::new("Latte", "latte")
            .with_color("text", Color::new(76, 79, 105))
            .with_color("base", Color::new(239, 241, 245));
        assert_eq!(p.color_names(), vec!["text", "base"]);
    }
}
