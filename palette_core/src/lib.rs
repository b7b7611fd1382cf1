use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub mod builtin;
pub mod color;
pub mod error;
pub mod header;
pub mod output;
pub mod palette;

pub use color::{Color, PackedColor, pack};
pub use error::PaletteError;
pub use header::{emit_combined, emit_single, write_combined, write_single};
pub use output::{GenerateConfig, generate_all};
pub use palette::{NamedColor, Palette};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// The palettes of one generation run, in output order.
///
/// Only constructed through [`PaletteSet::new`], so every set in circulation
/// has unique identifiers and the same color names in every palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteSet {
    palettes: Vec<Palette>,
}

/// On-disk shape; checked by `PaletteSet::new` after decoding.
#[derive(Deserialize)]
struct PaletteTable {
    palettes: Vec<Palette>,
}

impl PaletteSet {
    pub fn new(palettes: Vec<Palette>) -> Result<Self, PaletteError> {
        let first = palettes.first().ok_or(PaletteError::EmptyPaletteSet)?;
        let expected = first.color_names();

        let mut idents = BTreeSet::new();
        for p in &palettes {
            p.validate()?;

            if !idents.insert(p.identifier.to_uppercase()) {
                return Err(PaletteError::DuplicateIdentifier {
                    identifier: p.identifier.to_uppercase(),
                });
            }

            let found = p.color_names();
            if found != expected {
                return Err(PaletteError::MismatchedColors {
                    palette: p.identifier.clone(),
                    expected,
                    found,
                });
            }
        }

        Ok(Self { palettes })
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn get(&self, identifier: &str) -> Option<&Palette> {
        self.palettes
            .iter()
            .find(|p| p.identifier.eq_ignore_ascii_case(identifier))
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn from_json_str(text: &str) -> Result<Self, PaletteError> {
        let table = serde_json::from_str::<PaletteTable>(text)?;
        Self::new(table.palettes)
    }

    /// Save the palette table to JSON.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize palettes to json")?;
        fs::write(path.as_ref(), json).context("write palette json file")?;
        Ok(())
    }

    /// Load a palette table from JSON.
    pub fn load_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path.as_ref()).context("read palette json file")?;
        let set = Self::from_json_str(&text).context("parse palette json")?;
        Ok(set)
    }
}

impl<'a> IntoIterator for &'a PaletteSet {
    type Item = &'a Palette;
    type IntoIter = std::slice::Iter<'a, Palette>;

    fn into_iter(self) -> Self::IntoIter {
        self.palettes.iter()
    }
}
