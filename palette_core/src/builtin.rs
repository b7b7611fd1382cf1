//! The four Catppuccin flavours, embedded as a JSON palette table.

use crate::{PaletteError, PaletteSet};

const CATPPUCCIN_JSON: &str = include_str!("../data/catppuccin.json");

/// Latte, Frappé, Macchiato and Mocha, in that order.
pub fn catppuccin() -> Result<PaletteSet, PaletteError> {
    PaletteSet::from_json_str(CATPPUCCIN_JSON)
}
