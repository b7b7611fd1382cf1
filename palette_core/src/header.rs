//! Renders palettes as `#define` headers for TFT_eSPI style display code.
//!
//! Two layouts:
//! - combined: every palette in one file, identifiers carry the palette id
//!   (`CATPPUCCIN_MOCHA_BASE`) so flavours can coexist;
//! - single: one palette per file with short identifiers (`CATPPUCCIN_BASE`).
//!
//! Validation runs before any text is produced, so a failing call never
//! leaves half a header in the sink.

use log::debug;
use std::collections::BTreeSet;
use std::io::Write;

use crate::{PackedColor, Palette, PaletteError};

pub const IDENT_PREFIX: &str = "CATPPUCCIN_";

pub const COMBINED_BANNER_WIDTH: usize = 47;
pub const COMBINED_IDENT_WIDTH: usize = 25;
pub const SINGLE_BANNER_WIDTH: usize = 32;
pub const SINGLE_IDENT_WIDTH: usize = 10;

/// One `#define` waiting to be rendered. `suffix` is the part after
/// [`IDENT_PREFIX`]; the column width applies to it alone.
#[derive(Debug)]
struct Define {
    suffix: String,
    value: PackedColor,
}

pub fn combined_identifier(palette: &Palette, color: &str) -> String {
    format!("{IDENT_PREFIX}{}", combined_suffix(palette, color))
}

pub fn single_identifier(color: &str) -> String {
    format!("{IDENT_PREFIX}{}", color.to_uppercase())
}

fn combined_suffix(palette: &Palette, color: &str) -> String {
    format!(
        "{}_{}",
        palette.identifier.to_uppercase(),
        color.to_uppercase()
    )
}

/// Collect the defines for one palette, registering each identifier in
/// `seen` so collisions across palettes are caught too.
fn plan_defines(
    palette: &Palette,
    seen: &mut BTreeSet<String>,
    make_suffix: impl Fn(&str) -> String,
) -> Result<Vec<Define>, PaletteError> {
    if palette.colors.is_empty() {
        return Err(PaletteError::EmptyPalette {
            palette: palette.identifier.clone(),
        });
    }

    let mut out = Vec::with_capacity(palette.colors.len());
    for c in &palette.colors {
        let suffix = make_suffix(&c.name);
        if !seen.insert(suffix.clone()) {
            return Err(PaletteError::DuplicateIdentifier {
                identifier: format!("{IDENT_PREFIX}{suffix}"),
            });
        }
        out.push(Define {
            suffix,
            value: c.rgb.to_rgb565(),
        });
    }

    Ok(out)
}

fn push_banner(text: &mut String, name: &str, width: usize) {
    // `^` pads by chars, the odd fill char goes on the right
    text.push_str(&format!("/*{name:=^width$}*/\n"));
}

fn push_defines(text: &mut String, defines: &[Define], width: usize) {
    for d in defines {
        // `{:#x}` gives lowercase, 0x-prefixed, no leading zeros
        text.push_str(&format!(
            "#define {IDENT_PREFIX}{:<width$}{:#x}\n",
            d.suffix, d.value
        ));
    }
}

/// All palettes in one header, each block followed by a blank line.
pub fn emit_combined(palettes: &[Palette]) -> Result<String, PaletteError> {
    if palettes.is_empty() {
        return Err(PaletteError::EmptyPaletteSet);
    }

    let mut seen = BTreeSet::new();
    let blocks = palettes
        .iter()
        .map(|p| plan_defines(p, &mut seen, |color| combined_suffix(p, color)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut text = String::new();
    for (palette, defines) in palettes.iter().zip(&blocks) {
        debug!(
            "combined header: {} ({} colors)",
            palette.identifier,
            defines.len()
        );
        push_banner(&mut text, &palette.name, COMBINED_BANNER_WIDTH);
        push_defines(&mut text, defines, COMBINED_IDENT_WIDTH);
        text.push('\n');
    }

    Ok(text)
}

/// One palette, short identifiers, no trailing separator.
pub fn emit_single(palette: &Palette) -> Result<String, PaletteError> {
    let mut seen = BTreeSet::new();
    let defines = plan_defines(palette, &mut seen, |color| color.to_uppercase())?;
    debug!(
        "single header: {} ({} colors)",
        palette.identifier,
        defines.len()
    );

    let mut text = String::new();
    push_banner(&mut text, &palette.name, SINGLE_BANNER_WIDTH);
    push_defines(&mut text, &defines, SINGLE_IDENT_WIDTH);
    Ok(text)
}

pub fn write_combined<W: Write>(sink: &mut W, palettes: &[Palette]) -> Result<(), PaletteError> {
    let text = emit_combined(palettes)?;
    sink.write_all(text.as_bytes())?;
    Ok(())
}

pub fn write_single<W: Write>(sink: &mut W, palette: &Palette) -> Result<(), PaletteError> {
    let text = emit_single(palette)?;
    sink.write_all(text.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use pretty_assertions::assert_eq;

    fn mocha() -> Palette {
        Palette::new("Mocha", "mocha")
            .with_color("base", Color::new(30, 30, 46))
            .with_color("text", Color::new(205, 214, 244))
    }

    fn latte() -> Palette {
        Palette::new("Latte", "latte")
            .with_color("base", Color::new(239, 241, 245))
            .with_color("text", Color::new(76, 79, 105))
    }

    #[test]
    fn single_mocha() -> anyhow::Result<()> {
        let text = emit_single(&mocha())?;
        assert_eq!(
            text,
            "/*=============Mocha==============*/\n\
             #define CATPPUCCIN_BASE      0x18e5\n\
             #define CATPPUCCIN_TEXT      0xcebe\n"
        );
        Ok(())
    }

    #[test]
    fn combined_two_palettes_in_order() -> anyhow::Result<()> {
        let text = emit_combined(&[latte(), mocha()])?;
        assert_eq!(
            text,
            "/*=====================Latte=====================*/\n\
             #define CATPPUCCIN_LATTE_BASE               0xef9e\n\
             #define CATPPUCCIN_LATTE_TEXT               0x4a6d\n\
             \n\
             /*=====================Mocha=====================*/\n\
             #define CATPPUCCIN_MOCHA_BASE               0x18e5\n\
             #define CATPPUCCIN_MOCHA_TEXT               0xcebe\n\
             \n"
        );
        Ok(())
    }

    #[test]
    fn banner_counts_chars_not_bytes() -> anyhow::Result<()> {
        let frappe = Palette::new("Frappé", "frappe").with_color("base", Color::new(48, 52, 70));

        let single = emit_single(&frappe)?;
        assert!(single.starts_with("/*=============Frappé=============*/\n"));

        let combined = emit_combined(&[frappe])?;
        assert!(combined.starts_with("/*====================Frappé=====================*/\n"));
        Ok(())
    }

    #[test]
    fn hex_has_no_leading_zeros() -> anyhow::Result<()> {
        let p = Palette::new("Dark", "dark").with_color("black", Color::new(0, 0, 0));
        let text = emit_single(&p)?;
        assert!(text.ends_with("#define CATPPUCCIN_BLACK     0x0\n"));
        Ok(())
    }

    #[test]
    fn long_identifier_gets_no_padding() -> anyhow::Result<()> {
        let p = Palette::new("Bright", "bright")
            .with_color("superlongname", Color::new(255, 255, 255));
        let text = emit_single(&p)?;
        assert!(text.ends_with("#define CATPPUCCIN_SUPERLONGNAME0xffff\n"));
        Ok(())
    }

    #[test]
    fn identifiers_are_distinct_across_palettes() -> anyhow::Result<()> {
        let text = emit_combined(&[latte(), mocha()])?;
        let idents: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("#define "))
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        let unique: BTreeSet<&str> = idents.iter().copied().collect();
        assert_eq!(idents.len(), 4);
        assert_eq!(unique.len(), idents.len());
        Ok(())
    }

    #[test]
    fn empty_palette_is_invalid_input() {
        let empty = Palette::new("Empty", "empty");
        assert!(matches!(
            emit_single(&empty),
            Err(PaletteError::EmptyPalette { .. })
        ));
        assert!(matches!(
            emit_combined(&[mocha(), empty]),
            Err(PaletteError::EmptyPalette { .. })
        ));
    }

    #[test]
    fn combined_needs_at_least_one_palette() {
        let err = emit_combined(&[]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, PaletteError::EmptyPaletteSet));

        let mut sink: Vec<u8> = Vec::new();
        assert!(write_combined(&mut sink, &[]).is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn shared_identifier_is_rejected() {
        let err = emit_combined(&[mocha(), Palette { name: "Other".into(), ..mocha() }]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(
            err,
            PaletteError::DuplicateIdentifier { ref identifier } if identifier == "CATPPUCCIN_MOCHA_BASE"
        ));
    }

    #[test]
    fn underscore_collisions_are_rejected() {
        // "a" + "b_c" and "a_b" + "c" both render as A_B_C
        let one = Palette::new("One", "a").with_color("b_c", Color::new(1, 2, 3));
        let two = Palette::new("Two", "a_b").with_color("c", Color::new(4, 5, 6));
        assert!(matches!(
            emit_combined(&[one, two]),
            Err(PaletteError::DuplicateIdentifier { .. })
        ));
    }

    #[test]
    fn failed_write_leaves_sink_untouched() {
        let mut sink: Vec<u8> = Vec::new();
        let res = write_combined(&mut sink, &[mocha(), Palette::new("Empty", "empty")]);
        assert!(res.is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn writes_into_injected_sink() -> anyhow::Result<()> {
        let mut sink: Vec<u8> = Vec::new();
        write_single(&mut sink, &mocha())?;
        assert_eq!(String::from_utf8(sink)?, emit_single(&mocha())?);
        Ok(())
    }

    #[test]
    fn output_is_stable_across_runs() -> anyhow::Result<()> {
        let palettes = [latte(), mocha()];
        assert_eq!(emit_combined(&palettes)?, emit_combined(&palettes)?);
        assert_eq!(emit_single(&latte())?, emit_single(&latte())?);
        Ok(())
    }

    #[test]
    fn identifier_helpers() {
        assert_eq!(combined_identifier(&mocha(), "base"), "CATPPUCCIN_MOCHA_BASE");
        assert_eq!(single_identifier("Subtext1"), "CATPPUCCIN_SUBTEXT1");
    }
}
