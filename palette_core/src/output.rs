//! Writes generated headers to disk.

use anyhow::Context;
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Palette, PaletteSet, builtin, header};

pub const DEFAULT_OUTPUT_DIR: &str = "include";
pub const COMBINED_FILE_NAME: &str = "AllFlavoursCatppuccin_TFT_eSPI.h";
const SINGLE_FILE_SUFFIX: &str = "Catppuccin_TFT_eSPI.h";

/// Everything one generation run needs; built once by the caller.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub output_dir: PathBuf,
    pub palettes: PaletteSet,
}

impl GenerateConfig {
    pub fn new(output_dir: impl Into<PathBuf>, palettes: PaletteSet) -> Self {
        Self {
            output_dir: output_dir.into(),
            palettes,
        }
    }

    /// Built-in Catppuccin flavours into `include/`.
    pub fn catppuccin() -> anyhow::Result<Self> {
        let palettes = builtin::catppuccin().context("load built-in catppuccin palettes")?;
        Ok(Self::new(DEFAULT_OUTPUT_DIR, palettes))
    }
}

/// "mocha" -> "MochaCatppuccin_TFT_eSPI.h"
pub fn single_file_name(palette: &Palette) -> String {
    format!("{}{SINGLE_FILE_SUFFIX}", capitalize(&palette.identifier))
}

/// First char uppercased, the rest lowercased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Mode of the file being replaced, or 0644 for a new one.
fn target_permissions(path: &Path) -> anyhow::Result<Option<fs::Permissions>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => {
            Err(e).with_context(|| format!("read permissions of '{}'", path.display()))
        }
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Replace `path` with `text`. The parent directory is created if missing;
/// the content goes through a temp file in the same directory and is renamed
/// into place, so a failure leaves any previous file intact.
pub fn write_header_file(path: impl AsRef<Path>, text: &str) -> anyhow::Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("create output directory '{}'", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("create temp file in '{}'", dir.display()))?;
    tmp.write_all(text.as_bytes())
        .with_context(|| format!("write header for '{}'", path.display()))?;
    // temp files start out 0600; give the result the target's mode instead
    if let Some(perms) = target_permissions(path)? {
        tmp.as_file()
            .set_permissions(perms)
            .with_context(|| format!("set permissions for '{}'", path.display()))?;
    }
    tmp.persist(path)
        .with_context(|| format!("replace header file '{}'", path.display()))?;

    info!("wrote {}", path.display());
    Ok(())
}

/// Combined header first, then one header per palette in set order.
/// Returns the written paths in that order.
pub fn generate_all(config: &GenerateConfig) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(config.palettes.len() + 1);

    let combined = header::emit_combined(config.palettes.palettes())
        .context("render combined header")?;
    let path = config.output_dir.join(COMBINED_FILE_NAME);
    write_header_file(&path, &combined)?;
    written.push(path);

    for palette in &config.palettes {
        let text = header::emit_single(palette)
            .with_context(|| format!("render header for '{}'", palette.identifier))?;
        let path = config.output_dir.join(single_file_name(palette));
        write_header_file(&path, &text)?;
        written.push(path);
    }

    Ok(written)
}
