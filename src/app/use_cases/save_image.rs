//! Speichern des zuletzt erfolgreich gerenderten Plots.

use crate::app::AppState;
use anyhow::Context;
use base64::prelude::*;
use std::path::{Path, PathBuf};

/// Dateiendungen, die unverändert übernommen werden.
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Schreibt das Plot-Bild (Base64-PNG) als Datei.
///
/// Ohne erfolgreichen Plot gibt es nur eine Meldung. Dekodier- und
/// Schreibfehler werden als `Err` weitergereicht.
pub fn save_plot_image(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    let Some(image) = state.plot_image() else {
        log::warn!("Kein Plot-Bild zum Speichern vorhanden");
        state.ui.alert = Some("Kein Bild zum Speichern vorhanden.".to_string());
        return Ok(());
    };

    let bytes = BASE64_STANDARD
        .decode(image.trim())
        .context("Plot-Bild ist kein gültiges Base64")?;
    let path = with_image_extension(&path);
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Bild konnte nicht nach {} geschrieben werden", path.display()))?;

    log::info!("Plot-Bild gespeichert: {} ({} Bytes)", path.display(), bytes.len());
    state.ui.status_message = Some(format!("Bild gespeichert: {}", path.display()));
    Ok(())
}

/// Hängt `.png` an, sofern der Name nicht schon auf .png/.jpg/.jpeg endet.
pub fn with_image_extension(path: &Path) -> PathBuf {
    let known = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    if known {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_owned();
    name.push(".png");
    PathBuf::from(name)
}
