//! Handler für Datei-Operationen (Plot-Bild speichern).

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Speichert das Plot-Bild unter dem übergebenen Pfad.
pub fn save_image(state: &mut AppState, path: PathBuf) -> anyhow::Result<()> {
    use_cases::save_image::save_plot_image(state, path)
}
