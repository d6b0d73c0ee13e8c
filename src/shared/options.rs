//! Zentrale Konfiguration für die Dreiecks-Quadratur.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::CatalogSource;
use crate::transport::PlotColors;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Evaluator ───────────────────────────────────────────────────────

/// Basis-URL des externen Evaluators/Renderers.
pub const EVALUATOR_BASE_URL: &str = "http://127.0.0.1:5001";
/// Endpunkt für den Formelkatalog.
pub const FORMULAS_PATH: &str = "/api/formulas";
/// Endpunkt für Knoten-Plots.
pub const PLOT_PATH: &str = "/api/plot";
/// Endpunkt für die Integralberechnung.
pub const CALCULATE_PATH: &str = "/api/calculate";

// ── Katalog ─────────────────────────────────────────────────────────

/// Lokale Formeldatei (Fallback, wenn keine entfernte Quelle erreichbar ist).
pub const CATALOG_FILE: &str = "triangle_formula.json";

// ── Plot ────────────────────────────────────────────────────────────

/// Standard-Knotenfarbe.
pub const NODE_COLOR_DEFAULT: &str = "red";
/// Standard-Kantenfarbe des Dreiecks.
pub const EDGE_COLOR_DEFAULT: &str = "black";
/// Standard-Füllfarbe des Dreiecks.
pub const FILL_COLOR_DEFAULT: &str = "lightblue";
/// Standard-Dateiname beim Speichern des Plots.
pub const IMAGE_FILE_NAME: &str = "triangle_integration_plot.png";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `triangle_quadrature.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppOptions {
    // ── Evaluator ───────────────────────────────────────────────
    /// Basis-URL des Evaluators/Renderers
    pub evaluator_base_url: String,
    /// Pfad des Formel-Endpunkts
    pub formulas_path: String,
    /// Pfad des Plot-Endpunkts
    pub plot_path: String,
    /// Pfad des Berechnungs-Endpunkts
    pub calculate_path: String,
    /// Optionales Timeout pro Anfrage in Sekunden (Standard: keins)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    // ── Katalog ─────────────────────────────────────────────────
    /// Entfernte Roh-Formeldatei (wird zuerst versucht)
    #[serde(default)]
    pub catalog_url: Option<String>,
    /// Formel-Endpunkt des Evaluators als Quelle verwenden
    #[serde(default = "default_true")]
    pub use_evaluator_catalog: bool,
    /// Lokale Formeldatei (Fallback)
    pub catalog_file: PathBuf,
    /// Download-Link der Roh-Formeldatei für den Export (reine Durchreichung)
    #[serde(default)]
    pub catalog_download_url: Option<String>,

    // ── Plot ────────────────────────────────────────────────────
    /// Standard-Knotenfarbe
    pub node_color: String,
    /// Standard-Kantenfarbe
    pub edge_color: String,
    /// Standard-Füllfarbe
    pub fill_color: String,
    /// Standard-Dateiname für gespeicherte Plots
    #[serde(default = "default_image_file_name")]
    pub image_file_name: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            evaluator_base_url: EVALUATOR_BASE_URL.to_string(),
            formulas_path: FORMULAS_PATH.to_string(),
            plot_path: PLOT_PATH.to_string(),
            calculate_path: CALCULATE_PATH.to_string(),
            request_timeout_secs: None,

            catalog_url: None,
            use_evaluator_catalog: true,
            catalog_file: PathBuf::from(CATALOG_FILE),
            catalog_download_url: None,

            node_color: NODE_COLOR_DEFAULT.to_string(),
            edge_color: EDGE_COLOR_DEFAULT.to_string(),
            fill_color: FILL_COLOR_DEFAULT.to_string(),
            image_file_name: IMAGE_FILE_NAME.to_string(),
        }
    }
}

/// Serde-Default für boolesche Schalter, die standardmäßig aktiv sind.
fn default_true() -> bool {
    true
}

/// Serde-Default für `image_file_name` (Abwärtskompatibilität).
fn default_image_file_name() -> String {
    IMAGE_FILE_NAME.to_string()
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("triangle_quadrature"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("triangle_quadrature.toml")
    }

    /// Setzt Basis-URL und Endpunkt-Pfad zusammen.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.evaluator_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Katalogquellen in Lade-Reihenfolge: Roh-URL, Evaluator-Endpunkt, lokale Datei.
    pub fn catalog_sources(&self) -> Vec<CatalogSource> {
        let mut sources = Vec::with_capacity(3);
        if let Some(url) = &self.catalog_url {
            sources.push(CatalogSource::Url(url.clone()));
        }
        if self.use_evaluator_catalog {
            sources.push(CatalogSource::Url(self.endpoint_url(&self.formulas_path)));
        }
        sources.push(CatalogSource::File(self.catalog_file.clone()));
        sources
    }

    /// Standardfarben als Plot-Farbsatz.
    pub fn default_colors(&self) -> PlotColors {
        PlotColors {
            node_color: self.node_color.clone(),
            edge_color: self.edge_color.clone(),
            fill_color: self.fill_color.clone(),
        }
    }
}
