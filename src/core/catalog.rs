//! Katalog vordefinierter Quadraturformeln.
//!
//! Akzeptiert zwei JSON-Formen pro Eintrag:
//! - Rohdatei: `{ "data": [[x, y, w], ...], "description": ... }`
//! - Formel-Quelle: `{ "name", "description", "nodes": [[x, y], ...], "weights": [...] }`
//!
//! Einträge ohne Knoten/Gewichte sind zulässig und werden toleriert.

use super::formula::{FormulaData, QuadratureFormula, CUSTOM_FORMULA_KEY};
use glam::DVec2;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::PathBuf;

/// Fehler beim Laden des Formelkatalogs.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// Lokale Datei nicht lesbar
    #[error("Formeldatei {path} nicht lesbar: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Entfernte Quelle nicht erreichbar
    #[error("Formelquelle {url} nicht erreichbar: {message}")]
    Unreachable { url: String, message: String },
    /// Inhalt entspricht nicht dem erwarteten Schema
    #[error("Formelkatalog nicht lesbar: {0}")]
    Schema(#[from] serde_json::Error),
    /// Keine Quelle konfiguriert
    #[error("Keine Formelquelle konfiguriert")]
    NoSources,
}

/// Herkunft eines Katalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// HTTP(S)-URL, liefert JSON
    Url(String),
    /// Lokale JSON-Datei
    File(PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Ein Katalog-Eintrag so, wie er im JSON steht.
#[derive(Debug, Deserialize)]
struct RawFormulaEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    nodes: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    weights: Option<Vec<f64>>,
    #[serde(default)]
    data: Option<Vec<[f64; 3]>>,
}

impl RawFormulaEntry {
    fn into_formula(self, key: String) -> QuadratureFormula {
        let data = match (self.data, self.nodes, self.weights) {
            (Some(rows), _, _) => Some(FormulaData::from_rows(&rows)),
            (None, Some(nodes), Some(weights)) => {
                let nodes = nodes.into_iter().map(DVec2::from_array).collect();
                let data = FormulaData::new(nodes, weights);
                if data.is_none() {
                    log::warn!(
                        "Formel '{}': Anzahl Knoten und Gewichte verschieden, Daten verworfen",
                        key
                    );
                }
                data
            }
            _ => None,
        };

        QuadratureFormula {
            name: self.name.unwrap_or_else(|| key.clone()),
            description: self
                .description
                .unwrap_or_else(|| format!("Vordefinierte Integrationsformel {key}")),
            data,
            key,
        }
    }
}

/// Formelkatalog; nach dem Laden nur noch lesend genutzt.
#[derive(Debug, Clone, Default)]
pub struct FormulaCatalog {
    formulas: IndexMap<String, QuadratureFormula>,
}

impl FormulaCatalog {
    /// Erstellt einen leeren Katalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed einen Katalog aus JSON.
    ///
    /// Ein Eintrag mit dem reservierten Schlüssel `"custom"` wird übersprungen.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let raw: IndexMap<String, RawFormulaEntry> = serde_json::from_str(json)?;
        let mut formulas = IndexMap::with_capacity(raw.len());
        for (key, entry) in raw {
            if key == CUSTOM_FORMULA_KEY {
                log::warn!("Katalog-Eintrag mit reserviertem Schlüssel '{key}' ignoriert");
                continue;
            }
            formulas.insert(key.clone(), entry.into_formula(key));
        }
        Ok(Self { formulas })
    }

    /// Lädt den Katalog aus einer Quelle.
    pub fn load(source: &CatalogSource) -> Result<Self, CatalogLoadError> {
        let json = match source {
            CatalogSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
                    path: path.clone(),
                    source,
                })?
            }
            CatalogSource::Url(url) => {
                crate::transport::fetch_catalog_text(url).map_err(|e| {
                    CatalogLoadError::Unreachable {
                        url: url.clone(),
                        message: e.reason(),
                    }
                })?
            }
        };
        let catalog = Self::from_json_str(&json)?;
        log::info!("Formelkatalog geladen aus {}: {} Formeln", source, catalog.len());
        Ok(catalog)
    }

    /// Probiert die Quellen der Reihe nach; die erste erfolgreiche gewinnt.
    ///
    /// Schlagen alle fehl, wird der letzte Fehler zurückgegeben.
    pub fn load_first(sources: &[CatalogSource]) -> Result<Self, CatalogLoadError> {
        let mut last_error = CatalogLoadError::NoSources;
        for source in sources {
            match Self::load(source) {
                Ok(catalog) => return Ok(catalog),
                Err(e) => {
                    log::warn!("Formelquelle {} fehlgeschlagen: {}, versuche nächste", source, e);
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }

    /// Schlüssel aufsteigend nach Knotenzahl; Einträge ohne Knoten zuerst,
    /// `"custom"` immer zuletzt. Gleichstände behalten die Ladereihenfolge.
    pub fn ordered_keys(&self) -> Vec<String> {
        let mut presets: Vec<&QuadratureFormula> = self.iter().collect();
        presets.sort_by_key(|f| f.node_count().map_or((0, 0), |n| (1, n)));

        presets
            .into_iter()
            .map(|f| f.key.clone())
            .chain(std::iter::once(CUSTOM_FORMULA_KEY.to_string()))
            .collect()
    }

    /// Sucht eine Formel per Schlüssel.
    pub fn get(&self, key: &str) -> Option<&QuadratureFormula> {
        self.formulas.get(key)
    }

    /// Knoten/Gewichte einer Formel; `None` bei unbekanntem Schlüssel oder fehlenden Daten.
    pub fn formula_data(&self, key: &str) -> Option<&FormulaData> {
        self.get(key).and_then(|f| f.data.as_ref())
    }

    /// Anzahl vordefinierter Formeln (ohne `"custom"`).
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Gibt `true` zurück, wenn keine Formeln geladen sind.
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Iteriert über alle Formeln in Ladereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &QuadratureFormula> {
        self.formulas.values()
    }
}
