use crate::app::state::{ColorRole, Ticket};
use crate::transport::RequestFailure;
use glam::DVec2;
use std::path::PathBuf;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Formelkatalog aus den konfigurierten Quellen laden
    CatalogLoadRequested,
    /// Formelkatalog liegt bereits als JSON vor (vom Host geholt)
    CatalogReceived { json: String },
    /// Formel in der Auswahl gewählt (Katalog-Schlüssel oder `"custom"`)
    FormulaSelected { key: String },
    /// Funktionsausdruck f(x, y) geändert
    FunctionExpressionChanged { text: String },
    /// Name der benutzerdefinierten Formel geändert
    CustomFormulaNameChanged { text: String },
    /// Tabelle der benutzerdefinierten Formel geändert
    CustomFormulaTableChanged { text: String },
    /// Eckpunkt des Zieldreiecks geändert (Index 0..3)
    VertexChanged { index: usize, position: DVec2 },
    /// Plot-Farbe geändert
    ColorChanged { role: ColorRole, value: String },
    /// "Plotten" gedrückt
    PlotRequested,
    /// "Berechnen" gedrückt
    CalculateRequested,
    /// Antwort des Renderers eingetroffen (Base64-PNG oder Fehler)
    PlotFinished {
        ticket: Ticket,
        outcome: Result<String, RequestFailure>,
    },
    /// Antwort des Evaluators eingetroffen
    CalculationFinished {
        ticket: Ticket,
        outcome: Result<f64, RequestFailure>,
    },
    /// Plot-Bild speichern (`None` = Standard-Dateiname aus den Optionen)
    SaveImageRequested { path: Option<PathBuf> },
    /// Blockierende Meldung bestätigt
    AlertDismissed,
    /// "Zurücksetzen" gedrückt
    ResetRequested,
}
