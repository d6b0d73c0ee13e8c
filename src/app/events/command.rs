use crate::app::state::{ColorRole, Ticket};
use crate::core::CatalogSource;
use crate::transport::RequestFailure;
use glam::DVec2;
use std::path::PathBuf;

/// Mutierende Commands, die vom Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Katalog aus den Quellen laden (erste erfolgreiche gewinnt)
    LoadCatalog { sources: Vec<CatalogSource> },
    /// Katalog aus fertigem JSON übernehmen
    ApplyCatalogJson { json: String },
    /// Formel wählen und Beschreibung/Custom-Felder anpassen
    SelectFormula { key: String },
    /// Funktionsausdruck setzen
    SetFunctionExpression { text: String },
    /// Name der benutzerdefinierten Formel setzen
    SetCustomFormulaName { text: String },
    /// Tabelle der benutzerdefinierten Formel setzen
    SetCustomFormulaTable { text: String },
    /// Eckpunkt setzen
    SetVertex { index: usize, position: DVec2 },
    /// Plot-Farbe setzen
    SetColor { role: ColorRole, value: String },
    /// Plot-Anfrage zusammenstellen und ausgeben
    IssuePlot,
    /// Berechnungs-Anfrage zusammenstellen und ausgeben
    IssueCalculation,
    /// Plot-Ergebnis übernehmen
    ResolvePlot {
        ticket: Ticket,
        outcome: Result<String, RequestFailure>,
    },
    /// Berechnungs-Ergebnis übernehmen
    ResolveCalculation {
        ticket: Ticket,
        outcome: Result<f64, RequestFailure>,
    },
    /// Plot-Bild als Datei schreiben
    SaveImage { path: PathBuf },
    /// Blockierende Meldung schließen
    DismissAlert,
    /// Sitzung auf Standardwerte zurücksetzen
    ResetSession,
}
