//! Zusammenstellung von Plot- und Berechnungs-Anfragen aus der Sitzung.
//!
//! Prüfreihenfolge: Funktionsausdruck (nur Berechnung), Eckpunkte, Formel.
//! Jede Anfrage arbeitet auf einer Kopie des Dreiecks; spätere Änderungen
//! an der Sitzung wirken nicht auf ausstehende Anfragen.

use crate::app::AppState;
use crate::core::{FormulaData, NonFiniteVertex, CUSTOM_FORMULA_KEY};
use crate::rule_text::{self, ValidationError};
use crate::transport::{CalculateRequest, PlotRequest};

/// Lokal erkannter Eingabefehler; die Anfrage wird nicht versendet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputValidationError {
    #[error("Bitte einen Funktionsausdruck f(x, y) eingeben.")]
    MissingFunction,
    #[error("Bitte gültige Eckpunkte eingeben: {0}.")]
    NonFiniteVertex(#[from] NonFiniteVertex),
    #[error("Keine Formeln verfügbar.")]
    NoFormulasAvailable,
    #[error("Bitte eine Integrationsformel auswählen.")]
    NoFormulaSelected,
    #[error("Unbekannte Formel '{0}'.")]
    UnknownFormula(String),
    #[error("Die Formel '{0}' enthält keine Knoten und Gewichte.")]
    MissingFormulaData(String),
    #[error("Benutzerdefinierte Formel ungültig: {0}")]
    CustomTable(#[from] ValidationError),
    #[error("Die Formel enthält keine Knoten.")]
    EmptyFormula,
}

/// Aufgelöste Formel mit Anzeigename.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFormula {
    pub data: FormulaData,
    pub label: String,
}

/// Fertige Berechnungs-Anfrage samt Formelbezeichnung für die Ergebnisanzeige.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledCalculation {
    pub body: CalculateRequest,
    pub formula_label: String,
}

/// Löst die gewählte Formel auf (Katalog-Eintrag oder validierte Custom-Tabelle).
pub fn resolve_formula(state: &AppState) -> Result<ResolvedFormula, InputValidationError> {
    match state.session.selected_key.as_deref() {
        Some(CUSTOM_FORMULA_KEY) => {
            let data = rule_text::validate(&state.session.custom_table)?;
            Ok(ResolvedFormula {
                data,
                label: state.session.custom_label(),
            })
        }
        Some(key) => {
            let Some(formula) = state.catalog.get(key) else {
                return Err(if state.catalog.is_empty() {
                    InputValidationError::NoFormulasAvailable
                } else {
                    InputValidationError::UnknownFormula(key.to_string())
                });
            };
            let data = formula
                .data
                .clone()
                .ok_or_else(|| InputValidationError::MissingFormulaData(formula.name.clone()))?;
            Ok(ResolvedFormula {
                data,
                label: formula.name.clone(),
            })
        }
        None if state.catalog.is_empty() => Err(InputValidationError::NoFormulasAvailable),
        None => Err(InputValidationError::NoFormulaSelected),
    }
}

/// Baut die Berechnungs-Anfrage.
pub fn build_calculate_request(
    state: &AppState,
) -> Result<AssembledCalculation, InputValidationError> {
    let func_str = state.session.function_expression.trim();
    if func_str.is_empty() {
        return Err(InputValidationError::MissingFunction);
    }

    let triangle = state.session.triangle;
    triangle.ensure_finite()?;

    let formula = resolve_formula(state)?;
    if formula.data.is_empty() {
        return Err(InputValidationError::EmptyFormula);
    }

    Ok(AssembledCalculation {
        body: CalculateRequest::new(func_str, &formula.data, &triangle),
        formula_label: formula.label,
    })
}

/// Baut die Plot-Anfrage (ohne Funktionsausdruck; leere Knotenmenge erlaubt).
pub fn build_plot_request(state: &AppState) -> Result<PlotRequest, InputValidationError> {
    let triangle = state.session.triangle;
    triangle.ensure_finite()?;

    let formula = resolve_formula(state)?;
    Ok(PlotRequest::new(
        &triangle,
        &formula.data,
        state.session.colors.clone(),
    ))
}
