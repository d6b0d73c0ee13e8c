//! Use-Cases für den Berechnungs-Automaten.

use super::request_build;
use crate::app::dispatch::PendingRequest;
use crate::app::state::{CalculationResult, RequestState, Ticket};
use crate::app::AppState;
use crate::transport::RequestFailure;

/// Anzeige, solange der Evaluator rechnet.
pub const CALCULATION_PENDING: &str = "Berechnung läuft...";

/// Stellt eine Berechnungs-Anfrage zusammen und legt sie in die Outbox.
///
/// Abgelehnt, solange eine Berechnung aussteht; der Knopf bleibt bis zur
/// Antwort gesperrt.
pub fn issue_calculation(state: &mut AppState) {
    if state.calculation.is_in_flight() {
        log::debug!("Berechnung bereits unterwegs, erneute Ausgabe abgelehnt");
        return;
    }

    let assembled = match request_build::build_calculate_request(state) {
        Ok(assembled) => assembled,
        Err(e) => {
            log::warn!("Berechnung nicht ausgegeben: {}", e);
            state.ui.alert = Some(e.to_string());
            return;
        }
    };

    let Some(ticket) = state.calculation.issue() else {
        return;
    };
    log::info!(
        "Berechnung #{} ausgegeben: f = {}, Formel '{}' ({} Knoten)",
        ticket,
        assembled.body.func_str,
        assembled.formula_label,
        assembled.body.nodes.len()
    );
    state.ui.controls.calculate_enabled = false;
    state.ui.calculation_output = CALCULATION_PENDING.to_string();
    state.calculation_label = Some(assembled.formula_label);
    state.outbox.push(PendingRequest::Calculate {
        ticket,
        body: assembled.body,
    });
}

/// Übernimmt die Antwort des Evaluators.
pub fn resolve_calculation(
    state: &mut AppState,
    ticket: Ticket,
    outcome: Result<f64, RequestFailure>,
) {
    if !state.calculation.is_in_flight() {
        log::debug!("Berechnungs-Antwort #{} ohne ausstehende Anfrage verworfen", ticket);
        return;
    }

    let label = state.calculation_label.clone().unwrap_or_default();
    let outcome = outcome
        .map(|value| CalculationResult {
            value,
            formula_label: label,
        })
        .map_err(|failure| failure.reason());

    if !state.calculation.resolve(ticket, outcome) {
        log::debug!("Veraltete Berechnungs-Antwort #{} verworfen", ticket);
        return;
    }

    state.calculation_label = None;
    state.ui.controls.calculate_enabled = true;
    match state.calculation.state() {
        RequestState::Succeeded(result) => {
            log::info!("Berechnung #{}: {}", ticket, result.value);
            state.ui.calculation_output =
                format!("Ergebnis ({}): {}", result.formula_label, result.value);
        }
        RequestState::Failed(reason) => {
            log::warn!("Berechnung #{} fehlgeschlagen: {}", ticket, reason);
            state.ui.calculation_output = format!("Berechnungsfehler: {reason}");
        }
        RequestState::Idle | RequestState::InFlight { .. } => {}
    }
}
