//! Zurücksetzen der Sitzung auf Standardwerte.

use super::catalog;
use crate::app::state::{ControlState, SessionState};
use crate::app::AppState;

/// Setzt beide Automaten auf `Idle` und die Sitzung auf Standardwerte.
///
/// Katalog und Optionen bleiben erhalten. Noch ausstehende Antworten laufen
/// danach ins Leere (Ticket passt nicht mehr).
pub fn reset_session(state: &mut AppState) {
    let dropped = state.outbox.len();
    state.plot.reset();
    state.calculation.reset();
    state.calculation_label = None;
    state.outbox.clear();

    state.session = SessionState::new(state.options.default_colors());
    state.session.selected_key = catalog::first_key(state);

    state.ui.clear_outputs();
    state.ui.controls = ControlState::default();
    catalog::refresh_selection_view(state);

    log::info!(
        "Sitzung zurückgesetzt ({} nicht zugestellte Anfragen verworfen)",
        dropped
    );
}
