//! Handler für Plot- und Berechnungs-Anfragen.

use crate::app::state::Ticket;
use crate::app::use_cases;
use crate::app::AppState;
use crate::transport::RequestFailure;

/// Gibt eine Plot-Anfrage aus.
pub fn issue_plot(state: &mut AppState) {
    use_cases::plot::issue_plot(state);
}

/// Gibt eine Berechnungs-Anfrage aus.
pub fn issue_calculation(state: &mut AppState) {
    use_cases::calculate::issue_calculation(state);
}

/// Übernimmt eine Plot-Antwort.
pub fn resolve_plot(state: &mut AppState, ticket: Ticket, outcome: Result<String, RequestFailure>) {
    use_cases::plot::resolve_plot(state, ticket, outcome);
}

/// Übernimmt eine Berechnungs-Antwort.
pub fn resolve_calculation(
    state: &mut AppState,
    ticket: Ticket,
    outcome: Result<f64, RequestFailure>,
) {
    use_cases::calculate::resolve_calculation(state, ticket, outcome);
}
