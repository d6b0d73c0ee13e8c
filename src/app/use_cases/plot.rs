//! Use-Cases für den Plot-Automaten.

use super::request_build;
use crate::app::dispatch::PendingRequest;
use crate::app::state::{RequestState, Ticket};
use crate::app::AppState;
use crate::transport::RequestFailure;

/// Platzhalter im Plotbereich, solange der Renderer arbeitet.
pub const PLOT_PENDING: &str = "Plot wird erstellt...";

/// Stellt eine Plot-Anfrage zusammen und legt sie in die Outbox.
///
/// Abgelehnt, solange ein Plot aussteht. Eingabefehler landen als Meldung
/// im UI-State und lassen den Automaten unverändert.
pub fn issue_plot(state: &mut AppState) {
    if state.plot.is_in_flight() {
        log::debug!("Plot bereits unterwegs, erneute Ausgabe abgelehnt");
        return;
    }

    let body = match request_build::build_plot_request(state) {
        Ok(body) => body,
        Err(e) => {
            log::warn!("Plot nicht ausgegeben: {}", e);
            state.ui.alert = Some(e.to_string());
            return;
        }
    };

    let Some(ticket) = state.plot.issue() else {
        return;
    };
    log::info!("Plot #{} ausgegeben ({} Knoten)", ticket, body.nodes.len());
    state.ui.controls.plot_enabled = false;
    state.ui.controls.save_image_enabled = false;
    state.ui.plot_message = Some(PLOT_PENDING.to_string());
    state.outbox.push(PendingRequest::Plot { ticket, body });
}

/// Übernimmt die Antwort des Renderers.
pub fn resolve_plot(state: &mut AppState, ticket: Ticket, outcome: Result<String, RequestFailure>) {
    let outcome = match outcome {
        Ok(image) if image.trim().is_empty() => Err("Keine Bilddaten erhalten".to_string()),
        Ok(image) => Ok(image),
        Err(failure) => Err(failure.reason()),
    };

    if !state.plot.resolve(ticket, outcome) {
        log::debug!("Veraltete Plot-Antwort #{} verworfen", ticket);
        return;
    }

    state.ui.controls.plot_enabled = true;
    match state.plot.state() {
        RequestState::Failed(reason) => {
            log::warn!("Plot #{} fehlgeschlagen: {}", ticket, reason);
            state.ui.plot_message = Some(format!("Plotfehler: {reason}"));
            state.ui.controls.save_image_enabled = false;
        }
        _ => {
            log::info!("Plot #{} erhalten", ticket);
            state.ui.plot_message = None;
            state.ui.controls.save_image_enabled = true;
        }
    }
}
