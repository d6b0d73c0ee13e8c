//! Use-Cases für Sitzungseingaben (Funktion, Custom-Formel, Dreieck, Farben).

use crate::app::state::ColorRole;
use crate::app::AppState;
use glam::DVec2;

/// Setzt den Funktionsausdruck (unverändert, Auswertung macht der Evaluator).
pub fn set_function_expression(state: &mut AppState, text: String) {
    state.session.function_expression = text;
}

/// Setzt den Namen der benutzerdefinierten Formel.
pub fn set_custom_name(state: &mut AppState, text: String) {
    if !state.ui.controls.custom_fields_enabled {
        log::debug!("Custom-Name ignoriert: Felder gesperrt");
        return;
    }
    state.session.custom_name = text;
}

/// Setzt die Tabelle der benutzerdefinierten Formel (Validierung erst bei Ausgabe).
pub fn set_custom_table(state: &mut AppState, text: String) {
    if !state.ui.controls.custom_fields_enabled {
        log::debug!("Custom-Tabelle ignoriert: Felder gesperrt");
        return;
    }
    state.session.custom_table = text;
}

/// Setzt einen Eckpunkt. Nicht-endliche Werte werden erst bei Ausgabe abgelehnt.
pub fn set_vertex(state: &mut AppState, index: usize, position: DVec2) {
    if index >= 3 {
        log::warn!("Eckpunkt-Index {} außerhalb 0..3 ignoriert", index);
        return;
    }
    state.session.triangle.set_vertex(index, position);
}

/// Setzt eine Plot-Farbe.
pub fn set_color(state: &mut AppState, role: ColorRole, value: String) {
    state.session.set_color(role, value);
}

/// Schließt die blockierende Meldung.
pub fn dismiss_alert(state: &mut AppState) {
    state.ui.alert = None;
}
