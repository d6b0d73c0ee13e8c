//! Handler für Sitzungseingaben und Zurücksetzen.

use crate::app::state::ColorRole;
use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Setzt den Funktionsausdruck.
pub fn set_function_expression(state: &mut AppState, text: String) {
    use_cases::session::set_function_expression(state, text);
}

/// Setzt den Namen der benutzerdefinierten Formel.
pub fn set_custom_name(state: &mut AppState, text: String) {
    use_cases::session::set_custom_name(state, text);
}

/// Setzt die Tabelle der benutzerdefinierten Formel.
pub fn set_custom_table(state: &mut AppState, text: String) {
    use_cases::session::set_custom_table(state, text);
}

/// Setzt einen Eckpunkt.
pub fn set_vertex(state: &mut AppState, index: usize, position: DVec2) {
    use_cases::session::set_vertex(state, index, position);
}

/// Setzt eine Plot-Farbe.
pub fn set_color(state: &mut AppState, role: ColorRole, value: String) {
    use_cases::session::set_color(state, role, value);
}

/// Schließt die blockierende Meldung.
pub fn dismiss_alert(state: &mut AppState) {
    use_cases::session::dismiss_alert(state);
}

/// Setzt die Sitzung zurück.
pub fn reset(state: &mut AppState) {
    use_cases::reset::reset_session(state);
}
