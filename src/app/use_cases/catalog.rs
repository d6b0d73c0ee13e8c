//! Use-Cases für Formelkatalog und Formelauswahl.

use crate::app::state::{CatalogStatus, DESCRIPTION_PROMPT};
use crate::app::AppState;
use crate::core::{CatalogLoadError, CatalogSource, FormulaCatalog, CUSTOM_FORMULA_KEY};

/// Beschreibung, wenn der Katalog nicht geladen werden konnte.
pub const DESCRIPTION_LOAD_FAILED: &str = "Fehler beim Laden der Formeln.";
/// Beschreibung der benutzerdefinierten Formel.
pub const DESCRIPTION_CUSTOM: &str =
    "Benutzerdefinierte Formel: Tabelle [[x, y, gewicht], ...] im Referenzdreieck eingeben.";
/// Beschreibung für Katalog-Einträge ohne Text.
pub const DESCRIPTION_MISSING: &str = "Keine Beschreibung vorhanden.";

/// Lädt den Katalog aus den Quellen (erste erfolgreiche gewinnt).
///
/// Schlagen alle fehl, bleibt der Katalog leer; der Custom-Pfad bleibt nutzbar.
pub fn load_catalog(state: &mut AppState, sources: &[CatalogSource]) {
    let result = FormulaCatalog::load_first(sources);
    apply_catalog_result(state, result);
}

/// Übernimmt einen Katalog aus bereits vorliegendem JSON.
pub fn apply_catalog_json(state: &mut AppState, json: &str) {
    let result = FormulaCatalog::from_json_str(json);
    apply_catalog_result(state, result);
}

fn apply_catalog_result(state: &mut AppState, result: Result<FormulaCatalog, CatalogLoadError>) {
    match result {
        Ok(catalog) => {
            log::info!("Formelkatalog bereit: {} Formeln", catalog.len());
            state.catalog = catalog;
            state.catalog_status = CatalogStatus::Loaded;

            // Bestehende Auswahl behalten, sonst erster Eintrag
            let keep = state
                .session
                .selected_key
                .as_deref()
                .is_some_and(|key| is_selectable(state, key));
            if !keep {
                state.session.selected_key = first_key(state);
            }
        }
        Err(e) => {
            log::error!("Formelkatalog nicht verfügbar: {}", e);
            state.catalog = FormulaCatalog::new();
            state.catalog_status = CatalogStatus::Unavailable(e.to_string());
            if !state.session.is_custom_selected() {
                state.session.selected_key = None;
            }
        }
    }
    refresh_selection_view(state);
}

/// Wählt eine Formel; unbekannte Schlüssel werden mit Meldung abgelehnt.
pub fn select_formula(state: &mut AppState, key: &str) {
    if !is_selectable(state, key) {
        log::warn!("Unbekannte Formel '{}' ignoriert", key);
        state.ui.alert = Some(format!("Unbekannte Formel '{key}'."));
        return;
    }

    let was_custom = state.session.is_custom_selected();
    state.session.selected_key = Some(key.to_string());
    if was_custom && !state.session.is_custom_selected() {
        state.session.clear_custom_input();
    }
    refresh_selection_view(state);
}

/// Erster auswählbarer Schlüssel, solange der Katalog nicht fehlgeschlagen ist.
pub fn first_key(state: &AppState) -> Option<String> {
    match state.catalog_status {
        CatalogStatus::Loaded => state.catalog.ordered_keys().into_iter().next(),
        CatalogStatus::NotLoaded | CatalogStatus::Unavailable(_) => None,
    }
}

/// Aktualisiert Beschreibung und Custom-Felder passend zur Auswahl.
pub fn refresh_selection_view(state: &mut AppState) {
    state.ui.controls.custom_fields_enabled = state.session.is_custom_selected();
    state.ui.description = describe_selection(state);
}

/// Beschreibungstext zur aktuellen Auswahl (Markup bleibt unverändert).
pub fn describe_selection(state: &AppState) -> String {
    match state.session.selected_key.as_deref() {
        Some(CUSTOM_FORMULA_KEY) => DESCRIPTION_CUSTOM.to_string(),
        Some(key) => match state.catalog.get(key) {
            Some(formula) if formula.description.trim().is_empty() => {
                DESCRIPTION_MISSING.to_string()
            }
            Some(formula) => formula.description.clone(),
            None => DESCRIPTION_MISSING.to_string(),
        },
        None if state.formulas_unavailable() => DESCRIPTION_LOAD_FAILED.to_string(),
        None => DESCRIPTION_PROMPT.to_string(),
    }
}

fn is_selectable(state: &AppState, key: &str) -> bool {
    key == CUSTOM_FORMULA_KEY || state.catalog.get(key).is_some()
}
