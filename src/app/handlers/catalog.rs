//! Handler für Formelkatalog und Formelauswahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CatalogSource;

/// Lädt den Katalog aus den übergebenen Quellen.
pub fn load(state: &mut AppState, sources: Vec<CatalogSource>) {
    use_cases::catalog::load_catalog(state, &sources);
}

/// Übernimmt einen Katalog aus fertigem JSON.
pub fn apply_json(state: &mut AppState, json: String) {
    use_cases::catalog::apply_catalog_json(state, &json);
}

/// Wählt eine Formel.
pub fn select(state: &mut AppState, key: String) {
    use_cases::catalog::select_formula(state, &key);
}
