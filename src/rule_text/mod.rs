//! Eingabe benutzerdefinierter Quadraturregeln als Text.
//!
//! Zweistufig: Anführungszeichen normalisieren, dann strikt als N×3-Tabelle parsen.
//! Die Tabelle hat Zeilen `[x, y, gewicht]`; die Zeilenreihenfolge bleibt erhalten.

pub mod normalize;
pub mod parser;

pub use normalize::normalize_quotes;
pub use parser::{parse_table, validate, ValidationError};
