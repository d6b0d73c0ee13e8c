//! Strikter Parser für N×3-Regeltabellen.

use super::normalize::normalize_quotes;
use crate::core::FormulaData;
use serde_json::Value;

/// Anzahl Einträge pro Tabellenzeile: x, y, Gewicht.
const ROW_LEN: usize = 3;

/// Fehler bei der Validierung einer benutzerdefinierten Regel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Text ist keine rechteckige N×3-Zahlentabelle
    #[error("Knoten/Gewichte fehlerhaft: {0}")]
    MalformedTable(String),
}

impl ValidationError {
    fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTable(message.into())
    }
}

/// Parsed bereits normalisierten Text in Zeilen `[x, y, w]`.
///
/// Eine leere Tabelle `[]` ist gültig.
pub fn parse_table(text: &str) -> Result<Vec<[f64; 3]>, ValidationError> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        ValidationError::malformed(format!(
            "Text nicht lesbar ({e}), erwartet z.B. [[0.5,0,0.333],[0,0.5,0.333],[0.5,0.5,0.333]]"
        ))
    })?;

    let Value::Array(rows) = value else {
        return Err(ValidationError::malformed(
            "erwartet eine Liste von Zeilen [x, y, gewicht]",
        ));
    };

    rows.iter()
        .enumerate()
        .map(|(i, row)| parse_row(i + 1, row))
        .collect()
}

fn parse_row(line: usize, row: &Value) -> Result<[f64; 3], ValidationError> {
    let Value::Array(entries) = row else {
        return Err(ValidationError::malformed(format!(
            "Zeile {line} ist keine Liste"
        )));
    };
    if entries.len() != ROW_LEN {
        return Err(ValidationError::malformed(format!(
            "Zeile {line}: erwartet {ROW_LEN} Einträge, gefunden {}",
            entries.len()
        )));
    }

    let mut parsed = [0.0; ROW_LEN];
    for (slot, (column, entry)) in parsed.iter_mut().zip(entries.iter().enumerate()) {
        *slot = match entry {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
        .ok_or_else(|| {
            ValidationError::malformed(format!(
                "Zeile {line}, Eintrag {}: keine Zahl ({entry})",
                column + 1
            ))
        })?;
    }
    Ok(parsed)
}

/// Validiert eine benutzerdefinierte Regel und zerlegt sie in Knoten und Gewichte.
///
/// Erlaubt einfache und doppelte Anführungszeichen. Keine Prüfung der Gewichtssumme.
pub fn validate(raw: &str) -> Result<FormulaData, ValidationError> {
    let rows = parse_table(&normalize_quotes(raw))?;
    Ok(FormulaData::from_rows(&rows))
}
