//! Quadraturformeln auf dem Referenzdreieck.

use glam::DVec2;

/// Reservierter Schlüssel für die benutzerdefinierte Formel.
pub const CUSTOM_FORMULA_KEY: &str = "custom";

/// Anzeigename des synthetischen Custom-Eintrags in der Formelauswahl.
pub const CUSTOM_FORMULA_LABEL: &str = "Benutzerdefiniert";

/// Knoten und Gewichte einer Quadraturregel (indexgleich, Reihenfolge bleibt erhalten).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormulaData {
    /// Knoten in Referenzdreieck-Koordinaten (u, v)
    pub nodes: Vec<DVec2>,
    /// Gewichte, indexgleich zu `nodes`
    pub weights: Vec<f64>,
}

impl FormulaData {
    /// Erstellt eine Regel aus bereits aufgeteilten Knoten und Gewichten.
    ///
    /// Gibt `None` zurück, wenn die Längen nicht übereinstimmen.
    pub fn new(nodes: Vec<DVec2>, weights: Vec<f64>) -> Option<Self> {
        (nodes.len() == weights.len()).then_some(Self { nodes, weights })
    }

    /// Zerlegt Zeilen `[x, y, w]` in Knoten und Gewichte.
    pub fn from_rows(rows: &[[f64; 3]]) -> Self {
        let mut data = Self {
            nodes: Vec::with_capacity(rows.len()),
            weights: Vec::with_capacity(rows.len()),
        };
        for &[x, y, w] in rows {
            data.nodes.push(DVec2::new(x, y));
            data.weights.push(w);
        }
        data
    }

    /// Anzahl der Knoten N.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn die Regel keine Knoten enthält.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Knoten im Wire-Format `[[x, y], ...]`.
    pub fn node_pairs(&self) -> Vec<[f64; 2]> {
        self.nodes.iter().map(|n| [n.x, n.y]).collect()
    }
}

/// Vordefinierte Quadraturformel aus dem Katalog.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureFormula {
    /// Eindeutiger Schlüssel (`"custom"` ist reserviert)
    pub key: String,
    /// Anzeigename
    pub name: String,
    /// Beschreibung (darf Markup enthalten, wird extern formatiert)
    pub description: String,
    /// Knoten/Gewichte; `None` bei unvollständigen Katalog-Einträgen
    pub data: Option<FormulaData>,
}

impl QuadratureFormula {
    /// Anzahl der Knoten, falls Daten vorhanden sind.
    pub fn node_count(&self) -> Option<usize> {
        self.data.as_ref().map(FormulaData::len)
    }
}
