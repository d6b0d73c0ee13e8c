use crate::core::{TargetTriangle, CUSTOM_FORMULA_KEY};
use crate::transport::PlotColors;

/// Farbrolle im Plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    /// Quadraturknoten
    Node,
    /// Dreieckskanten
    Edge,
    /// Dreiecksfläche
    Fill,
}

/// Eingaben der laufenden Sitzung (Formelwahl, Funktion, Dreieck, Farben)
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Gewählter Katalog-Schlüssel oder `"custom"`; `None` = keine Auswahl
    pub selected_key: Option<String>,
    /// Funktionsausdruck f(x, y), geht ohne Rand-Leerzeichen an den Evaluator
    pub function_expression: String,
    /// Bezeichnung der benutzerdefinierten Formel
    pub custom_name: String,
    /// Rohtext der benutzerdefinierten Tabelle `[[x, y, w], ...]`
    pub custom_table: String,
    /// Zieldreieck
    pub triangle: TargetTriangle,
    /// Plot-Farben
    pub colors: PlotColors,
}

impl SessionState {
    /// Erstellt eine leere Sitzung mit Standard-Dreieck.
    pub fn new(colors: PlotColors) -> Self {
        Self {
            selected_key: None,
            function_expression: String::new(),
            custom_name: String::new(),
            custom_table: String::new(),
            triangle: TargetTriangle::default(),
            colors,
        }
    }

    /// Gibt `true` zurück, wenn die benutzerdefinierte Formel gewählt ist.
    pub fn is_custom_selected(&self) -> bool {
        self.selected_key.as_deref() == Some(CUSTOM_FORMULA_KEY)
    }

    /// Bezeichnung der benutzerdefinierten Formel; leer ergibt `"custom"`.
    pub fn custom_label(&self) -> String {
        match self.custom_name.trim() {
            "" => CUSTOM_FORMULA_KEY.to_string(),
            name => name.to_string(),
        }
    }

    /// Setzt eine einzelne Plot-Farbe.
    pub fn set_color(&mut self, role: ColorRole, value: String) {
        let slot = match role {
            ColorRole::Node => &mut self.colors.node_color,
            ColorRole::Edge => &mut self.colors.edge_color,
            ColorRole::Fill => &mut self.colors.fill_color,
        };
        *slot = value;
    }

    /// Leert die Custom-Felder.
    pub fn clear_custom_input(&mut self) {
        self.custom_name.clear();
        self.custom_table.clear();
    }
}
