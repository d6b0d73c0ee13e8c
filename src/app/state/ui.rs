/// Hinweistext, solange keine Formel gewählt ist.
pub const DESCRIPTION_PROMPT: &str = "Bitte eine Integrationsformel auswählen.";

/// Verfügbarkeit der Bedienelemente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// "Berechnen" bedienbar
    pub calculate_enabled: bool,
    /// "Plotten" bedienbar
    pub plot_enabled: bool,
    /// "Bild speichern" bedienbar (nur nach erfolgreichem Plot)
    pub save_image_enabled: bool,
    /// Name/Tabelle der benutzerdefinierten Formel editierbar
    pub custom_fields_enabled: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            calculate_enabled: true,
            plot_enabled: true,
            save_image_enabled: false,
            custom_fields_enabled: false,
        }
    }
}

/// Für den Host sichtbarer Ausgabe-Zustand
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Beschreibung der gewählten Formel (Markup wird extern gerendert)
    pub description: String,
    /// Ergebnis- bzw. Fehlertext der Berechnung
    pub calculation_output: String,
    /// Text im Plotbereich (Platzhalter oder Fehler); `None` wenn ein Bild vorliegt
    pub plot_message: Option<String>,
    /// Blockierende Meldung nach Eingabefehlern
    pub alert: Option<String>,
    /// Statuszeile (z.B. nach dem Speichern)
    pub status_message: Option<String>,
    /// Verfügbarkeit der Bedienelemente
    pub controls: ControlState,
}

impl UiState {
    /// Erstellt den Ausgangszustand.
    pub fn new() -> Self {
        Self {
            description: DESCRIPTION_PROMPT.to_string(),
            calculation_output: String::new(),
            plot_message: None,
            alert: None,
            status_message: None,
            controls: ControlState::default(),
        }
    }

    /// Leert alle angezeigten Ausgaben.
    pub fn clear_outputs(&mut self) {
        self.calculation_output.clear();
        self.plot_message = None;
        self.alert = None;
        self.status_message = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
