use crate::app::dispatch::PendingRequest;
use crate::app::CommandLog;
use crate::core::FormulaCatalog;
use crate::shared::AppOptions;

use super::{RequestSlot, SessionState, UiState};

/// Ladezustand des Formelkatalogs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// Noch kein Ladeversuch
    #[default]
    NotLoaded,
    /// Katalog geladen (kann leer sein)
    Loaded,
    /// Alle Quellen fehlgeschlagen; Meldung des letzten Fehlers
    Unavailable(String),
}

/// Ergebnis einer erfolgreichen Berechnung
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Integralwert laut Evaluator
    pub value: f64,
    /// Formelbezeichnung zum Zeitpunkt der Ausgabe
    pub formula_label: String,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Vordefinierte Formeln (nach dem Laden nur lesend)
    pub catalog: FormulaCatalog,
    /// Ladezustand des Katalogs
    pub catalog_status: CatalogStatus,
    /// Eingaben der Sitzung
    pub session: SessionState,
    /// Automat für Plot-Anfragen (Nutzlast: Base64-PNG)
    pub plot: RequestSlot<String>,
    /// Automat für Berechnungen
    pub calculation: RequestSlot<CalculationResult>,
    /// Formelbezeichnung der ausstehenden Berechnung
    pub calculation_label: Option<String>,
    /// Ausgabe-Zustand
    pub ui: UiState,
    /// Ausgegebene, noch nicht versendete Anfragen
    pub outbox: Vec<PendingRequest>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Endpunkte, Standardfarben)
    pub options: AppOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen neuen App-State mit den übergebenen Optionen
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            catalog: FormulaCatalog::new(),
            catalog_status: CatalogStatus::NotLoaded,
            session: SessionState::new(options.default_colors()),
            plot: RequestSlot::new(),
            calculation: RequestSlot::new(),
            calculation_label: None,
            ui: UiState::new(),
            outbox: Vec::new(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Schlüssel für die Formelauswahl (aufsteigend nach Knotenzahl, `"custom"` zuletzt)
    pub fn formula_keys(&self) -> Vec<String> {
        self.catalog.ordered_keys()
    }

    /// Gibt `true` zurück, wenn der Katalog nicht geladen werden konnte
    pub fn formulas_unavailable(&self) -> bool {
        matches!(self.catalog_status, CatalogStatus::Unavailable(_))
    }

    /// Statischer Download-Link der Roh-Katalogdatei (unverarbeitet durchgereicht)
    pub fn catalog_download_link(&self) -> Option<&str> {
        self.options.catalog_download_url.as_deref()
    }

    /// Base64-Bild des letzten erfolgreichen Plots
    pub fn plot_image(&self) -> Option<&str> {
        self.plot.succeeded().map(String::as_str)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
