//! Backend-Trait und Fehlerbild für Anfragen an Evaluator/Renderer.

use super::wire::{CalculateRequest, CalculateResponse, ErrorBody, PlotRequest, PlotResponse};
use serde::de::DeserializeOwned;

/// Fehlgeschlagene Anfrage an den externen Kollaborateur.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestFailure {
    /// Server hat mit Nicht-Erfolgs-Status geantwortet
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Transport selbst ist fehlgeschlagen (Verbindung, Timeout, …)
    #[error("{0}")]
    Transport(String),
    /// Antwort-Body entspricht nicht dem erwarteten Format
    #[error("Ungültige Antwort: {0}")]
    MalformedResponse(String),
}

impl RequestFailure {
    /// Spezifischste verfügbare Meldung für die Anzeige.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Externer Evaluator/Renderer.
///
/// Jede Anfrage endet mit Erfolg oder `RequestFailure`; Abbruch gibt es nicht.
pub trait EvaluatorBackend {
    /// Rendert Dreieck und Knoten.
    fn plot(&self, request: &PlotRequest) -> Result<PlotResponse, RequestFailure>;

    /// Berechnet das Integral.
    fn calculate(&self, request: &CalculateRequest) -> Result<CalculateResponse, RequestFailure>;
}

/// Dekodiert eine HTTP-Antwort.
///
/// Meldungspriorität im Fehlerfall: `error` aus dem Body, sonst Status-Text.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    status_text: Option<&str>,
    body: &str,
) -> Result<T, RequestFailure> {
    let server_message = || {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
    };

    if (200..300).contains(&status) {
        return serde_json::from_str::<T>(body).map_err(|e| match server_message() {
            Some(message) => RequestFailure::Server { status, message },
            None => RequestFailure::MalformedResponse(e.to_string()),
        });
    }

    let message = server_message().unwrap_or_else(|| match status_text {
        Some(text) => format!("HTTP {status} {text}"),
        None => format!("HTTP {status}"),
    });
    Err(RequestFailure::Server { status, message })
}
