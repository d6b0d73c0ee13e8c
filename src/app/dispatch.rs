//! Ausgegebene Anfragen und ihre Zustellung an das Backend.
//!
//! Use-Cases legen Anfragen nur in die Outbox des `AppState`. Der Host
//! stellt sie zu und speist das Ergebnis als Intent wieder ein.

use super::state::{RequestKind, Ticket};
use super::AppIntent;
use crate::transport::{CalculateRequest, EvaluatorBackend, PlotRequest};

/// Ausgegebene, noch nicht zugestellte Anfrage.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingRequest {
    Plot { ticket: Ticket, body: PlotRequest },
    Calculate { ticket: Ticket, body: CalculateRequest },
}

impl PendingRequest {
    /// Anfrageart.
    pub fn kind(&self) -> RequestKind {
        match self {
            Self::Plot { .. } => RequestKind::Plot,
            Self::Calculate { .. } => RequestKind::Calculate,
        }
    }

    /// Ticket der Ausgabe.
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::Plot { ticket, .. } | Self::Calculate { ticket, .. } => *ticket,
        }
    }

    /// Stellt die Anfrage zu und liefert den Abschluss-Intent.
    ///
    /// Endet immer mit einem Intent, auch bei Transportfehlern.
    pub fn dispatch(self, backend: &dyn EvaluatorBackend) -> AppIntent {
        log::debug!("{}-Anfrage #{} wird zugestellt", self.kind(), self.ticket());
        match self {
            Self::Plot { ticket, body } => AppIntent::PlotFinished {
                ticket,
                outcome: backend.plot(&body).map(|response| response.image_data),
            },
            Self::Calculate { ticket, body } => AppIntent::CalculationFinished {
                ticket,
                outcome: backend.calculate(&body).map(|response| response.result),
            },
        }
    }
}
