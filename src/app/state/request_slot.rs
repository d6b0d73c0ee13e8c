//! Zustandsautomat pro Anfrageart (Plot, Berechnung).
//!
//! ```text
//! Idle ──issue──▶ InFlight ──resolve──▶ Succeeded | Failed
//!   ▲                                      │
//!   └──────────────── reset ◀──────────────┘
//! ```
//!
//! Aus einem Endzustand ist `issue` wieder erlaubt. Jede Ausgabe vergibt ein
//! neues Ticket; Ergebnisse mit fremdem Ticket werden verworfen.

/// Art einer Anfrage an den externen Kollaborateur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Knotenverteilung rendern
    Plot,
    /// Integral berechnen
    Calculate,
}

impl std::fmt::Display for RequestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plot => write!(f, "Plot"),
            Self::Calculate => write!(f, "Berechnung"),
        }
    }
}

/// Kennung einer ausgegebenen Anfrage.
pub type Ticket = u64;

/// Beobachtbarer Zustand einer Anfrageart.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState<T> {
    #[default]
    Idle,
    InFlight {
        ticket: Ticket,
    },
    Succeeded(T),
    Failed(String),
}

impl<T> RequestState<T> {
    /// Gibt `true` zurück, solange eine Anfrage aussteht.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// Gibt `true` zurück für `Succeeded` und `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }
}

/// Automat einer Anfrageart mit fortlaufender Ticket-Vergabe.
#[derive(Debug, Clone)]
pub struct RequestSlot<T> {
    state: RequestState<T>,
    next_ticket: Ticket,
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestSlot<T> {
    /// Erstellt einen Slot im Zustand `Idle`.
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            next_ticket: 1,
        }
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    /// Gibt `true` zurück, solange eine Anfrage aussteht.
    pub fn is_in_flight(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Nutzlast des letzten Erfolgs.
    pub fn succeeded(&self) -> Option<&T> {
        match &self.state {
            RequestState::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    /// Wechselt nach `InFlight` und liefert das neue Ticket.
    ///
    /// `None`, wenn bereits eine Anfrage aussteht.
    pub fn issue(&mut self) -> Option<Ticket> {
        if self.state.is_in_flight() {
            return None;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.state = RequestState::InFlight { ticket };
        Some(ticket)
    }

    /// Übernimmt das Ergebnis zum passenden Ticket.
    ///
    /// Gibt `false` zurück (Zustand unverändert), wenn das Ticket nicht zur
    /// ausstehenden Anfrage gehört.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T, String>) -> bool {
        match self.state {
            RequestState::InFlight { ticket: pending } if pending == ticket => {
                self.state = match outcome {
                    Ok(payload) => RequestState::Succeeded(payload),
                    Err(reason) => RequestState::Failed(reason),
                };
                true
            }
            _ => false,
        }
    }

    /// Zurück nach `Idle`. Die Ticket-Folge läuft weiter.
    pub fn reset(&mut self) {
        self.state = RequestState::Idle;
    }
}
