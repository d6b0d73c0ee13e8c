//! Application State: zentrale Datenhaltung.

mod app_state;
mod request_slot;
mod session;
mod ui;

pub use app_state::{AppState, CalculationResult, CatalogStatus};
pub use request_slot::{RequestKind, RequestSlot, RequestState, Ticket};
pub use session::{ColorRole, SessionState};
pub use ui::{ControlState, UiState, DESCRIPTION_PROMPT};
