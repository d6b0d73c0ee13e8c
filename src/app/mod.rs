//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod dispatch;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod preview;
/// Application State und Anfrage-Automaten
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Katalog, Eingaben, Anfragen, Ausgaben).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use dispatch::PendingRequest;
pub use events::{AppCommand, AppIntent};
pub use preview::{build as build_node_preview, NodePreview};
pub use state::{
    AppState, CalculationResult, CatalogStatus, ColorRole, ControlState, RequestKind,
    RequestSlot, RequestState, SessionState, Ticket, UiState,
};
pub use use_cases::request_build::InputValidationError;
