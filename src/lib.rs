//! Triangle Quadrature Library.
//! Formelkatalog, Validierung, Dreiecksgeometrie und Berechnungs-Orchestrierung
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod rule_text;
pub mod shared;
pub mod transport;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, NodePreview, PendingRequest, RequestKind,
    RequestState, UiState,
};
pub use core::{
    integrate, CatalogLoadError, CatalogSource, FormulaCatalog, FormulaData, QuadratureFormula,
    TargetTriangle, CUSTOM_FORMULA_KEY,
};
pub use rule_text::{validate, ValidationError};
pub use shared::AppOptions;
pub use transport::{EvaluatorBackend, HttpBackend, RequestFailure};
