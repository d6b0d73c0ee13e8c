//! Grenze zum externen Evaluator/Renderer: Wire-Format, Backend-Trait, HTTP-Client.

pub mod backend;
pub mod http;
pub mod wire;

pub use backend::{decode_response, EvaluatorBackend, RequestFailure};
pub use http::{fetch_catalog_text, HttpBackend};
pub use wire::{CalculateRequest, CalculateResponse, ErrorBody, PlotColors, PlotRequest, PlotResponse};
