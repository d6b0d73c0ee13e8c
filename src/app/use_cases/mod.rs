//! Use-Cases der Application-Layer-Orchestrierung.

pub mod calculate;
pub mod catalog;
pub mod plot;
pub mod request_build;
pub mod reset;
pub mod save_image;
pub mod session;
