//! Builder für die Knoten-Vorschau aus dem AppState.

use super::use_cases::request_build::{self, InputValidationError};
use super::AppState;
use crate::core::{plot_bounds, PlotBounds};
use glam::DVec2;

/// Abgebildete Knoten samt Achsengrenzen für eine lokale Darstellung.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePreview {
    /// Eckpunkte V1, V2, V3
    pub vertices: [DVec2; 3],
    /// Knoten im Zieldreieck, Reihenfolge wie in der Formel
    pub mapped_nodes: Vec<DVec2>,
    /// Gewichte, indexgleich zu `mapped_nodes`
    pub weights: Vec<f64>,
    /// Achsengrenzen mit Rand
    pub bounds: PlotBounds,
}

/// Baut die Vorschau aus Dreieck und gewählter Formel.
pub fn build(state: &AppState) -> Result<NodePreview, InputValidationError> {
    let triangle = state.session.triangle;
    triangle.ensure_finite()?;
    let formula = request_build::resolve_formula(state)?;

    let vertices = triangle.vertices();
    let mapped_nodes = triangle.map_nodes(&formula.data.nodes);
    let bounds = plot_bounds(&vertices, &mapped_nodes);

    Ok(NodePreview {
        vertices,
        mapped_nodes,
        weights: formula.data.weights,
        bounds,
    })
}
