//! JSON-Bodies der externen Schnittstellen.
//!
//! `POST plot`:      `{vertices, nodes, node_color, edge_color, fill_color}` → `{image_data}`
//! `POST calculate`: `{func_str, nodes, weights, vertices}` → `{result}`
//! Fehlerfall beider Endpunkte: `{error}` mit Nicht-Erfolgs-Status.
//!
//! Der Evaluator wendet beim Aufsummieren den Flächenfaktor an
//! (siehe [`crate::core::quadrature`]); Knoten werden in Referenzkoordinaten gesendet.

use crate::core::{FormulaData, TargetTriangle};
use serde::{Deserialize, Serialize};

/// Farben für die Knoten-Darstellung.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotColors {
    pub node_color: String,
    pub edge_color: String,
    pub fill_color: String,
}

/// Anfrage an den Renderer: Dreieck und Knotenverteilung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRequest {
    pub vertices: [[f64; 2]; 3],
    pub nodes: Vec<[f64; 2]>,
    #[serde(flatten)]
    pub colors: PlotColors,
}

impl PlotRequest {
    /// Baut eine Plot-Anfrage aus einem Dreieck-Snapshot.
    pub fn new(triangle: &TargetTriangle, rule: &FormulaData, colors: PlotColors) -> Self {
        Self {
            vertices: vertex_pairs(triangle),
            nodes: rule.node_pairs(),
            colors,
        }
    }
}

/// Anfrage an den Evaluator: Funktion, Regel und Zieldreieck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub func_str: String,
    pub nodes: Vec<[f64; 2]>,
    pub weights: Vec<f64>,
    pub vertices: [[f64; 2]; 3],
}

impl CalculateRequest {
    /// Baut eine Berechnungs-Anfrage aus einem Dreieck-Snapshot.
    pub fn new(func_str: impl Into<String>, rule: &FormulaData, triangle: &TargetTriangle) -> Self {
        Self {
            func_str: func_str.into(),
            nodes: rule.node_pairs(),
            weights: rule.weights.clone(),
            vertices: vertex_pairs(triangle),
        }
    }
}

/// Erfolgsantwort des Renderers (Base64-PNG).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotResponse {
    pub image_data: String,
}

/// Erfolgsantwort des Evaluators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: f64,
}

/// Fehlerantwort beider Endpunkte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn vertex_pairs(triangle: &TargetTriangle) -> [[f64; 2]; 3] {
    triangle.vertices().map(|v| v.to_array())
}
