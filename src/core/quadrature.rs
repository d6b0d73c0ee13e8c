//! Referenz-Auswertung einer Quadraturregel auf einem Zieldreieck.
//!
//! Legt den Jacobi-Vertrag fest, den der externe Evaluator einhalten muss:
//!
//! ```text
//! I ≈ |J| · Σ wᵢ · f(affine_map(nodeᵢ)),   |J| = 2 · |signierte Fläche|
//! ```

use super::{FormulaData, TargetTriangle};
use glam::DVec2;

/// Wertet `f` mit der gegebenen Regel auf dem Zieldreieck aus.
pub fn integrate<F>(rule: &FormulaData, triangle: &TargetTriangle, f: F) -> f64
where
    F: Fn(DVec2) -> f64,
{
    let weighted_sum: f64 = rule
        .nodes
        .iter()
        .zip(&rule.weights)
        .map(|(&node, &w)| w * f(triangle.affine_map(node)))
        .sum();
    weighted_sum * triangle.jacobian_determinant().abs()
}
