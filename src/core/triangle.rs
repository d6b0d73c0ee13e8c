//! Zieldreieck und affine Abbildung vom Referenzdreieck.
//!
//! Referenzdreieck: (0,0), (1,0), (0,1). Ein Referenzpunkt `(u, v)` wird als
//! baryzentrische Koordinate gelesen, die dritte ist `1 - u - v`:
//!
//! ```text
//! P = (1 - u - v) * V1 + u * V2 + v * V3
//! ```
//!
//! Die Gewichte bleiben unverändert. Den Flächenfaktor (Jacobi-Determinante,
//! `2 * signierte Fläche`) wendet der Evaluator beim Aufsummieren an,
//! nicht diese Abbildung.

use glam::DVec2;

/// Standard-Eckpunkte: rechtwinkliges Einheitsdreieck.
pub const DEFAULT_VERTICES: [DVec2; 3] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(0.0, 1.0),
];

/// Relativer Rand um die Plot-Grenzen.
const PLOT_MARGIN: f64 = 0.1;

/// Ein Eckpunkt enthält NaN oder ±∞.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Eckpunkt {} hat keine gültigen Koordinaten", .index + 1)]
pub struct NonFiniteVertex {
    /// Index des Eckpunkts (0-basiert)
    pub index: usize,
}

/// Dreieck mit drei Eckpunkten in kartesischen Koordinaten.
///
/// Degenerierte Dreiecke (Fläche 0) werden hier nicht abgelehnt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTriangle {
    vertices: [DVec2; 3],
}

impl TargetTriangle {
    /// Erstellt ein Dreieck aus drei Eckpunkten.
    pub fn new(v1: DVec2, v2: DVec2, v3: DVec2) -> Self {
        Self {
            vertices: [v1, v2, v3],
        }
    }

    /// Eckpunkte in Reihenfolge V1, V2, V3.
    pub fn vertices(&self) -> [DVec2; 3] {
        self.vertices
    }

    /// Setzt einen einzelnen Eckpunkt. Indizes außerhalb 0..3 werden ignoriert.
    pub fn set_vertex(&mut self, index: usize, position: DVec2) {
        if let Some(v) = self.vertices.get_mut(index) {
            *v = position;
        }
    }

    /// Prüft, dass alle Koordinaten endlich sind.
    pub fn ensure_finite(&self) -> Result<(), NonFiniteVertex> {
        match self.vertices.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(NonFiniteVertex { index }),
            None => Ok(()),
        }
    }

    /// Bildet einen Referenzpunkt `(u, v)` auf das Dreieck ab.
    pub fn affine_map(&self, reference: DVec2) -> DVec2 {
        affine_map(reference, &self.vertices)
    }

    /// Bildet alle Knoten ab, Reihenfolge bleibt erhalten.
    pub fn map_nodes(&self, nodes: &[DVec2]) -> Vec<DVec2> {
        nodes.iter().map(|&n| self.affine_map(n)).collect()
    }

    /// Signierte Fläche (positiv bei Gegenuhrzeigersinn).
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        0.5 * (b - a).perp_dot(c - a)
    }

    /// Jacobi-Determinante der affinen Abbildung (= 2 × signierte Fläche).
    pub fn jacobian_determinant(&self) -> f64 {
        2.0 * self.signed_area()
    }

    /// Schwerpunkt des Dreiecks.
    pub fn centroid(&self) -> DVec2 {
        let [a, b, c] = self.vertices;
        (a + b + c) / 3.0
    }
}

impl Default for TargetTriangle {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
        }
    }
}

/// Freie Variante der affinen Abbildung für beliebige Eckpunkt-Arrays.
pub fn affine_map(reference: DVec2, vertices: &[DVec2; 3]) -> DVec2 {
    let [v1, v2, v3] = *vertices;
    (1.0 - reference.x - reference.y) * v1 + reference.x * v2 + reference.y * v3
}

/// Achsenparallele Plot-Grenzen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub min: DVec2,
    pub max: DVec2,
}

/// Berechnet Plot-Grenzen über Eckpunkte und abgebildete Knoten.
///
/// 10 % Rand je Achse; eine Ausdehnung von 0 zählt als 1.0. Ohne Punkte `[-1, 1]²`.
pub fn plot_bounds(vertices: &[DVec2], mapped_nodes: &[DVec2]) -> PlotBounds {
    let mut points = vertices.iter().chain(mapped_nodes).copied();
    let Some(first) = points.next() else {
        return PlotBounds {
            min: DVec2::splat(-1.0),
            max: DVec2::splat(1.0),
        };
    };

    let (min, max) = points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
    let extent = max - min;
    let range = DVec2::new(
        if extent.x > 0.0 { extent.x } else { 1.0 },
        if extent.y > 0.0 { extent.y } else { 1.0 },
    );

    PlotBounds {
        min: min - PLOT_MARGIN * range,
        max: max + PLOT_MARGIN * range,
    }
}
