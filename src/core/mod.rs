//! Core-Domänentypen: Quadraturformeln, Katalog, Zieldreieck, Referenz-Integration.

pub mod catalog;
pub mod formula;
pub mod quadrature;
pub mod triangle;

pub use catalog::{CatalogLoadError, CatalogSource, FormulaCatalog};
pub use formula::{FormulaData, QuadratureFormula, CUSTOM_FORMULA_KEY, CUSTOM_FORMULA_LABEL};
pub use quadrature::integrate;
pub use triangle::{
    affine_map, plot_bounds, NonFiniteVertex, PlotBounds, TargetTriangle, DEFAULT_VERTICES,
};
