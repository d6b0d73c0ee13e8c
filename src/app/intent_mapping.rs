//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use std::path::PathBuf;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CatalogLoadRequested => vec![AppCommand::LoadCatalog {
            sources: state.options.catalog_sources(),
        }],
        AppIntent::CatalogReceived { json } => vec![AppCommand::ApplyCatalogJson { json }],
        AppIntent::FormulaSelected { key } => vec![AppCommand::SelectFormula { key }],
        AppIntent::FunctionExpressionChanged { text } => {
            vec![AppCommand::SetFunctionExpression { text }]
        }
        AppIntent::CustomFormulaNameChanged { text } => {
            vec![AppCommand::SetCustomFormulaName { text }]
        }
        AppIntent::CustomFormulaTableChanged { text } => {
            vec![AppCommand::SetCustomFormulaTable { text }]
        }
        AppIntent::VertexChanged { index, position } => {
            vec![AppCommand::SetVertex { index, position }]
        }
        AppIntent::ColorChanged { role, value } => vec![AppCommand::SetColor { role, value }],
        // Bedienelement gesperrt: Intent verfällt ohne Command
        AppIntent::PlotRequested if !state.ui.controls.plot_enabled => vec![],
        AppIntent::PlotRequested => vec![AppCommand::DismissAlert, AppCommand::IssuePlot],
        AppIntent::CalculateRequested if !state.ui.controls.calculate_enabled => vec![],
        AppIntent::CalculateRequested => {
            vec![AppCommand::DismissAlert, AppCommand::IssueCalculation]
        }
        AppIntent::PlotFinished { ticket, outcome } => {
            vec![AppCommand::ResolvePlot { ticket, outcome }]
        }
        AppIntent::CalculationFinished { ticket, outcome } => {
            vec![AppCommand::ResolveCalculation { ticket, outcome }]
        }
        AppIntent::SaveImageRequested { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from(&state.options.image_file_name));
            vec![AppCommand::SaveImage { path }]
        }
        AppIntent::AlertDismissed => vec![AppCommand::DismissAlert],
        AppIntent::ResetRequested => vec![AppCommand::ResetSession],
    }
}
