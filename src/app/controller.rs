//! Application Controller für zentrale Event-Verarbeitung.

use super::dispatch::PendingRequest;
use super::preview::{self, NodePreview};
use super::use_cases::request_build::InputValidationError;
use super::{AppCommand, AppIntent, AppState};
use crate::transport::EvaluatorBackend;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Formelkatalog ===
            AppCommand::LoadCatalog { sources } => handlers::catalog::load(state, sources),
            AppCommand::ApplyCatalogJson { json } => handlers::catalog::apply_json(state, json),
            AppCommand::SelectFormula { key } => handlers::catalog::select(state, key),

            // === Sitzung ===
            AppCommand::SetFunctionExpression { text } => {
                handlers::session::set_function_expression(state, text)
            }
            AppCommand::SetCustomFormulaName { text } => {
                handlers::session::set_custom_name(state, text)
            }
            AppCommand::SetCustomFormulaTable { text } => {
                handlers::session::set_custom_table(state, text)
            }
            AppCommand::SetVertex { index, position } => {
                handlers::session::set_vertex(state, index, position)
            }
            AppCommand::SetColor { role, value } => handlers::session::set_color(state, role, value),
            AppCommand::DismissAlert => handlers::session::dismiss_alert(state),
            AppCommand::ResetSession => handlers::session::reset(state),

            // === Anfragen ===
            AppCommand::IssuePlot => handlers::requests::issue_plot(state),
            AppCommand::IssueCalculation => handlers::requests::issue_calculation(state),
            AppCommand::ResolvePlot { ticket, outcome } => {
                handlers::requests::resolve_plot(state, ticket, outcome)
            }
            AppCommand::ResolveCalculation { ticket, outcome } => {
                handlers::requests::resolve_calculation(state, ticket, outcome)
            }

            // === Datei-I/O ===
            AppCommand::SaveImage { path } => handlers::file_io::save_image(state, path)?,
        }

        Ok(())
    }

    /// Entnimmt alle ausgegebenen, noch nicht zugestellten Anfragen.
    pub fn take_pending_requests(&self, state: &mut AppState) -> Vec<PendingRequest> {
        std::mem::take(&mut state.outbox)
    }

    /// Stellt alle ausstehenden Anfragen zu und speist die Ergebnisse ein.
    ///
    /// Blockiert pro Anfrage, bis das Backend antwortet.
    pub fn dispatch_pending(
        &mut self,
        state: &mut AppState,
        backend: &dyn EvaluatorBackend,
    ) -> anyhow::Result<()> {
        for request in self.take_pending_requests(state) {
            let completion = request.dispatch(backend);
            self.handle_intent(state, completion)?;
        }
        Ok(())
    }

    /// Baut die Knoten-Vorschau aus dem aktuellen AppState.
    pub fn build_node_preview(&self, state: &AppState) -> Result<NodePreview, InputValidationError> {
        preview::build(state)
    }
}
