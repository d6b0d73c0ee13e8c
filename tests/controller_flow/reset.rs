use super::support::{loaded, select, send, ReferenceBackend};
use glam::DVec2;
use triangle_quadrature::app::{ColorRole, RequestState};
use triangle_quadrature::core::DEFAULT_VERTICES;
use triangle_quadrature::{AppCommand, AppIntent, PendingRequest, CUSTOM_FORMULA_KEY};

#[test]
fn test_reset_restores_defaults_and_idles_both_kinds() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, CUSTOM_FORMULA_KEY);
    send(
        &mut controller,
        &mut state,
        AppIntent::CustomFormulaTableChanged {
            text: "[[0.3, 0.3, 0.5]]".into(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::CustomFormulaNameChanged {
            text: "Eigene".into(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::VertexChanged {
            index: 2,
            position: DVec2::new(0.0, 7.0),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::ColorChanged {
            role: ColorRole::Edge,
            value: "navy".into(),
        },
    );
    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    send(&mut controller, &mut state, AppIntent::PlotRequested);
    assert_eq!(state.outbox.len(), 2);

    send(&mut controller, &mut state, AppIntent::ResetRequested);

    assert_eq!(state.plot.state(), &RequestState::Idle);
    assert_eq!(state.calculation.state(), &RequestState::Idle);
    assert_eq!(state.session.triangle.vertices(), DEFAULT_VERTICES);
    assert!(state.session.custom_table.is_empty());
    assert!(state.session.custom_name.is_empty());
    assert!(state.session.function_expression.is_empty());
    assert_eq!(state.session.colors.edge_color, "black");
    assert_eq!(state.session.selected_key.as_deref(), Some("entwurf"));
    assert!(state.ui.calculation_output.is_empty());
    assert!(state.ui.controls.calculate_enabled);
    assert!(state.ui.controls.plot_enabled);
    assert!(!state.ui.controls.save_image_enabled);
    assert!(state.outbox.is_empty());
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ResetSession)
    ));
}

#[test]
fn test_late_response_after_reset_is_ignored() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend::with_image("aGFsbG8=");
    select(&mut controller, &mut state, "gauss_1");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );
    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    send(&mut controller, &mut state, AppIntent::PlotRequested);

    // Host hat die Anfragen bereits entnommen, dann wird zurückgesetzt
    let in_flight = controller.take_pending_requests(&mut state);
    send(&mut controller, &mut state, AppIntent::ResetRequested);

    for request in in_flight {
        let completion = request.dispatch(&backend);
        send(&mut controller, &mut state, completion);
    }

    assert_eq!(state.calculation.state(), &RequestState::Idle);
    assert_eq!(state.plot.state(), &RequestState::Idle);
    assert!(state.ui.calculation_output.is_empty());
    assert!(!state.ui.controls.save_image_enabled);
}

#[test]
fn test_stale_ticket_does_not_resolve_new_request() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "gauss_1");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );
    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    let old_ticket = state.outbox[0].ticket();

    send(&mut controller, &mut state, AppIntent::ResetRequested);
    select(&mut controller, &mut state, "gauss_1");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );
    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    let PendingRequest::Calculate { ticket, .. } = state.outbox[0] else {
        panic!("Berechnungs-Anfrage erwartet");
    };
    assert_ne!(ticket, old_ticket);

    send(
        &mut controller,
        &mut state,
        AppIntent::CalculationFinished {
            ticket: old_ticket,
            outcome: Ok(99.0),
        },
    );
    assert!(state.calculation.is_in_flight());
    assert!(!state.ui.controls.calculate_enabled);

    send(
        &mut controller,
        &mut state,
        AppIntent::CalculationFinished {
            ticket,
            outcome: Ok(0.5),
        },
    );
    assert!(state.ui.calculation_output.ends_with("0.5"));
}
