use super::support::{loaded, select, send, ReferenceBackend};
use approx::assert_relative_eq;
use glam::DVec2;
use triangle_quadrature::app::{CalculationResult, RequestState};
use triangle_quadrature::{AppCommand, AppIntent, PendingRequest, CUSTOM_FORMULA_KEY};

const THIRD: f64 = 0.16666666666666666;

#[test]
fn test_preset_calculation_sends_formula_verbatim() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "gauss_3");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "x+y".into() },
    );

    send(&mut controller, &mut state, AppIntent::CalculateRequested);

    assert!(state.calculation.is_in_flight());
    assert!(!state.ui.controls.calculate_enabled);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::IssueCalculation)
    ));

    let pending = controller.take_pending_requests(&mut state);
    assert_eq!(pending.len(), 1);
    let PendingRequest::Calculate { body, .. } = &pending[0] else {
        panic!("Berechnungs-Anfrage erwartet: {:?}", pending[0]);
    };
    assert_eq!(body.func_str, "x+y");
    assert_eq!(body.vertices, [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
    assert_eq!(
        body.nodes,
        vec![
            [THIRD, THIRD],
            [0.6666666666666666, THIRD],
            [THIRD, 0.6666666666666666]
        ]
    );
    assert_eq!(body.weights, vec![THIRD, THIRD, THIRD]);
}

#[test]
fn test_calculation_result_is_shown_with_formula_label() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend::default();
    select(&mut controller, &mut state, "gauss_3");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "x+y".into() },
    );
    send(&mut controller, &mut state, AppIntent::CalculateRequested);

    controller
        .dispatch_pending(&mut state, &backend)
        .expect("Zustellung sollte ohne Fehler durchlaufen");

    let RequestState::Succeeded(CalculationResult {
        value,
        formula_label,
    }) = state.calculation.state()
    else {
        panic!("Erfolg erwartet: {:?}", state.calculation.state());
    };
    // ∫ (x + y) über das Einheitsdreieck = 1/3
    assert_relative_eq!(*value, 1.0 / 3.0, epsilon = 1e-12);
    assert_eq!(formula_label, "gauss_3");
    assert!(state.ui.calculation_output.starts_with("Ergebnis (gauss_3): 0.333"));
    assert!(state.ui.controls.calculate_enabled);
    assert!(state.outbox.is_empty());
}

#[test]
fn test_jacobian_scales_result_on_target_triangle() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend::default();
    select(&mut controller, &mut state, "gauss_4");
    for (index, position) in [(0, (1.0, 1.0)), (1, (5.0, 1.0)), (2, (1.0, 4.0))] {
        send(
            &mut controller,
            &mut state,
            AppIntent::VertexChanged {
                index,
                position: DVec2::new(position.0, position.1),
            },
        );
    }
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );
    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    controller.dispatch_pending(&mut state, &backend).unwrap();

    let result = match state.calculation.state() {
        RequestState::Succeeded(result) => result.value,
        other => panic!("Erfolg erwartet: {other:?}"),
    };
    assert_relative_eq!(result, 6.0, epsilon = 1e-12);
}

#[test]
fn test_malformed_custom_table_never_dispatches() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, CUSTOM_FORMULA_KEY);
    send(
        &mut controller,
        &mut state,
        AppIntent::CustomFormulaTableChanged {
            text: "[[0.5,0]]".into(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "x+y".into() },
    );

    send(&mut controller, &mut state, AppIntent::CalculateRequested);

    let alert = state.ui.alert.as_deref().expect("Meldung erwartet");
    assert!(alert.contains("Zeile 1"), "Meldung: {alert}");
    assert!(state.outbox.is_empty());
    assert_eq!(state.calculation.state(), &RequestState::Idle);
    assert!(state.ui.controls.calculate_enabled);
}

#[test]
fn test_custom_table_uses_trimmed_custom_label() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend::default();
    select(&mut controller, &mut state, CUSTOM_FORMULA_KEY);
    send(
        &mut controller,
        &mut state,
        AppIntent::CustomFormulaTableChanged {
            text: "[[0.5, 0, 0.3333333333333333], [0, 0.5, 0.3333333333333333], [0.5, 0.5, 0.3333333333333333]]".into(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::CustomFormulaNameChanged {
            text: "  Kantenmitte  ".into(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );
    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    controller.dispatch_pending(&mut state, &backend).unwrap();

    let sent = backend.calculations.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].nodes, vec![[0.5, 0.0], [0.0, 0.5], [0.5, 0.5]]);
    assert!(state.ui.calculation_output.starts_with("Ergebnis (Kantenmitte): "));
}

#[test]
fn test_blank_function_is_rejected_locally() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "gauss_1");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "  ".into() },
    );

    send(&mut controller, &mut state, AppIntent::CalculateRequested);

    assert!(state.ui.alert.is_some());
    assert!(state.outbox.is_empty());
}

#[test]
fn test_non_finite_vertex_is_rejected_locally() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "gauss_1");
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
            position: DVec2::new(0.0, f64::INFINITY),
        },
    );

    send(&mut controller, &mut state, AppIntent::CalculateRequested);

    let alert = state.ui.alert.as_deref().expect("Meldung erwartet");
    assert!(alert.contains("Eckpunkt 3"), "Meldung: {alert}");
    assert!(state.outbox.is_empty());
}

#[test]
fn test_preset_without_nodes_fails_fast() {
    let (mut controller, mut state) = loaded();
    assert_eq!(state.session.selected_key.as_deref(), Some("entwurf"));
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );

    send(&mut controller, &mut state, AppIntent::CalculateRequested);

    assert!(state.ui.alert.is_some());
    assert!(state.outbox.is_empty());
}

#[test]
fn test_second_calculate_while_in_flight_is_rejected() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "gauss_1");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );

    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    // Auch am gesperrten Knopf vorbei bleibt es bei einer Anfrage
    controller
        .handle_command(&mut state, AppCommand::IssueCalculation)
        .unwrap();

    assert_eq!(state.outbox.len(), 1);
}

#[test]
fn test_plot_is_accepted_while_calculation_in_flight() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "gauss_3");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );

    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    send(&mut controller, &mut state, AppIntent::PlotRequested);

    assert!(state.calculation.is_in_flight());
    assert!(state.plot.is_in_flight());
    let kinds: Vec<_> = state.outbox.iter().map(PendingRequest::kind).collect();
    assert_eq!(kinds.len(), 2);
}

#[test]
fn test_server_failure_is_shown_and_control_reenabled() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend::default();
    select(&mut controller, &mut state, "gauss_1");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged {
            text: "sin(x)".into(),
        },
    );

    send(&mut controller, &mut state, AppIntent::CalculateRequested);
    controller.dispatch_pending(&mut state, &backend).unwrap();

    assert_eq!(
        state.calculation.state(),
        &RequestState::Failed("Unbekannte Funktion: sin(x)".into())
    );
    assert_eq!(
        state.ui.calculation_output,
        "Berechnungsfehler: Unbekannte Funktion: sin(x)"
    );
    assert!(state.ui.controls.calculate_enabled);
    // Plot-Automat bleibt unberührt
    assert_eq!(state.plot.state(), &RequestState::Idle);
}

#[test]
fn test_request_uses_triangle_snapshot() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "gauss_1");
    send(
        &mut controller,
        &mut state,
        AppIntent::FunctionExpressionChanged { text: "1".into() },
    );
    send(&mut controller, &mut state, AppIntent::CalculateRequested);

    send(
        &mut controller,
        &mut state,
        AppIntent::VertexChanged {
            index: 0,
            position: DVec2::new(-3.0, -3.0),
        },
    );

    let PendingRequest::Calculate { body, .. } = &state.outbox[0] else {
        panic!("Berechnungs-Anfrage erwartet");
    };
    assert_eq!(body.vertices[0], [0.0, 0.0]);
}
