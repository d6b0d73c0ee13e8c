use super::support::{loaded, select, send, ReferenceBackend};
use base64::prelude::*;
use triangle_quadrature::app::{ColorRole, RequestState};
use triangle_quadrature::{AppIntent, RequestFailure, CUSTOM_FORMULA_KEY};

#[test]
fn test_plot_sends_nodes_and_colors_without_function() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend::with_image(&BASE64_STANDARD.encode(b"png"));
    select(&mut controller, &mut state, "gauss_1");
    send(
        &mut controller,
        &mut state,
        AppIntent::ColorChanged {
            role: ColorRole::Node,
            value: "#00ff00".into(),
        },
    );

    send(&mut controller, &mut state, AppIntent::PlotRequested);
    assert!(!state.ui.controls.plot_enabled);
    assert!(!state.ui.controls.save_image_enabled);
    controller.dispatch_pending(&mut state, &backend).unwrap();

    let sent = backend.plots.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].nodes, vec![[0.3333333333333333, 0.3333333333333333]]);
    assert_eq!(sent[0].colors.node_color, "#00ff00");
    assert_eq!(sent[0].colors.edge_color, "black");
    assert_eq!(sent[0].colors.fill_color, "lightblue");

    assert!(matches!(state.plot.state(), RequestState::Succeeded(_)));
    assert!(state.ui.controls.plot_enabled);
    assert!(state.ui.controls.save_image_enabled);
    assert_eq!(state.ui.plot_message, None);
}

#[test]
fn test_empty_custom_table_can_be_plotted() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend::with_image("aGFsbG8=");
    select(&mut controller, &mut state, CUSTOM_FORMULA_KEY);
    send(
        &mut controller,
        &mut state,
        AppIntent::CustomFormulaTableChanged { text: "[]".into() },
    );

    send(&mut controller, &mut state, AppIntent::PlotRequested);
    controller.dispatch_pending(&mut state, &backend).unwrap();

    assert!(backend.plots.borrow()[0].nodes.is_empty());
    assert_eq!(state.plot_image(), Some("aGFsbG8="));
}

#[test]
fn test_plot_failure_disables_save_and_shows_reason() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend {
        plot_failure: Some(RequestFailure::Transport("Verbindung abgelehnt".into())),
        ..ReferenceBackend::default()
    };
    select(&mut controller, &mut state, "gauss_3");

    send(&mut controller, &mut state, AppIntent::PlotRequested);
    controller.dispatch_pending(&mut state, &backend).unwrap();

    assert_eq!(
        state.plot.state(),
        &RequestState::Failed("Verbindung abgelehnt".into())
    );
    assert_eq!(
        state.ui.plot_message.as_deref(),
        Some("Plotfehler: Verbindung abgelehnt")
    );
    assert!(state.ui.controls.plot_enabled);
    assert!(!state.ui.controls.save_image_enabled);
    assert_eq!(state.plot_image(), None);
}

#[test]
fn test_empty_image_data_counts_as_failure() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend::with_image("");
    select(&mut controller, &mut state, "gauss_3");

    send(&mut controller, &mut state, AppIntent::PlotRequested);
    controller.dispatch_pending(&mut state, &backend).unwrap();

    assert!(matches!(state.plot.state(), RequestState::Failed(_)));
    assert!(!state.ui.controls.save_image_enabled);
}

#[test]
fn test_save_image_writes_png_with_extension() {
    let (mut controller, mut state) = loaded();
    let backend = ReferenceBackend::with_image(&BASE64_STANDARD.encode(b"\x89PNG\r\n"));
    select(&mut controller, &mut state, "gauss_4");
    send(&mut controller, &mut state, AppIntent::PlotRequested);
    controller.dispatch_pending(&mut state, &backend).unwrap();

    let dir = tempfile::tempdir().unwrap();
    send(
        &mut controller,
        &mut state,
        AppIntent::SaveImageRequested {
            path: Some(dir.path().join("verteilung")),
        },
    );

    let written = std::fs::read(dir.path().join("verteilung.png")).expect("Bild geschrieben");
    assert_eq!(written, b"\x89PNG\r\n");
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains("verteilung.png")));
}

#[test]
fn test_node_preview_matches_plot_request() {
    let (mut controller, mut state) = loaded();
    select(&mut controller, &mut state, "gauss_3");
    send(
        &mut controller,
        &mut state,
        AppIntent::VertexChanged {
            index: 1,
            position: glam::DVec2::new(2.0, 0.0),
        },
    );

    let preview = controller
        .build_node_preview(&state)
        .expect("Vorschau erwartet");

    assert_eq!(preview.mapped_nodes.len(), 3);
    assert_eq!(preview.vertices[1], glam::DVec2::new(2.0, 0.0));
    assert!(preview.bounds.min.x < 0.0 && preview.bounds.max.x > 2.0);
}
