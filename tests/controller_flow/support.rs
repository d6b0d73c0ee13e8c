use glam::DVec2;
use std::cell::RefCell;
use std::path::PathBuf;
use triangle_quadrature::core::FormulaData;
use triangle_quadrature::transport::{
    CalculateRequest, CalculateResponse, PlotRequest, PlotResponse,
};
use triangle_quadrature::{
    integrate, AppController, AppIntent, AppOptions, AppState, EvaluatorBackend, RequestFailure,
    TargetTriangle,
};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/triangle_formula.json")
}

/// Optionen, die nur die lokale Fixture-Datei als Katalogquelle nutzen.
pub fn fixture_options() -> AppOptions {
    AppOptions {
        use_evaluator_catalog: false,
        catalog_url: None,
        catalog_file: fixture_path(),
        ..AppOptions::default()
    }
}

/// Controller und State mit geladenem Fixture-Katalog.
pub fn loaded() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(fixture_options());
    controller
        .handle_intent(&mut state, AppIntent::CatalogLoadRequested)
        .expect("Katalog-Laden sollte ohne Fehler durchlaufen");
    (controller, state)
}

pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

pub fn select(controller: &mut AppController, state: &mut AppState, key: &str) {
    send(
        controller,
        state,
        AppIntent::FormulaSelected {
            key: key.to_string(),
        },
    );
}

/// Test-Backend: wertet `x+y` und `1` per Referenz-Quadratur aus,
/// alles andere scheitert mit Server-Meldung. Zeichnet Anfragen auf.
#[derive(Default)]
pub struct ReferenceBackend {
    pub plot_failure: Option<RequestFailure>,
    pub image_data: String,
    pub plots: RefCell<Vec<PlotRequest>>,
    pub calculations: RefCell<Vec<CalculateRequest>>,
}

impl ReferenceBackend {
    pub fn with_image(image_data: &str) -> Self {
        Self {
            image_data: image_data.to_string(),
            ..Self::default()
        }
    }
}

impl EvaluatorBackend for ReferenceBackend {
    fn plot(&self, request: &PlotRequest) -> Result<PlotResponse, RequestFailure> {
        self.plots.borrow_mut().push(request.clone());
        match &self.plot_failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(PlotResponse {
                image_data: self.image_data.clone(),
            }),
        }
    }

    fn calculate(&self, request: &CalculateRequest) -> Result<CalculateResponse, RequestFailure> {
        self.calculations.borrow_mut().push(request.clone());
        let f: fn(DVec2) -> f64 = match request.func_str.as_str() {
            "x+y" => |p| p.x + p.y,
            "1" => |_| 1.0,
            other => {
                return Err(RequestFailure::Server {
                    status: 400,
                    message: format!("Unbekannte Funktion: {other}"),
                })
            }
        };

        let nodes = request.nodes.iter().map(|&n| DVec2::from_array(n)).collect();
        let rule = FormulaData::new(nodes, request.weights.clone()).ok_or_else(|| {
            RequestFailure::Server {
                status: 400,
                message: "Knoten und Gewichte verschieden lang".to_string(),
            }
        })?;
        let [a, b, c] = request.vertices.map(DVec2::from_array);
        let triangle = TargetTriangle::new(a, b, c);
        Ok(CalculateResponse {
            result: integrate(&rule, &triangle, f),
        })
    }
}
