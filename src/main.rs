//! Triangle Quadrature (Kommandozeile).
//!
//! Gauss-Quadratur über beliebige Dreiecke: Formeln auflisten, Integrale
//! über den externen Evaluator berechnen und Knotenverteilungen plotten.

use anyhow::{bail, Context};
use clap::{Args as ClapArgs, Parser, Subcommand};
use glam::DVec2;
use std::path::PathBuf;
use triangle_quadrature::app::{ColorRole, RequestState};
use triangle_quadrature::core::CUSTOM_FORMULA_LABEL;
use triangle_quadrature::{
    AppController, AppIntent, AppOptions, AppState, HttpBackend, CUSTOM_FORMULA_KEY,
};

#[derive(Parser, Debug)]
#[command(
    name = "triangle-quadrature",
    version,
    about = "Gauss-Quadratur über beliebige Dreiecke"
)]
struct Cli {
    /// Optionen-Datei (TOML); Standard: neben der Binary.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Lokale Katalogdatei statt der konfigurierten Quellen.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verfügbare Formeln in Auswahl-Reihenfolge auflisten.
    List,
    /// Integral von f(x, y) über das Dreieck berechnen.
    Calculate(CalculateArgs),
    /// Knotenverteilung rendern und als Bild speichern.
    Plot(PlotArgs),
}

#[derive(ClapArgs, Debug)]
struct FormulaArgs {
    /// Katalog-Schlüssel der Formel (Standard: erste in der Auswahl).
    #[arg(long, conflicts_with = "table")]
    formula: Option<String>,
    /// Eigene Tabelle `[[x, y, gewicht], ...]` im Referenzdreieck.
    #[arg(long)]
    table: Option<String>,
    /// Bezeichnung der eigenen Tabelle.
    #[arg(long, requires = "table")]
    name: Option<String>,
    /// Eckpunkt `x,y`; genau dreimal angeben (V1, V2, V3).
    #[arg(long = "vertex", value_name = "X,Y", value_parser = parse_point)]
    vertices: Vec<DVec2>,
}

#[derive(ClapArgs, Debug)]
struct CalculateArgs {
    /// Funktionsausdruck f(x, y), z.B. "x*y + 1".
    #[arg(long = "function", short = 'f')]
    function: String,
    #[command(flatten)]
    formula: FormulaArgs,
}

#[derive(ClapArgs, Debug)]
struct PlotArgs {
    #[command(flatten)]
    formula: FormulaArgs,
    /// Zieldatei; ohne Endung wird `.png` angehängt.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long)]
    node_color: Option<String>,
    #[arg(long)]
    edge_color: Option<String>,
    #[arg(long)]
    fill_color: Option<String>,
}

fn parse_point(text: &str) -> Result<DVec2, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("'{text}': erwartet x,y"))?;
    let coord = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| format!("'{}': {}", s.trim(), e))
    };
    Ok(DVec2::new(coord(x)?, coord(y)?))
}

fn main() -> anyhow::Result<()> {
    AppRunner::run(Cli::parse())
}

struct AppRunner {
    controller: AppController,
    state: AppState,
}

impl AppRunner {
    fn run(cli: Cli) -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Triangle Quadrature v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = cli.config.unwrap_or_else(AppOptions::config_path);
        let mut options = AppOptions::load_from_file(&config_path);
        if let Some(file) = cli.catalog {
            options.catalog_url = None;
            options.use_evaluator_catalog = false;
            options.catalog_file = file;
        }

        let backend = HttpBackend::from_options(&options)?;
        let mut runner = Self {
            controller: AppController::new(),
            state: AppState::with_options(options),
        };
        runner.intent(AppIntent::CatalogLoadRequested)?;

        match cli.command {
            Command::List => runner.list(),
            Command::Calculate(args) => runner.calculate(args, &backend),
            Command::Plot(args) => runner.plot(args, &backend),
        }
    }

    fn intent(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }

    /// Bricht ab, wenn die letzte Aktion eine blockierende Meldung erzeugt hat.
    fn check_alert(&self) -> anyhow::Result<()> {
        match &self.state.ui.alert {
            Some(alert) => bail!("{alert}"),
            None => Ok(()),
        }
    }

    fn list(&mut self) -> anyhow::Result<()> {
        if self.state.formulas_unavailable() {
            println!("{}", self.state.ui.description);
        }
        for key in self.state.formula_keys() {
            match self.state.catalog.get(&key) {
                Some(formula) => {
                    let nodes = formula
                        .node_count()
                        .map_or_else(|| "-".to_string(), |n| n.to_string());
                    println!("{key:<16} {nodes:>4}  {}", formula.name);
                }
                None => println!("{key:<16} {:>4}  {}", "-", CUSTOM_FORMULA_LABEL),
            }
        }
        if let Some(link) = self.state.catalog_download_link() {
            println!("Rohdaten: {link}");
        }
        Ok(())
    }

    fn apply_formula_args(&mut self, args: FormulaArgs) -> anyhow::Result<()> {
        if let Some(table) = args.table {
            self.intent(AppIntent::FormulaSelected {
                key: CUSTOM_FORMULA_KEY.to_string(),
            })?;
            self.intent(AppIntent::CustomFormulaNameChanged {
                text: args.name.unwrap_or_default(),
            })?;
            self.intent(AppIntent::CustomFormulaTableChanged { text: table })?;
        } else if let Some(key) = args.formula {
            self.intent(AppIntent::FormulaSelected { key })?;
        }
        self.check_alert()?;

        match args.vertices.len() {
            0 => {}
            3 => {
                for (index, position) in args.vertices.into_iter().enumerate() {
                    self.intent(AppIntent::VertexChanged { index, position })?;
                }
            }
            n => bail!("Genau drei Eckpunkte erwartet, erhalten: {n}"),
        }
        Ok(())
    }

    fn calculate(&mut self, args: CalculateArgs, backend: &HttpBackend) -> anyhow::Result<()> {
        self.apply_formula_args(args.formula)?;
        self.intent(AppIntent::FunctionExpressionChanged {
            text: args.function,
        })?;
        self.intent(AppIntent::CalculateRequested)?;
        self.check_alert()?;

        self.controller.dispatch_pending(&mut self.state, backend)?;
        println!("{}", self.state.ui.calculation_output);
        if matches!(self.state.calculation.state(), RequestState::Failed(_)) {
            bail!("Berechnung fehlgeschlagen");
        }
        Ok(())
    }

    fn plot(&mut self, args: PlotArgs, backend: &HttpBackend) -> anyhow::Result<()> {
        self.apply_formula_args(args.formula)?;
        let colors = [
            (ColorRole::Node, args.node_color),
            (ColorRole::Edge, args.edge_color),
            (ColorRole::Fill, args.fill_color),
        ];
        for (role, value) in colors {
            if let Some(value) = value {
                self.intent(AppIntent::ColorChanged { role, value })?;
            }
        }

        let preview = self
            .controller
            .build_node_preview(&self.state)
            .context("Knoten-Vorschau nicht möglich")?;
        for (node, weight) in preview.mapped_nodes.iter().zip(&preview.weights) {
            println!("({:>12.6}, {:>12.6})  w = {}", node.x, node.y, weight);
        }

        self.intent(AppIntent::PlotRequested)?;
        self.check_alert()?;
        self.controller.dispatch_pending(&mut self.state, backend)?;
        if let Some(message) = &self.state.ui.plot_message {
            bail!("{message}");
        }

        self.intent(AppIntent::SaveImageRequested { path: args.out })?;
        if let Some(status) = &self.state.ui.status_message {
            println!("{status}");
        }
        Ok(())
    }
}
