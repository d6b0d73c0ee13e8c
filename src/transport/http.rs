//! HTTP-Anbindung an den externen Evaluator/Renderer (blockierend).

use super::backend::{decode_response, EvaluatorBackend, RequestFailure};
use super::wire::{CalculateRequest, CalculateResponse, PlotRequest, PlotResponse};
use crate::shared::AppOptions;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Evaluator-Backend über HTTP/JSON.
pub struct HttpBackend {
    client: Client,
    plot_url: String,
    calculate_url: String,
}

impl HttpBackend {
    /// Erstellt das Backend aus den Laufzeit-Optionen.
    pub fn from_options(options: &AppOptions) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            "triangle-quadrature/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(secs) = options.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            plot_url: options.endpoint_url(&options.plot_path),
            calculate_url: options.endpoint_url(&options.calculate_path),
        })
    }

    fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, RequestFailure>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;
        decode_response(status.as_u16(), status.canonical_reason(), &text)
    }
}

impl EvaluatorBackend for HttpBackend {
    fn plot(&self, request: &PlotRequest) -> Result<PlotResponse, RequestFailure> {
        self.post_json(&self.plot_url, request)
    }

    fn calculate(&self, request: &CalculateRequest) -> Result<CalculateResponse, RequestFailure> {
        self.post_json(&self.calculate_url, request)
    }
}

/// Lädt einen Text (z.B. den Formelkatalog) per GET.
pub fn fetch_catalog_text(url: &str) -> Result<String, RequestFailure> {
    log::debug!("GET {}", url);
    let response =
        reqwest::blocking::get(url).map_err(|e| RequestFailure::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(RequestFailure::Server {
            status: status.as_u16(),
            message: format!("HTTP {status}"),
        });
    }
    response
        .text()
        .map_err(|e| RequestFailure::Transport(e.to_string()))
}
