// client.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;

pub const PREDICT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// The four measurements the prediction service expects, with its wire names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    #[serde(rename = "ChestCMS")]  pub chest_cms:  f64,
    #[serde(rename = "WaistCMS")]  pub waist_cms:  f64,
    #[serde(rename = "HeightCMS")] pub height_cms: f64,
    #[serde(rename = "WeightKGS")] pub weight_kgs: f64,
}

/// Success body: one size label per garment category, plus the measurements
/// the service acknowledged.
#[derive(Clone, Debug, Deserialize)]
pub struct Recommendation {
    pub size_recommendation: BTreeMap<String, String>,
    pub body_measurements:   MeasurementSet,
}

impl Recommendation {
    pub fn size_for(&self, garment: &str) -> Option<&str> {
        self.size_recommendation.get(garment).map(String::as_str)
    }
}

/// Errors a single submission can end in. Both are terminal for that
/// attempt: no retry, no fallback value.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-200 status; its body is shown verbatim.
    #[error("Error: {0}")]
    Service(String),
    /// The request never completed (refused, unreachable, timed out).
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub struct RecommendationClient {
    endpoint: String,
    http:     reqwest::blocking::Client,
}

impl Default for RecommendationClient {
    fn default() -> Self { Self::new() }
}

impl RecommendationClient {
    pub fn new() -> Self {
        Self::with_endpoint(PREDICT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self { endpoint: endpoint.into(), http }
    }

    /// One blocking JSON POST per explicit submission; the caller waits for
    /// whichever of success, service error, or transport error comes back.
    pub fn recommend(&self, set: &MeasurementSet) -> Result<Recommendation, ClientError> {
        log::info!("POST {} {:?}", self.endpoint, set);
        let resp = self.http.post(&self.endpoint).json(set).send()?;
        if resp.status() == reqwest::StatusCode::OK {
            Ok(resp.json::<Recommendation>()?)
        } else {
            let body = resp.text()?;
            log::warn!("prediction service rejected request: {body}");
            Err(ClientError::Service(body))
        }
    }
}
