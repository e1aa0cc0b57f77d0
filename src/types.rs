use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const STATUS_SUCCEEDED: &str = "succeeded";

/// Outcome reported by the generation backend. Anything other than
/// `succeeded` is kept as the raw string so it survives a store round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PredictionStatus {
    Succeeded,
    Other(String),
}

impl From<String> for PredictionStatus {
    fn from(value: String) -> Self {
        if value == STATUS_SUCCEEDED {
            PredictionStatus::Succeeded
        } else {
            PredictionStatus::Other(value)
        }
    }
}

impl From<PredictionStatus> for String {
    fn from(status: PredictionStatus) -> Self {
        match status {
            PredictionStatus::Succeeded => STATUS_SUCCEEDED.to_string(),
            PredictionStatus::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionMetrics {
    /// Seconds spent generating the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predict_time: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One completed generation job as returned by the backend.
///
/// Fields this crate does not interpret are carried in `extra` and written
/// back to the store untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub status: PredictionStatus,
    #[serde(default)]
    pub output: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<PredictionMetrics>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PredictionRecord {
    pub fn is_succeeded(&self) -> bool {
        self.status == PredictionStatus::Succeeded
    }

    /// Primary image URI, also the render key of the record.
    pub fn primary_output(&self) -> Option<&str> {
        self.output.first().map(String::as_str)
    }

    pub fn predict_time(&self) -> Option<f64> {
        self.metrics.as_ref().and_then(|m| m.predict_time)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub prediction: PredictionRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputUpdate {
    pub text: String,
    /// Client-side keystroke counter; updates at or below the last one seen
    /// are stale.
    #[serde(default)]
    pub seq: Option<u64>,
}
