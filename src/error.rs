use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::admission::PipelineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
