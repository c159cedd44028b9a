use thiserror::Error;

/// Failures that can occur while building any part of the dashboard.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("no typhoon records were provided")]
    EmptySelection,
    #[error("the typhoon dataset is empty")]
    EmptyDataset,
    #[error("unknown typhoon '{0}'")]
    UnknownTyphoon(String),
    #[error("typhoon '{name}' has non-finite coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        name: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("marker size for '{name}' is not finite ({size})")]
    InvalidMarkerSize { name: String, size: f64 },
    #[error("failed to encode figure: {0}")]
    Encode(String),
    #[error("failed to write page markup")]
    Markup(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for RenderError {
    fn from(value: serde_json::Error) -> Self {
        RenderError::Encode(value.to_string())
    }
}
