use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Inference service unreachable: {0}")]
    InferenceUnavailable(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn geocoding(msg: impl Into<String>) -> Self {
        Self::Geocoding(msg.into())
    }

    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// True when the inference service could not be reached at all.
    pub fn is_inference_unavailable(&self) -> bool {
        matches!(self, Self::InferenceUnavailable(_))
    }
}
