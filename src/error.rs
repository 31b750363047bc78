use thiserror::Error;

/// The input table does not carry the columns the normalizer needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing columns: {missing:?}; the sheet must have Estacao, Tempo and Categoria")]
pub struct SchemaError {
    /// Canonical (lower-case) names of the fields that could not be resolved.
    pub missing: Vec<&'static str>,
}

/// Errors raised while reading or validating viewer settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("takt time must be non-negative, got {0}")]
    NegativeTakt(f64),
}
