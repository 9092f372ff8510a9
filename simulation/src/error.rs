use thiserror::Error;

/// Rejected vehicle configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown vehicle configuration key `{0}`")]
    UnknownKey(String),

    #[error("`{key}` must be positive, got {value}")]
    NonPositive { key: &'static str, value: f32 },

    #[error("`{key}` must be finite, got {value}")]
    NonFinite { key: &'static str, value: f32 },
}
