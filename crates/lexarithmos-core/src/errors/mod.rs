//! Error handling for Lexarithmos.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod index_error;
pub mod registry_error;
pub mod transform_error;

pub use config_error::ConfigError;
pub use error_code::LexErrorCode;
pub use index_error::IndexError;
pub use registry_error::{parse_key_chain, RegistryError};
pub use transform_error::TransformError;

/// Top-level error for callers driving the whole system.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum LexarithmosError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LexErrorCode for LexarithmosError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Registry(e) => e.error_code(),
            Self::Index(e) => e.error_code(),
            Self::Transform(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type LexarithmosResult<T> = Result<T, LexarithmosError>;
