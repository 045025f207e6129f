use thiserror::Error;

/// Failures at the query boundary
///
/// Derivation itself never fails; these are raised only when a caller asks
/// for something outside the universe or for a slot with no content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CosmosError {
    #[error(
        "coordinates ({x}, {y}, {z}) are outside the universe; every axis must be within 0..={max}"
    )]
    CoordinatesOutOfRange { x: i64, y: i64, z: i64, max: u64 },

    #[error("solar system {index} is out of range; the galaxy currently holds {available} systems")]
    SystemIndexOutOfRange { index: u64, available: u64 },

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl CosmosError {
    /// Coordinate or index outside the valid or current bound
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            CosmosError::CoordinatesOutOfRange { .. } | CosmosError::SystemIndexOutOfRange { .. }
        )
    }

    /// Structurally valid location with no content
    pub fn is_not_found(&self) -> bool {
        matches!(self, CosmosError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, CosmosError>;

/// Failures while loading or validating an [`AtlasConfig`](crate::AtlasConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
