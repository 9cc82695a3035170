//! Error handling module for the member view mapper.
//!
//! Only genuinely exceptional conditions surface as errors. Absent optional data
//! (missing properties, unknown roles, empty lookups) resolves to defaults at the
//! point of absence and never reaches this module.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const CONVERSION_ERROR: &str = "CONVERSION_ERROR";
    pub const MISSING_COLLABORATOR: &str = "MISSING_COLLABORATOR";
}

/// Mapping error type.
#[derive(Debug)]
pub enum MapperError {
    /// An externally-supplied key could not be converted to the entity key shape
    Conversion(String),
    /// A required collaborator (provider or service) is not configured
    MissingCollaborator(String),
}

impl MapperError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            MapperError::Conversion(_) => codes::CONVERSION_ERROR,
            MapperError::MissingCollaborator(_) => codes::MISSING_COLLABORATOR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            MapperError::Conversion(msg) => msg.clone(),
            MapperError::MissingCollaborator(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for MapperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for MapperError {}

impl From<uuid::Error> for MapperError {
    fn from(err: uuid::Error) -> Self {
        tracing::error!("Key conversion error: {:?}", err);
        MapperError::Conversion(format!("Key conversion error: {}", err))
    }
}
