use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum QuickstartError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unknown sample: {name}")]
    UnknownSample { name: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },
}

impl QuickstartError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unknown_sample(name: impl Into<String>) -> Self {
        Self::UnknownSample { name: name.into() }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::UnknownSample { .. } => "UNKNOWN_SAMPLE",
            Self::NotFound { .. } => "NOT_FOUND",
        }
    }
}

pub type QuickstartResult<T> = Result<T, QuickstartError>;

impl From<config::ConfigError> for QuickstartError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}

impl From<validator::ValidationErrors> for QuickstartError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::validation(errors.to_string())
    }
}
