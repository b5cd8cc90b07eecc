use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("Delivery is not possible for distances greater than {min}")]
    DeliveryNotPossible { min: f64 },

    #[error("No distance range applies to a delivery distance of {distance} m")]
    NoApplicableRange { distance: u64 },

    #[error("External API error: {message}")]
    Upstream { message: String },

    #[error("External API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Who is at fault for an error, used for status mapping and log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something malformed.
    Client,
    /// Valid input that the venue's own rules reject.
    Business,
    /// Venue data that cannot be priced against.
    Data,
    /// The upstream venue API misbehaved.
    Gateway,
    Internal,
}

impl PricingError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Client,
            Self::DeliveryNotPossible { .. } => ErrorCategory::Business,
            Self::NoApplicableRange { .. } => ErrorCategory::Data,
            Self::Upstream { .. } | Self::Http(_) => ErrorCategory::Gateway,
            Self::Config { .. } | Self::Io(_) => ErrorCategory::Internal,
        }
    }

    /// Message suitable for an API consumer, without the variant prefix.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Upstream { message } => message.clone(),
            Self::Config { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PricingError>;
