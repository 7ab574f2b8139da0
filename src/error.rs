use thiserror::Error;

/// Problems detected before any match starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown AI '{name}'. Choose from: tracking, reference, random, student")]
    UnknownController { name: String },

    #[error("{field} = {value} is out of range (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn out_of_range(field: &'static str, value: impl ToString, expected: &'static str) -> Self {
        ConfigError::OutOfRange {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

/// A controller could not produce a move this frame.
///
/// The match runner turns this into an immediate loss for that side.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("{controller} failed: {reason}")]
    Failed { controller: String, reason: String },
}

impl ControllerError {
    pub fn failed(controller: impl Into<String>, reason: impl Into<String>) -> Self {
        ControllerError::Failed {
            controller: controller.into(),
            reason: reason.into(),
        }
    }
}
