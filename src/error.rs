use thiserror::Error;

use crate::container::Strategy;

/// Errors raised while generating workloads, measuring, or loading a sweep.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Membership test unsupported on unconverted {strategy} container")]
    Unsupported { strategy: Strategy },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = HarnessError::InvalidArgument("size must be >= 0, got -1".into());
        assert_eq!(err.to_string(), "Invalid argument: size must be >= 0, got -1");

        let err = HarnessError::Unsupported {
            strategy: Strategy::HashSetWithConversion,
        };
        assert_eq!(
            err.to_string(),
            "Membership test unsupported on unconverted Set Creation and Lookup container"
        );
    }
}
