use thiserror::Error;

/// Top-level error type for the starroll geometry core.
#[derive(Debug, Error)]
pub enum StarrollError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl StarrollError {
    /// Returns `true` for missing, malformed or out-of-range configuration.
    #[must_use]
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns `true` when a zero roll duration or an empty family was supplied.
    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::DivisionByZero(_)))
    }
}

/// Errors raised while reading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    Parse(String),

    #[error("missing required key `{0}`")]
    MissingKey(&'static str),

    #[error("key `{key}` = {value:?}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("malformed star label {0:?}: expected `{{points/skip}}`")]
    MalformedStarLabel(String),

    #[error("invalid star {{{points}/{skip}}}: {reason}")]
    InvalidStar {
        points: i64,
        skip: i64,
        reason: &'static str,
    },
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`StarrollError`].
pub type Result<T> = std::result::Result<T, StarrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_config_errors() {
        let err: StarrollError = ConfigError::MissingKey("StarLabel").into();
        assert!(err.is_invalid_config());
        assert!(!err.is_division_by_zero());
    }

    #[test]
    fn classifies_division_by_zero() {
        let err: StarrollError = GeometryError::DivisionByZero("roll duration").into();
        assert!(err.is_division_by_zero());
        assert!(!err.is_invalid_config());
    }

    #[test]
    fn star_message_keeps_braces() {
        let err = ConfigError::InvalidStar {
            points: 4,
            skip: 4,
            reason: "skip must be less than points",
        };
        assert_eq!(
            err.to_string(),
            "invalid star {4/4}: skip must be less than points"
        );
    }
}
