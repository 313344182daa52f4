use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Unsupported logger kind: '{value}'")]
    UnsupportedKind { value: String },

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write demo output: {0}")]
    Output(#[from] io::Error),
}

impl PatternError {
    pub fn unsupported_kind(value: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            value: value.into(),
        }
    }

    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_kind_message() {
        let err = PatternError::unsupported_kind("kafka");
        assert_eq!(err.to_string(), "Unsupported logger kind: 'kafka'");
    }

    #[test]
    fn test_config_read_keeps_source() {
        let err = PatternError::config_read(
            "missing.toml",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_converts_to_output() {
        let err: PatternError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, PatternError::Output(_)));
    }
}
