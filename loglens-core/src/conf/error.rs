use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[source] toml::de::Error),

    // Validation
    #[error("config defines no log sources")]
    NoSources,

    #[error("a log source is missing a name")]
    UnnamedSource,

    #[error("duplicate log source definition: {name}")]
    DuplicateSource { name: String },

    #[error("source '{source}' has an empty total_codes set")]
    EmptyTotalCodes { r#source: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
