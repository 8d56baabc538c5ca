mod error;

pub use error::ConfigError;

use crate::taxonomy::StatusTaxonomy;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// One log source: where its rows live and how its status codes are read.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// e.g. "prod_api"
    pub name: String,

    /// NDJSON file holding the source's raw rows.
    pub input: PathBuf,

    /// The source's own status-code taxonomy. Sources are never assumed to
    /// agree on what a failure is.
    pub taxonomy: StatusTaxonomy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoglensConfig {
    pub sources: Vec<SourceConfig>,
}

impl LoglensConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

        let cfg: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        cfg.validate()?;

        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sources.is_empty() {
            return Err(ConfigError::NoSources);
        }

        let mut seen = BTreeSet::new();
        for source in &self.sources {
            if source.name.is_empty() {
                return Err(ConfigError::UnnamedSource);
            }

            if !seen.insert(source.name.as_str()) {
                return Err(ConfigError::DuplicateSource {
                    name: source.name.clone(),
                });
            }

            // total_codes ⊇ success ∪ failure is advisory, not enforced;
            // an empty denominator set is always a mistake though.
            if source.taxonomy.total_codes.is_empty() {
                return Err(ConfigError::EmptyTotalCodes {
                    source: source.name.clone(),
                });
            }
        }

        Ok(())
    }
}

impl FromStr for LoglensConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        cfg.validate()?;

        Ok(cfg)
    }
}
