use crate::config::toml_config::FileConfig;
use crate::core::fetcher::DEFAULT_BASE_URL;
use crate::core::picker::TOTAL_POKEMONS;
use crate::domain::model::ReportVariant;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};

/// Resolved run settings: built-in defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub max_id: i64,
    pub variant: ReportVariant,
    pub compare: bool,
    /// Explicit identifiers; the random source fills whatever is left.
    pub ids: Vec<i64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_id: TOTAL_POKEMONS,
            variant: ReportVariant::Basic,
            compare: false,
            ids: Vec::new(),
        }
    }
}

impl Settings {
    pub fn with_file(mut self, file: &FileConfig) -> Self {
        if let Some(base_url) = &file.source.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(max_id) = file.source.max_id {
            self.max_id = max_id;
        }
        if let Some(variant) = file.report.variant {
            self.variant = variant;
        }
        if let Some(compare) = file.report.compare {
            self.compare = compare;
        }
        self
    }

    /// How many entities this run reports on.
    pub fn entity_count(&self) -> usize {
        if self.compare {
            2
        } else {
            1
        }
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn max_id(&self) -> i64 {
        self.max_id
    }

    fn variant(&self) -> ReportVariant {
        self.variant
    }

    fn compare(&self) -> bool {
        self.compare
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_range("max_id", self.max_id, 1, i64::MAX)?;
        Ok(())
    }
}
