pub mod settings;
pub mod toml_config;

pub use settings::Settings;
pub use toml_config::FileConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pokemon-do-dia")]
#[command(about = "Sorteia um Pokémon na PokeAPI e imprime o relatório do dia")]
pub struct CliConfig {
    /// Base URL; the entity id is appended as the last path segment
    #[arg(long)]
    pub base_url: Option<String>,

    /// Highest id the random draw may pick
    #[arg(long)]
    pub max_id: Option<i64>,

    /// Fixed id instead of a random one (repeat for --compare)
    #[arg(long = "id", allow_negative_numbers = true)]
    pub ids: Vec<i64>,

    /// Add ability and strength lines
    #[arg(long)]
    pub extended: bool,

    /// Fetch two entities and rank them by strength
    #[arg(long)]
    pub compare: bool,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the TOML file (if any) and lays the flags over it.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::default().with_file(&FileConfig::from_file(path)?),
            None => Settings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(max_id) = self.max_id {
            settings.max_id = max_id;
        }
        if self.extended {
            settings.variant = crate::domain::model::ReportVariant::Extended;
        }
        if self.compare {
            settings.compare = true;
        }
        settings.ids = self.ids.clone();

        Ok(settings)
    }
}
