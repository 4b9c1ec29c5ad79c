pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{FileConfig, Settings};
pub use core::engine::{error_line, DuelOutcome, PokedexEngine};
pub use core::fetcher::HttpFetcher;
pub use core::formatter::{format_payload, format_pokemon_data, format_report};
pub use domain::model::{PokemonRecord, ReportVariant};
pub use utils::error::{ErrorKind, PokedexError, Result};
