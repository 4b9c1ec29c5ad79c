pub mod comparator;
pub mod engine;
pub mod extract;
pub mod fetcher;
pub mod formatter;
pub mod picker;

pub use crate::domain::model::{PokemonRecord, ReportVariant};
pub use crate::domain::ports::{ConfigProvider, IdSource, PokemonSource};
pub use crate::utils::error::Result;
