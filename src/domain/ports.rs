use crate::domain::model::ReportVariant;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where raw entity documents come from.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Raw JSON body for `id`. No range check is applied here.
    async fn fetch(&self, id: i64) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn max_id(&self) -> i64;
    fn variant(&self) -> ReportVariant;
    fn compare(&self) -> bool;
}

/// Supplies entity identifiers in `[1, max]`.
pub trait IdSource {
    fn next_id(&mut self, max: i64) -> i64;
}
