use crate::core::{comparator, formatter};
use crate::domain::model::{PokemonRecord, ReportVariant};
use crate::domain::ports::PokemonSource;
use crate::utils::error::{PokedexError, Result};

/// Fetch, format and optionally compare. Calls are strictly sequential.
pub struct PokedexEngine<S: PokemonSource> {
    source: S,
}

impl<S: PokemonSource> PokedexEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn record(&self, id: i64, variant: ReportVariant) -> Result<PokemonRecord> {
        let body = self.source.fetch(id).await?;
        formatter::parse_record(id, &body, variant)
    }

    pub async fn report(&self, id: i64, variant: ReportVariant) -> Result<String> {
        tracing::info!("Fetching Pokémon #{}", id);
        let record = self.record(id, variant).await?;
        tracing::info!("Rendered report for {}", record.label());
        Ok(record.render())
    }

    /// Both entities are always attempted; a failure on one does not abort the other.
    pub async fn duel(&self, first: i64, second: i64) -> DuelOutcome {
        let mut entries = Vec::with_capacity(2);

        for id in [first, second] {
            let result = self.record(id, ReportVariant::Extended).await;
            if let Err(e) = &result {
                tracing::warn!("Pokémon #{} failed: {} ({:?})", id, e, e.kind());
            }
            entries.push(DuelEntry { id, result });
        }

        DuelOutcome { entries }
    }
}

#[derive(Debug)]
pub struct DuelEntry {
    pub id: i64,
    pub result: Result<PokemonRecord>,
}

#[derive(Debug)]
pub struct DuelOutcome {
    pub entries: Vec<DuelEntry>,
}

impl DuelOutcome {
    /// Comparison sentence, only when every entity was fetched and parsed.
    pub fn verdict(&self) -> Option<String> {
        match self.entries.as_slice() {
            [DuelEntry { result: Ok(a), .. }, DuelEntry { result: Ok(b), .. }] => {
                Some(comparator::compare(a, b))
            }
            _ => None,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = (i64, &PokedexError)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.result.as_ref().err().map(|e| (entry.id, e)))
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Each entity's report or error line, then the verdict if there is one.
    pub fn render(&self) -> String {
        let mut blocks: Vec<String> = self
            .entries
            .iter()
            .map(|entry| match &entry.result {
                Ok(record) => record.render(),
                Err(e) => format!("Pokémon #{}: {}", entry.id, error_line(e)),
            })
            .collect();

        if let Some(verdict) = self.verdict() {
            blocks.push(verdict);
        }

        blocks.join("\n\n")
    }
}

/// The sentence printed for a failed run.
pub fn error_line(error: &PokedexError) -> String {
    format!("Erro na requisição ou no processamento: {}", error)
}
