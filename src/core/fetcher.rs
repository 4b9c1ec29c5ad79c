use crate::domain::ports::PokemonSource;
use crate::utils::error::{PokedexError, Result};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Single GET per id against `{base_url}/{id}`. No retry, no timeout override.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, id: i64) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl PokemonSource for HttpFetcher {
    async fn fetch(&self, id: i64) -> Result<String> {
        let url = self.url_for(id);
        tracing::debug!("Making API request to: {}", url);

        // the response owns the connection; every early return below drops it
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(PokedexError::UnsuccessfulResponse {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("resposta sem sucesso")
                    .to_string(),
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(PokedexError::UnsuccessfulResponse {
                status: status.as_u16(),
                reason: "resposta sem corpo".to_string(),
            });
        }

        tracing::debug!("Received {} bytes for id {}", body.len(), id);
        Ok(body)
    }
}
