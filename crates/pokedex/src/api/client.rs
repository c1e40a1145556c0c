//! HTTP client for the PokeAPI.

use dioxus::logger::tracing::debug;
use pokedex_core::config::ApiConfig;
use pokedex_core::model::ListResponse;
use pokedex_core::{FetchError, PokemonDetails, PokemonListItem, RecordSource};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// PokeAPI record source.
///
/// Cheap to clone: `reqwest::Client` is reference-counted internally, so
/// every page shares one connection pool. No timeout or retry is configured;
/// a failed request is reported once and the page shows a terminal message.
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl PokeApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues one GET and decodes the JSON body.
    ///
    /// 404 maps to [`FetchError::NotFound`], any other non-success status to
    /// [`FetchError::Status`].
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let parsed_url =
            url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
            return Err(FetchError::InvalidUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                parsed_url.scheme()
            )));
        }

        debug!("GET {}", url);
        let response = self
            .http
            .get(parsed_url)
            .send()
            .await
            .map_err(|e| FetchError::Request(format!("Failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(format!("{}: {}", url, e)))
    }
}

#[async_trait::async_trait(?Send)]
impl RecordSource for PokeApiClient {
    async fn fetch_list(&self) -> Result<Vec<PokemonListItem>, FetchError> {
        let response: ListResponse = self.get_json(&self.config.list_url()).await?;
        Ok(response.results)
    }

    async fn fetch_details(&self, id: u32) -> Result<PokemonDetails, FetchError> {
        // Identities start at 1; skip the round trip for an id that cannot exist
        if id == 0 {
            return Err(FetchError::NotFound(self.config.details_url(id)));
        }
        self.get_json(&self.config.details_url(id)).await
    }

    async fn fetch_details_at(&self, url: &str) -> Result<PokemonDetails, FetchError> {
        self.get_json(url).await
    }
}
