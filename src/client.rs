use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ScanError;
use crate::model::Meal;
use crate::scan::MealSource;

/// Public TheMealDB v1 endpoint (free developer key).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Envelope of `search.php` responses. The API answers `{"meals": null}`
/// when a letter has no hits.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    meals: Option<Vec<Meal>>,
}

/// Thin client for the catalog's search-by-first-letter endpoint.
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Client against the public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom endpoint (test servers, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        MealDbClient {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetches every meal whose name starts with `letter`.
    ///
    /// An empty list is a legitimate "no meals for this letter" outcome;
    /// `Err` means the letter could not be queried at all.
    pub async fn search_by_letter(&self, letter: char) -> Result<Vec<Meal>, ScanError> {
        let url = format!("{}/search.php?f={}", self.base_url, letter);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Status(status));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.meals.unwrap_or_default())
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn search_by_letter(&self, letter: char) -> Result<Vec<Meal>, ScanError> {
        MealDbClient::search_by_letter(self, letter).await
    }
}
