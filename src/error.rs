use thiserror::Error;

/// Errors that can occur while querying one letter of the catalog
///
/// Every variant is per-letter and recoverable: the scan logs it and treats
/// the letter as having returned no meals, then moves on.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Network-level failure reaching the search endpoint
    #[error("Failed to fetch meals: {0}")]
    Transport(#[from] reqwest::Error),

    /// The search endpoint answered with a non-success status
    #[error("Search endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected `{"meals": ...}` document
    #[error("Failed to parse search response: {0}")]
    Malformed(#[from] serde_json::Error),
}
