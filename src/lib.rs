//! Scan TheMealDB by first letter and find the meal with the fewest
//! ingredients.
//!
//! The catalog is queried once per letter, a→z, one request at a time.
//! Meals are deduplicated by id, their ingredient slots are read in
//! order, and the meal with the strictly lowest ingredient count wins;
//! ties keep the meal seen first. Letters that fail to fetch are logged
//! and skipped, so a full scan always covers all 26 letters.

pub mod client;
pub mod error;
pub mod model;
pub mod report;
pub mod scan;

pub use client::{MealDbClient, DEFAULT_BASE_URL};
pub use error::ScanError;
pub use model::{Meal, SimplestMeal, INGREDIENT_SLOTS};
pub use scan::{letter_scan, MealSource, ScanSummary};

/// Runs a full letter scan against the public TheMealDB API.
pub async fn find_simplest_meal() -> ScanSummary {
    letter_scan(&MealDbClient::new()).await
}
