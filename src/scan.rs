use std::collections::HashSet;

use async_trait::async_trait;
use log::{debug, error, info};

use crate::error::ScanError;
use crate::model::{Meal, SimplestMeal};

/// A catalog that can be searched by first letter.
///
/// [`MealDbClient`](crate::MealDbClient) is the real implementation; the
/// scan depends only on this seam so the reduction can be driven by
/// in-memory sources in tests.
#[async_trait]
pub trait MealSource: Send + Sync {
    /// All meals for one lowercase letter. An empty list means the letter
    /// has no meals; an error means the letter could not be queried.
    async fn search_by_letter(&self, letter: char) -> Result<Vec<Meal>, ScanError>;
}

/// Outcome of one full letter scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// The meal with the fewest ingredients, `None` when no record was
    /// ever seen.
    pub simplest: Option<SimplestMeal>,
    /// Unique meals processed across all letters.
    pub unique_meals: usize,
}

/// Walks the catalog a→z and reduces it to the meal with the fewest
/// ingredients.
///
/// Letters are fetched strictly in order, one at a time. A meal listed
/// under several letters is counted once, at its first occurrence. The
/// running best is replaced only on strictly fewer ingredients, so ties
/// keep the meal encountered first. A letter that fails to fetch is logged
/// and treated as having no meals; all 26 letters are always attempted.
pub async fn letter_scan<S: MealSource>(source: &S) -> ScanSummary {
    let mut simplest: Option<SimplestMeal> = None;
    let mut fewest = usize::MAX;
    let mut seen_ids: HashSet<String> = HashSet::new();

    for letter in 'a'..='z' {
        let meals = match source.search_by_letter(letter).await {
            Ok(meals) => meals,
            Err(err) => {
                error!("Error fetching meals for letter '{}': {}", letter, err);
                continue;
            }
        };
        debug!("Letter '{}': {} meals", letter, meals.len());

        for meal in meals {
            if !seen_ids.insert(meal.id.clone()) {
                continue;
            }

            let ingredients = meal.ingredients();
            debug!(
                "New meal {} '{}' ({} ingredients, category: {:?}, area: {:?})",
                meal.id,
                meal.name,
                ingredients.len(),
                meal.category(),
                meal.area()
            );

            // Strictly fewer wins; an equal count keeps the earlier meal.
            if ingredients.len() < fewest {
                fewest = ingredients.len();
                simplest = Some(SimplestMeal {
                    name: meal.name,
                    id: meal.id,
                    ingredients,
                });
            }
        }
    }

    info!("Scanned {} unique meals", seen_ids.len());

    ScanSummary {
        simplest,
        unique_meals: seen_ids.len(),
    }
}
