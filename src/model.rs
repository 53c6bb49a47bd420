use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Number of positional ingredient slots on a meal record
/// (`strIngredient1` through `strIngredient20`).
pub const INGREDIENT_SLOTS: usize = 20;

/// One recipe entry from the catalog.
///
/// Field names follow TheMealDB wire format. Only the identifier and the
/// name are typed; everything else the API sends stays in the raw field
/// map, since the interesting fields are positional
/// (`strIngredient1`..`strIngredient20`) and are read through
/// [`Meal::ingredients`].
#[derive(Debug, Clone, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(flatten)]
    fields: HashMap<String, Value>,
}

impl Meal {
    /// Ordered list of the non-empty ingredient names on this record.
    pub fn ingredients(&self) -> Vec<String> {
        self.ingredients_up_to(INGREDIENT_SLOTS)
    }

    /// Compacts the slots `strIngredient1..=strIngredient{slots}` into a
    /// dense list.
    ///
    /// A slot contributes iff it holds a string whose trimmed form is
    /// non-empty, and the trimmed form is what gets kept. Absent, null,
    /// non-string and whitespace-only slots are skipped without disturbing
    /// the slot order of the kept ones. Duplicate names across slots are
    /// preserved as-is.
    pub fn ingredients_up_to(&self, slots: usize) -> Vec<String> {
        (1..=slots)
            .filter_map(|slot| self.fields.get(&format!("strIngredient{slot}")))
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Category label (`strCategory`), when present and non-empty.
    pub fn category(&self) -> Option<&str> {
        self.field_str("strCategory")
    }

    /// Cuisine area (`strArea`), when present and non-empty.
    pub fn area(&self) -> Option<&str> {
        self.field_str("strArea")
    }

    fn field_str(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// The meal with the fewest valid ingredients seen during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplestMeal {
    pub name: String,
    pub id: String,
    pub ingredients: Vec<String>,
}

impl SimplestMeal {
    /// Ingredient count; always `ingredients.len()`.
    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}
