use crate::model::SimplestMeal;

/// Renders the scan result as the multi-line report printed by the binary.
///
/// With a winning meal the report names it, gives its id, the ingredient
/// count, and the ingredient list joined by `", "`. Without one it is the
/// single line `No meals found.`.
pub fn render(simplest: Option<&SimplestMeal>) -> String {
    match simplest {
        Some(meal) => format!(
            "Meal with least ingredients:\nName: {}\nID: {}\nIngredient Count: {}\nIngredients: {}",
            meal.name,
            meal.id,
            meal.ingredient_count(),
            meal.ingredients.join(", ")
        ),
        None => "No meals found.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_the_winning_meal() {
        let meal = SimplestMeal {
            name: "Bread".to_string(),
            id: "2".to_string(),
            ingredients: vec!["Flour".to_string(), "Water".to_string()],
        };

        assert_eq!(
            render(Some(&meal)),
            "Meal with least ingredients:\n\
             Name: Bread\n\
             ID: 2\n\
             Ingredient Count: 2\n\
             Ingredients: Flour, Water"
        );
    }

    #[test]
    fn test_renders_a_meal_without_ingredients() {
        let meal = SimplestMeal {
            name: "Air Soup".to_string(),
            id: "9".to_string(),
            ingredients: Vec::new(),
        };

        let report = render(Some(&meal));

        assert!(report.contains("Ingredient Count: 0"));
        assert!(report.ends_with("Ingredients: "));
    }

    #[test]
    fn test_renders_the_empty_catalog_message() {
        assert_eq!(render(None), "No meals found.");
    }
}
