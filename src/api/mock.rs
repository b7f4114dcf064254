//! Bundled demo recipe, used when the recipe service is unreachable or the
//! player runs with `--demo`.

use crate::actions::ActionKind;
use crate::types::{Ingredient, Recipe, Step};

/// The classic carbonara walkthrough. The requested id is echoed back so
/// the rest of the player cannot tell demo data from real data.
pub fn demo_recipe(recipe_id: i64) -> Recipe {
    Recipe {
        id: recipe_id,
        title: "Spaghetti Carbonara".to_string(),
        description: "A classic Italian pasta dish with eggs, cheese, pancetta, and pepper."
            .to_string(),
        servings: 4,
        preparation_time: 15,
        cooking_time: 20,
        steps: vec![
            Step {
                order_number: 1,
                action: ActionKind::Cook,
                description: "Bring a large pot of salted water to boil. Add spaghetti and cook \
                              until al dente according to package directions."
                    .to_string(),
                temperature: 100,
                speed: 2,
                duration: 10,
            },
            Step {
                order_number: 2,
                action: ActionKind::Fry,
                description: "While pasta cooks, heat a large skillet over medium heat. Add \
                              pancetta and cook until crispy and golden."
                    .to_string(),
                temperature: 90,
                speed: 1,
                duration: 8,
            },
            Step {
                order_number: 3,
                action: ActionKind::Mix,
                description: "In a bowl, whisk together eggs, grated cheese, and black pepper \
                              until well combined."
                    .to_string(),
                temperature: 20,
                speed: 0,
                duration: 3,
            },
            Step {
                order_number: 4,
                action: ActionKind::Mix,
                description: "Drain pasta, reserving 1 cup of pasta water. Add hot pasta to the \
                              skillet with pancetta."
                    .to_string(),
                temperature: 80,
                speed: 1,
                duration: 2,
            },
            Step {
                order_number: 5,
                action: ActionKind::Mix,
                description: "Remove skillet from heat. Quickly pour egg mixture over pasta \
                              while tossing continuously. Add pasta water gradually until creamy."
                    .to_string(),
                temperature: 60,
                speed: 2,
                duration: 5,
            },
            Step {
                order_number: 6,
                action: ActionKind::Weigh,
                description: "Serve immediately with extra cheese and black pepper. Enjoy your \
                              homemade carbonara!"
                    .to_string(),
                temperature: 0,
                speed: 0,
                duration: 0,
            },
        ],
        ingredients: vec![
            ingredient(1, "spaghetti", 400.0, "g"),
            ingredient(2, "pancetta, diced", 150.0, "g"),
            ingredient(3, "large eggs", 3.0, "pcs"),
            ingredient(4, "Pecorino Romano, grated", 100.0, "g"),
            ingredient(5, "black pepper", 1.0, "tsp"),
            ingredient(6, "salt for pasta water", 1.0, "tbsp"),
        ],
    }
}

fn ingredient(id: i64, name: &str, quantity: f64, unit: &str) -> Ingredient {
    Ingredient {
        id,
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_recipe_echoes_requested_id() {
        assert_eq!(demo_recipe(42).id, 42);
    }

    #[test]
    fn test_demo_steps_are_in_display_order() {
        let recipe = demo_recipe(1);
        let orders: Vec<u32> = recipe.steps.iter().map(|s| s.order_number).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_demo_recipe_ends_with_untimed_step() {
        let recipe = demo_recipe(1);
        let last = recipe.steps.last().unwrap();
        assert_eq!(last.duration, 0);
        assert!(!last.has_timer());
    }
}
