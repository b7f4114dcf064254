use serde::{Deserialize, Serialize};

use crate::actions::ActionKind;

/// A recipe as consumed by the player: metadata plus its steps in final
/// display order. The gateway is responsible for sorting; nothing past the
/// gateway re-orders steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub servings: u32,
    /// Preparation time in minutes
    pub preparation_time: u32,
    /// Total cooking time in minutes
    pub cooking_time: u32,
    pub steps: Vec<Step>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Prep plus cook time, in minutes
    pub fn estimated_total_time(&self) -> u32 {
        self.preparation_time + self.cooking_time
    }
}

/// One instruction in a recipe. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// 1-based position within the recipe
    pub order_number: u32,
    pub action: ActionKind,
    pub description: String,
    /// Degrees Celsius; 0 means the step uses no heat
    pub temperature: u16,
    /// Unitless 0-10 scale; 0 means not applicable
    pub speed: u8,
    /// Duration in minutes; 0 means no timer
    pub duration: u32,
}

impl Step {
    /// Step duration expressed in timer ticks (one tick per second)
    pub fn duration_secs(&self) -> u32 {
        self.duration * 60
    }

    pub fn has_timer(&self) -> bool {
        self.duration > 0
    }

    pub fn requires_heat(&self) -> bool {
        self.temperature > 25
    }
}

/// An ingredient attached to a recipe. Shown on the overview screen only;
/// the player does not try to match ingredients to individual steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Ingredient {
    /// Display form like "400 g spaghetti"
    pub fn display(&self) -> String {
        format!("{} {} {}", self.quantity, self.unit, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(duration: u32, temperature: u16) -> Step {
        Step {
            order_number: 1,
            action: ActionKind::Cook,
            description: "test".to_string(),
            temperature,
            speed: 1,
            duration,
        }
    }

    #[test]
    fn test_duration_secs() {
        assert_eq!(step(5, 100).duration_secs(), 300);
        assert_eq!(step(0, 0).duration_secs(), 0);
    }

    #[test]
    fn test_has_timer() {
        assert!(step(1, 0).has_timer());
        assert!(!step(0, 0).has_timer());
    }

    #[test]
    fn test_requires_heat() {
        assert!(step(1, 100).requires_heat());
        assert!(!step(1, 20).requires_heat());
    }

    #[test]
    fn test_ingredient_display() {
        let ing = Ingredient {
            id: 1,
            name: "spaghetti".to_string(),
            quantity: 400.0,
            unit: "g".to_string(),
        };
        assert_eq!(ing.display(), "400 g spaghetti");
    }
}
