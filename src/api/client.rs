//! HTTP client for the recipe REST service.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{GatewayError, RecipeGateway};
use crate::actions::ActionKind;
use crate::types::{Ingredient, Recipe, Step};

const USER_AGENT: &str = concat!("souschef/", env!("CARGO_PKG_VERSION"));

/// Gateway backed by the remote recipe service
pub struct HttpGateway {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

// Wire types as the service returns them. Normalization into the crate's
// Recipe/Step happens in one place so the rest of the player never sees
// raw API shapes.
#[derive(Debug, Deserialize)]
struct RecipeResponse {
    id: i64,
    title: String,
    description: Option<String>,
    servings: u32,
    preparation_time: u32,
    cooking_time: u32,
}

#[derive(Debug, Deserialize)]
struct StepResponse {
    order_number: u32,
    action_type: Option<String>,
    temperature: u16,
    speed: u8,
    duration: u32,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IngredientResponse {
    id: i64,
    name: String,
    quantity: f64,
    unit: String,
}

impl HttpGateway {
    /// Build a gateway for `base_url`. The token is the caller-injected
    /// session identity; when present it is sent as a bearer header.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn fetch_steps(&self, recipe_id: i64) -> Result<Vec<StepResponse>, GatewayError> {
        let response = self
            .get(&format!("/recipes/{}/steps", recipe_id))
            .send()
            .await?;
        if !response.status().is_success() {
            // The service serves step-less recipes with an error here;
            // treat that as an empty list, like the original client did
            tracing::warn!(recipe_id, status = %response.status(), "steps fetch failed");
            return Ok(Vec::new());
        }
        response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    async fn fetch_ingredients(
        &self,
        recipe_id: i64,
    ) -> Result<Vec<IngredientResponse>, GatewayError> {
        let response = self
            .get(&format!("/recipes/{}/ingredients", recipe_id))
            .send()
            .await?;
        if !response.status().is_success() {
            tracing::warn!(recipe_id, status = %response.status(), "ingredients fetch failed");
            return Ok(Vec::new());
        }
        response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    async fn fetch_recipe_record(&self, recipe_id: i64) -> Result<RecipeResponse, GatewayError> {
        let response = self.get(&format!("/recipes/{}", recipe_id)).send().await?;
        match response.status().as_u16() {
            404 => Err(GatewayError::NotFound(recipe_id)),
            401 => Err(GatewayError::Unauthorized),
            status if !response.status().is_success() => Err(GatewayError::Http {
                status,
                message: response.text().await.unwrap_or_default(),
            }),
            _ => response
                .json()
                .await
                .map_err(|e| GatewayError::Malformed(e.to_string())),
        }
    }
}

#[async_trait::async_trait]
impl RecipeGateway for HttpGateway {
    async fn fetch_recipe(&self, recipe_id: i64) -> Result<Recipe, GatewayError> {
        let (recipe, steps, ingredients) = tokio::try_join!(
            self.fetch_recipe_record(recipe_id),
            self.fetch_steps(recipe_id),
            self.fetch_ingredients(recipe_id),
        )?;

        tracing::debug!(
            recipe_id,
            steps = steps.len(),
            ingredients = ingredients.len(),
            "fetched recipe"
        );
        Ok(normalize(recipe, steps, ingredients))
    }
}

/// Turn raw API records into a play-ready recipe: steps sorted into final
/// display order, action keys resolved against the catalog.
fn normalize(
    recipe: RecipeResponse,
    mut steps: Vec<StepResponse>,
    ingredients: Vec<IngredientResponse>,
) -> Recipe {
    steps.sort_by_key(|s| s.order_number);

    Recipe {
        id: recipe.id,
        title: recipe.title,
        description: recipe.description.unwrap_or_default(),
        servings: recipe.servings,
        preparation_time: recipe.preparation_time,
        cooking_time: recipe.cooking_time,
        steps: steps
            .into_iter()
            .map(|s| Step {
                order_number: s.order_number,
                action: ActionKind::parse_or_default(s.action_type.as_deref().unwrap_or("")),
                description: s.description.unwrap_or_default(),
                temperature: s.temperature,
                speed: s.speed,
                duration: s.duration,
            })
            .collect(),
        ingredients: ingredients
            .into_iter()
            .map(|i| Ingredient {
                id: i.id,
                name: i.name,
                quantity: i.quantity,
                unit: i.unit,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_record() -> RecipeResponse {
        RecipeResponse {
            id: 1,
            title: "Test".to_string(),
            description: None,
            servings: 2,
            preparation_time: 5,
            cooking_time: 10,
        }
    }

    fn step_record(order_number: u32, action_type: Option<&str>) -> StepResponse {
        StepResponse {
            order_number,
            action_type: action_type.map(String::from),
            temperature: 100,
            speed: 2,
            duration: 4,
            description: Some(format!("step {}", order_number)),
        }
    }

    #[test]
    fn test_normalize_sorts_steps_by_order_number() {
        let steps = vec![
            step_record(3, Some("cook")),
            step_record(1, Some("chop")),
            step_record(2, Some("mix")),
        ];
        let recipe = normalize(recipe_record(), steps, Vec::new());

        let orders: Vec<u32> = recipe.steps.iter().map(|s| s.order_number).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(recipe.steps[0].action, ActionKind::Chop);
    }

    #[test]
    fn test_normalize_unknown_action_falls_back_to_mix() {
        let steps = vec![step_record(1, Some("serve")), step_record(2, None)];
        let recipe = normalize(recipe_record(), steps, Vec::new());
        assert_eq!(recipe.steps[0].action, ActionKind::Mix);
        assert_eq!(recipe.steps[1].action, ActionKind::Mix);
    }

    #[test]
    fn test_normalize_keeps_ingredients() {
        let ingredients = vec![IngredientResponse {
            id: 9,
            name: "spaghetti".to_string(),
            quantity: 400.0,
            unit: "g".to_string(),
        }];
        let recipe = normalize(recipe_record(), Vec::new(), ingredients);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "spaghetti");
    }

    #[test]
    fn test_wire_step_deserializes() {
        let json = r#"{
            "order_number": 1,
            "action_type": "fry",
            "temperature": 120,
            "speed": 1,
            "duration": 5,
            "description": "Fry the pancetta"
        }"#;
        let step: StepResponse = serde_json::from_str(json).unwrap();
        assert_eq!(step.order_number, 1);
        assert_eq!(step.action_type.as_deref(), Some("fry"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let gateway = HttpGateway::new("http://localhost:8000/", None).unwrap();
        assert_eq!(gateway.base_url, "http://localhost:8000");
    }
}
