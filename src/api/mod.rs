//! Recipe data gateway: fetches and normalizes recipes from the remote
//! recipe service, with a built-in demo recipe for offline use.

mod client;
mod error;
pub mod mock;

pub use client::HttpGateway;
pub use error::GatewayError;

use async_trait::async_trait;

use crate::types::Recipe;

/// Source of play-ready recipes. The player holds one of these and fetches
/// exactly once before a session starts; everything downstream works on the
/// normalized [`Recipe`].
#[async_trait]
pub trait RecipeGateway: Send + Sync {
    async fn fetch_recipe(&self, recipe_id: i64) -> Result<Recipe, GatewayError>;
}

/// Gateway that always serves the bundled demo recipe
pub struct DemoGateway;

#[async_trait]
impl RecipeGateway for DemoGateway {
    async fn fetch_recipe(&self, recipe_id: i64) -> Result<Recipe, GatewayError> {
        Ok(mock::demo_recipe(recipe_id))
    }
}
