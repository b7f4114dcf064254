//! Shared recipe data types

mod recipe;

pub use recipe::{Ingredient, Recipe, Step};
