//! souschef: guided cooking playback for recipes served over REST.
//!
//! The crate splits into three layers. [`api`] fetches and normalizes
//! recipes from the recipe service (or serves a bundled demo recipe),
//! [`playback`] is the session state machine that walks a recipe step by
//! step with a per-step timer, and [`ui`]/[`app`] render the session in a
//! terminal and feed key events and timer ticks into it.

pub mod actions;
pub mod api;
pub mod app;
pub mod config;
pub mod logging;
pub mod playback;
pub mod types;
pub mod ui;
