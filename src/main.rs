use anyhow::Result;
use clap::{Parser, Subcommand};

use souschef::api::{mock, DemoGateway, HttpGateway, RecipeGateway};
use souschef::app::App;
use souschef::config::Config;
use souschef::logging::init_logging;
use souschef::playback::progress::format_duration;
use souschef::types::Recipe;
use souschef::ui::install_panic_hook;

#[derive(Parser)]
#[command(name = "souschef")]
#[command(about = "Guided cooking playback for your recipes", version)]
struct Cli {
    /// Recipe to play (defaults to 1)
    recipe_id: Option<i64>,

    /// Use the bundled demo recipe without contacting the service
    #[arg(long)]
    demo: bool,

    /// Path to a config file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a recipe without starting playback
    Show {
        recipe_id: i64,

        /// Print the normalized recipe as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let is_tui_mode = cli.command.is_none();
    let _logging = init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Show { recipe_id, json }) => {
            let recipe = fetch(&config, recipe_id, cli.demo).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
            } else {
                print_recipe(&recipe);
            }
            Ok(())
        }
        None => run_tui(config, cli.recipe_id, cli.demo).await,
    }
}

async fn run_tui(config: Config, recipe_id: Option<i64>, demo: bool) -> Result<()> {
    let recipe_id = recipe_id.unwrap_or(1);

    let (recipe, notice) = if demo {
        (mock::demo_recipe(recipe_id), None)
    } else {
        match fetch(&config, recipe_id, false).await {
            Ok(recipe) => (recipe, None),
            // A missing recipe is a real answer; anything else (service
            // down, auth, malformed payload) falls back to the demo so
            // the player still works offline
            Err(err) if err.is_retryable_offline() => {
                tracing::warn!(%err, "recipe service unavailable, using demo recipe");
                (
                    mock::demo_recipe(recipe_id),
                    Some("Offline: showing the demo recipe.".to_string()),
                )
            }
            Err(err) => return Err(err.into()),
        }
    };

    tracing::info!(recipe = %recipe.title, steps = recipe.steps.len(), "recipe loaded");

    install_panic_hook();
    App::new(config, recipe, notice).run()
}

async fn fetch(
    config: &Config,
    recipe_id: i64,
    demo: bool,
) -> Result<Recipe, souschef::api::GatewayError> {
    if demo {
        return DemoGateway.fetch_recipe(recipe_id).await;
    }
    let gateway = HttpGateway::new(&config.api.base_url, config.api.token.clone())
        .map_err(|e| souschef::api::GatewayError::Malformed(e.to_string()))?;
    gateway.fetch_recipe(recipe_id).await
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("{}", recipe.description);
    println!(
        "Servings: {}   Prep: {}   Cook: {}",
        recipe.servings,
        format_duration(recipe.preparation_time),
        format_duration(recipe.cooking_time)
    );
    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient.display());
    }
    println!();
    println!("Steps:");
    for step in &recipe.steps {
        let profile = step.action.profile();
        println!(
            "  {:>2}. [{}] {} ({})",
            step.order_number,
            profile.label,
            step.description,
            format_duration(step.duration)
        );
    }
}
