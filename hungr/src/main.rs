//! Hungr CLI - recipe suggestions and classifier metadata from the command line
use clap::{Parser, Subcommand, ValueEnum};
use hungr_core::{
    unique_ingredients, HungrError, ModelCatalog, RecipeBook, RecipeMatch, ServiceConfig,
    SuggestOptions, Suggestions,
};
use owo_colors::OwoColorize as _;
use std::path::PathBuf;
use std::process;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::builder().parse("warn,hungr=info,hungr_core=info")?)
            .compact()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
    debug!("Command line arguments: {:?}", cli);

    let config = ServiceConfig::from_env();

    match cli.command {
        Commands::Suggest {
            ingredients,
            recipes,
            top,
            limit_per_ingredient,
            max_total,
            output,
        } => {
            let recipes_path = recipes.unwrap_or(config.recipes_path);
            let options = SuggestOptions::default()
                .with_top_n(top)
                .with_limit_per_ingredient(limit_per_ingredient)
                .with_max_total(max_total);

            let book = load_or_exit(RecipeBook::load(&recipes_path).await);
            let ingredients = unique_ingredients(ingredients);
            info!("Ranking {} recipes for {:?}", book.len(), ingredients);

            let suggestions = book.top_recipes(&ingredients, &options);
            match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&suggestions)?)
                }
                OutputFormat::Text => print_suggestions(&ingredients, &suggestions),
            }
        }
        Commands::Classes { model_dir, output } => {
            let model_dir = model_dir.unwrap_or(config.model_dir);
            let catalog = load_or_exit(ModelCatalog::load(&model_dir).await);

            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
                OutputFormat::Text => {
                    println!(
                        "{} {} ({}px input), {} classes",
                        "Model:".blue().bold(),
                        catalog.config.backbone,
                        catalog.config.img_size,
                        catalog.num_classes()
                    );
                    for (i, class) in catalog.classes.iter().enumerate() {
                        println!("{:>4}  {}", i, class);
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_or_exit<T>(result: Result<T, HungrError>) -> T {
    match result {
        Ok(value) => value,
        Err(HungrError::NotFound(path)) => {
            error!("File not found: {}", path.display());
            error!(
                "Point {} or {} at your data, or pass the path explicitly",
                hungr_core::config::RECIPES_PATH_ENV.cyan(),
                hungr_core::config::MODEL_DIR_ENV.cyan()
            );
            process::exit(1);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn print_suggestions(ingredients: &[String], suggestions: &Suggestions) {
    if suggestions.recipes.is_empty() {
        println!(
            "{} No recipe uses {}",
            "Info:".blue().bold(),
            ingredients.join(", ")
        );
        return;
    }

    println!(
        "{} top {} of {} candidates for {}\n",
        "Recipes:".green().bold(),
        suggestions.recipes.len(),
        suggestions.candidate_count,
        ingredients.join(", ")
    );
    for (i, recipe) in suggestions.recipes.iter().enumerate() {
        print_match(i + 1, recipe);
    }
}

fn print_match(rank: usize, recipe: &RecipeMatch) {
    println!(
        "{:>2}. {} {}",
        rank,
        recipe.title.bold(),
        format!("({:.0}%)", recipe.score * 100.0).dimmed()
    );
    println!("    uses:    {}", recipe.matched.join(", "));
    if !recipe.missing.is_empty() {
        println!("    missing: {}", recipe.missing.join(", "));
    }
}

const ABOUT: &str = "🥕 Recipe suggestions from the ingredients you have";
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = ABOUT)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Suggest recipes for a set of ingredients
    Suggest {
        /// Ingredient names (e.g., tomato basil garlic)
        #[arg(value_name = "INGREDIENT", required = true)]
        ingredients: Vec<String>,

        /// Recipes JSON file (defaults to $RECIPES_PATH or app/data/recipes.json)
        #[arg(short, long)]
        recipes: Option<PathBuf>,

        /// Number of recipes to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Maximum candidates collected per ingredient
        #[arg(long, default_value = "300")]
        limit_per_ingredient: usize,

        /// Maximum candidates collected overall
        #[arg(long, default_value = "2000")]
        max_total: usize,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
    /// List the classes the ingredient classifier predicts
    Classes {
        /// Model directory (defaults to $MODEL_DIR or app/model)
        #[arg(short, long)]
        model_dir: Option<PathBuf>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}
