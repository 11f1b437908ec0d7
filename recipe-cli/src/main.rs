//! Search recipes from the terminal.
//!
//! Usage:
//! ```bash
//! # One page of results with statistics
//! recipe-cli search pasta --cuisine italian --max-calories 700
//!
//! # Details, nutrient and ingredient breakdown for one recipe
//! recipe-cli show 716429
//!
//! # Interactive session; repeated searches are answered from the cache
//! recipe-cli interactive
//! ```

mod commands;
mod error;
mod interactive;
mod models;
mod render;
#[cfg(test)]
mod test_support;

use clap::{Parser, Subcommand};
use commands::FilterArgs;
use error::CliError;
use log::LevelFilter;
use models::config::{Config, Overrides, CONFIG_FILE};
use models::context::Context;
use recipe_search_client::SearchParameters;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe search backed by the Spoonacular API",
    long_about = "Search recipes, page through results and inspect nutrition and ingredient breakdowns. Responses are cached for the lifetime of the process."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// API key override
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Disable the response cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search for recipes
    Search {
        /// Free-text query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[arg(long)]
        cuisine: Option<String>,

        #[arg(long)]
        diet: Option<String>,

        /// Comma separated ingredients that must be used
        #[arg(long)]
        include: Option<String>,

        /// Comma separated ingredients that must not be used
        #[arg(long)]
        exclude: Option<String>,

        #[arg(long)]
        min_calories: Option<u32>,

        #[arg(long)]
        max_calories: Option<u32>,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show one recipe with its nutrient and ingredient breakdown
    Show { id: u64 },

    /// Interactive search session
    Interactive,
}

fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let overrides = Overrides {
        api_key: cli.api_key,
        cache_enabled: cli.no_cache.then_some(false),
        log_level: cli.verbose.then_some(LevelFilter::Debug),
    };
    let config = Config::load(&cli.config, &overrides)?;
    init_logging(*config.log_level())?;

    let context = Context::new(config)?;

    match cli.command {
        Command::Search {
            query,
            cuisine,
            diet,
            include,
            exclude,
            min_calories,
            max_calories,
            page,
        } => {
            let filters = FilterArgs {
                cuisine,
                diet,
                include,
                exclude,
                min_calories,
                max_calories,
            }
            .into_filters()?;
            let params = SearchParameters::new(query.join(" "))
                .with_filters(filters)
                .with_page(page);

            println!("{}", commands::search(context.recipe_client(), &params).await?);
        }
        Command::Show { id } => {
            println!("{}", commands::show(context.recipe_client(), id).await?);
        }
        Command::Interactive => interactive::run(&context).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
