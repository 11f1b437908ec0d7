use crate::error::CliError;
use crate::models::context::Context;
use crate::{commands, render};
use recipe_search_client::session::SearchSession;
use recipe_search_client::FilterField;
use std::io::Write;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tokio::io::{AsyncBufReadExt, BufReader};

pub const WELCOME: &str = "Welcome to the Recipe Search App! Type 'help' for a list of commands.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Filter(FilterField, String),
    ClearFilters,
    Next,
    Previous,
    Page(u32),
    Show(u64),
    Stats,
    Cache,
    ClearCache,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
}

/// What the loop should do after a command ran.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Quit,
}

/// `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim()))
        .unwrap_or((line, ""));

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("search <query>"));
            }
            Command::Search(rest.to_string())
        }
        "next" | "n" => Command::Next,
        "prev" | "previous" | "p" => Command::Previous,
        "page" => Command::Page(
            rest.parse()
                .map_err(|_| CommandError::Usage("page <number>"))?,
        ),
        "show" => Command::Show(
            rest.parse()
                .map_err(|_| CommandError::Usage("show <recipe id>"))?,
        ),
        "clear" => Command::ClearFilters,
        "stats" => Command::Stats,
        "cache" => Command::Cache,
        "clear-cache" => Command::ClearCache,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => match FilterField::from_str(other) {
            Ok(field) => Command::Filter(field, rest.to_string()),
            Err(_) => return Err(CommandError::Unknown(word.to_string())),
        },
    };
    Ok(Some(command))
}

pub fn help() -> String {
    let filters: Vec<String> = FilterField::iter().map(|f| f.to_string()).collect();
    format!(
        "Commands:\n  \
         search <query>      search for recipes\n  \
         <filter> [value]    set a filter, blank clears it ({})\n  \
         clear               clear all filters\n  \
         next | prev         move between pages\n  \
         page <number>       jump to a page\n  \
         show <recipe id>    recipe details with nutrient and ingredient breakdown\n  \
         stats               summary statistics for the current page\n  \
         cache               cache statistics\n  \
         clear-cache         drop every cached response\n  \
         quit                leave",
        filters.join(", ")
    )
}

async fn refresh(session: &mut SearchSession) -> Result<Step, CliError> {
    if session.query().is_empty() {
        return Ok(Step::Print(format!(
            "{}\nEnter a search query first, e.g. 'search pasta'.",
            render::filters(session.filters())
        )));
    }

    println!("Loading...");
    session.refresh().await;

    if let Some(err) = session.state().error() {
        return Err(err.clone().into());
    }

    Ok(Step::Print(format!(
        "{}\n{}",
        render::filters(session.filters()),
        render::search_page(session.results(), session.statistics(), &session.pagination())
    )))
}

pub async fn execute(session: &mut SearchSession, command: Command) -> Result<Step, CliError> {
    match command {
        Command::Search(query) => {
            session.set_query(&query);
            refresh(session).await
        }
        Command::Filter(field, value) => {
            session.update_filter(field, &value)?;
            refresh(session).await
        }
        Command::ClearFilters => {
            session.clear_filters();
            refresh(session).await
        }
        Command::Next => {
            if session.next_page() {
                refresh(session).await
            } else {
                Ok(Step::Print("Already on the last page.".to_string()))
            }
        }
        Command::Previous => {
            if session.previous_page() {
                refresh(session).await
            } else {
                Ok(Step::Print("Already on the first page.".to_string()))
            }
        }
        Command::Page(page) => {
            if session.go_to_page(page) {
                refresh(session).await
            } else {
                Ok(Step::Print(format!("Page {} is not available.", page)))
            }
        }
        Command::Show(id) => Ok(Step::Print(commands::show(session.client(), id).await?)),
        Command::Stats => Ok(Step::Print(render::statistics(session.statistics()))),
        Command::Cache => Ok(Step::Print(render::cache_stats(
            session.client().cache_stats().as_ref(),
        ))),
        Command::ClearCache => {
            session.client().clear_cache();
            Ok(Step::Print("Cache cleared.".to_string()))
        }
        Command::Help => Ok(Step::Print(help())),
        Command::Quit => Ok(Step::Quit),
    }
}

/// Read commands from stdin until `quit` or end of input. A failing command
/// prints its message and the session carries on.
pub async fn run(context: &Context) -> Result<(), CliError> {
    let mut session = SearchSession::new(context.recipe_client().clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", WELCOME);
    if !*context.config().cache_enabled() {
        println!("Response cache is disabled.");
    }

    loop {
        print!("recipes> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{}", err);
                continue;
            }
        };

        match execute(&mut session, command).await {
            Ok(Step::Print(output)) => println!("{}", output),
            Ok(Step::Quit) => break,
            Err(err) => {
                log::debug!("Command failed: {:?}", err);
                println!("{}", err);
            }
        }
    }

    Ok(())
}
