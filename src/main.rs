use clap::Parser;
use env_logger::Env;

use smart_diet_client_rs::catalog::{FoodSource, HttpFoodSource};
use smart_diet_client_rs::cli::{Cli, Command};
use smart_diet_client_rs::config::ClientConfig;
use smart_diet_client_rs::error::Result;
use smart_diet_client_rs::interface::{
    Action, display_error_indicator, display_results, display_suggestions, display_summary,
    prompt_action, prompt_query, prompt_result, prompt_sort_key, prompt_suggestion, prompt_yes_no,
};
use smart_diet_client_rs::models::{SortKey, SortState};
use smart_diet_client_rs::search::sort_results;
use smart_diet_client_rs::state::{SearchOutcome, Session};
use smart_diet_client_rs::tracker::write_export;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(&config),
        Command::Search { query, sort, desc } => cmd_search(&config, &query, sort.as_deref(), desc),
    }
}

/// Run a single search and print the sorted table.
fn cmd_search(config: &ClientConfig, query: &str, sort: Option<&str>, desc: bool) -> Result<()> {
    let sort_state = match sort {
        Some(key) => SortState::by(key.parse::<SortKey>()?, !desc),
        None => SortState::default(),
    };

    let source = HttpFoodSource::new(config)?;
    match source.search(query) {
        Ok(items) => display_results(&sort_results(&items, sort_state), sort_state),
        Err(e) if e.is_search_failure() => {
            log::error!("search failed: {}", e);
            display_error_indicator(&e.to_string());
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Interactive session mirroring the search page: query with suggestions,
/// sortable results, logging, summary and CSV download.
fn cmd_interactive(config: &ClientConfig) -> Result<()> {
    let source = HttpFoodSource::new(config)?;
    println!("Smart Diet & Nutrition Planner ({})", source.search_url());

    let mut session = Session::new(source);
    if session.load_catalog() {
        println!("{} foods available for suggestions", session.catalog().len());
    }

    loop {
        match prompt_action()? {
            Action::EditQuery => {
                let query = prompt_query(session.query())?;
                session.set_query(&query);
                display_suggestions(session.suggestions());
            }
            Action::Search => {
                let outcome = session.submit();
                report(&session, outcome);
            }
            Action::PickSuggestion => {
                if session.suggestions().is_empty() {
                    println!("No suggestions. Type a query first.");
                    continue;
                }
                if let Some(index) = prompt_suggestion(session.suggestions())? {
                    if let Some(outcome) = session.select_suggestion(index) {
                        report(&session, outcome);
                    }
                }
            }
            Action::Sort => {
                let key = prompt_sort_key(session.sort_state())?;
                session.toggle_sort(key);
                display_results(&session.sorted_results(), session.sort_state());
            }
            Action::LogResult => {
                let displayed = session.sorted_results();
                if displayed.is_empty() {
                    println!("Nothing to log. Search first.");
                    continue;
                }
                if let Some(index) = prompt_result(&displayed)? {
                    if let Some(item) = session.log_result(index) {
                        println!("Logged: {}", item.name);
                    }
                }
            }
            Action::Summary => match session.summary() {
                Some(summary) => display_summary(&summary),
                None => println!("Nothing logged yet."),
            },
            Action::Export => {
                let today = chrono::Utc::now().date_naive();
                match session.export_csv(today)? {
                    Some((filename, bytes)) => {
                        let prompt = format!("Save {} to {}?", filename, config.output_dir.display());
                        if prompt_yes_no(&prompt, true)? {
                            let path = write_export(&config.output_dir, &filename, &bytes)?;
                            println!("Saved {}", path.display());
                        }
                    }
                    None => println!("Nothing logged yet."),
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}

/// Show the outcome of a search the way the page would.
fn report<S: FoodSource>(session: &Session<S>, outcome: SearchOutcome) {
    match outcome {
        SearchOutcome::Applied(_) => {
            display_results(&session.sorted_results(), session.sort_state())
        }
        SearchOutcome::Failed => {
            if let Some(message) = session.last_error() {
                display_error_indicator(message);
            }
        }
        SearchOutcome::Stale => {}
    }
}
