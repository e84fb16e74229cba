use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{FoodItem, SortKey, SortState, format_amount};

/// One user interaction in the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EditQuery,
    Search,
    PickSuggestion,
    Sort,
    LogResult,
    Summary,
    Export,
    Quit,
}

impl Action {
    const MENU: [Action; 8] = [
        Action::EditQuery,
        Action::Search,
        Action::PickSuggestion,
        Action::Sort,
        Action::LogResult,
        Action::Summary,
        Action::Export,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::EditQuery => "Type a query",
            Action::Search => "Search",
            Action::PickSuggestion => "Pick a suggestion",
            Action::Sort => "Sort results by column",
            Action::LogResult => "Log a result",
            Action::Summary => "Show nutritional summary",
            Action::Export => "Download CSV",
            Action::Quit => "Quit",
        }
    }
}

/// Prompt for the next action from the main menu.
pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::MENU.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Action::MENU[selection])
}

/// Prompt for the search query, pre-filled with the current one.
///
/// The text is returned as typed; surrounding spaces are part of the query.
pub fn prompt_query(current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Search food")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Let the user pick one of the suggestions.
pub fn prompt_suggestion(suggestions: &[String]) -> Result<Option<usize>> {
    let mut options: Vec<&str> = suggestions.iter().map(String::as_str).collect();
    options.push("None of these");

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < suggestions.len()).then_some(selection))
}

/// Prompt for a column header to sort by.
pub fn prompt_sort_key(state: SortState) -> Result<SortKey> {
    let options: Vec<String> = SortKey::ALL
        .iter()
        .map(|&k| format!("{}{}", k.label(), state.indicator(k)))
        .collect();

    let default = state
        .key
        .and_then(|k| SortKey::ALL.iter().position(|&c| c == k))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Sort by")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(SortKey::ALL[selection])
}

/// Let the user pick a displayed result to log.
pub fn prompt_result(results: &[FoodItem]) -> Result<Option<usize>> {
    let mut options: Vec<String> = results
        .iter()
        .map(|f| format!("{} ({} kcal)", f.name, format_amount(f.calories)))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt("Log which item?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < results.len()).then_some(selection))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
