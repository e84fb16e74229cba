pub mod prompts;
pub mod render;

pub use prompts::{
    Action, prompt_action, prompt_query, prompt_result, prompt_sort_key, prompt_suggestion,
    prompt_yes_no,
};
pub use render::{
    EMPTY_RESULTS, display_error_indicator, display_results, display_suggestions,
    display_summary, format_results_table, format_suggestions, format_summary,
};
