mod autocomplete;
mod sorter;

pub use autocomplete::{MAX_SUGGESTIONS, suggest};
pub use sorter::{compare_by, compare_names, sort_results};
