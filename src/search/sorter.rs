use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

use crate::models::{FoodItem, SortKey, SortState};

/// Locale-aware ordering of food names.
///
/// Uses the CLDR root collation: accents and case are secondary and tertiary
/// differences, so `"Éclair"` sorts between `"Apple"` and `"Fig"`, `"apple"`
/// before `"Banana"`, and `"apple"` before `"Apple"`.
struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                log::warn!("collation data unavailable, sorting names by case-folded text: {}", e);
                None
            }
        };
        Self { collator }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                // Same letters: raw order is uppercase-first, reverse it.
                .then_with(|| b.cmp(a)),
        }
    }
}

thread_local! {
    static NAMES: NameCollator = NameCollator::new();
}

/// Compare two food names the way a human-facing list orders them.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAMES.with(|collator| collator.compare(a, b))
}

/// Ascending comparison of two items on one column.
pub fn compare_by(key: SortKey, a: &FoodItem, b: &FoodItem) -> Ordering {
    match (key.numeric_value(a), key.numeric_value(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => compare_names(&a.name, &b.name),
    }
}

/// Sorted view of a result set. The input is left untouched.
///
/// The sort is stable: items that compare equal keep their fetch order in
/// both directions. With no active column the fetch order is returned.
pub fn sort_results(results: &[FoodItem], state: SortState) -> Vec<FoodItem> {
    let mut sorted = results.to_vec();

    let Some(key) = state.key else {
        return sorted;
    };

    if state.ascending {
        sorted.sort_by(|a, b| compare_by(key, a, b));
    } else {
        sorted.sort_by(|a, b| compare_by(key, b, a));
    }

    sorted
}
