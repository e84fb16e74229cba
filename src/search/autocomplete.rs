use std::collections::HashSet;

use crate::models::FoodItem;

/// Maximum number of suggestions shown while typing.
pub const MAX_SUGGESTIONS: usize = 5;

/// Suggest food names from the cached catalog for a partially typed query.
///
/// Matches are case-insensitive substring matches anywhere in the name, not
/// just prefixes. Names are deduplicated keeping the first occurrence, and the
/// result is cut off at [`MAX_SUGGESTIONS`]. An empty query suggests nothing.
pub fn suggest(catalog: &[FoodItem], query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();

    catalog
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .filter(|item| seen.insert(item.name.as_str()))
        .take(MAX_SUGGESTIONS)
        .map(|item| item.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Vec<FoodItem> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| FoodItem::new(i as i64, name, 100.0, 1.0, 1.0, 1.0))
            .collect()
    }

    #[test]
    fn test_substring_match_in_catalog_order() {
        let items = catalog(&["Apple", "Apricot", "Grape"]);
        assert_eq!(suggest(&items, "ap"), vec!["Apple", "Apricot", "Grape"]);
        assert_eq!(suggest(&items, "apr"), vec!["Apricot"]);
    }

    #[test]
    fn test_case_insensitive() {
        let items = catalog(&["APPLE JUICE", "apple pie"]);
        assert_eq!(suggest(&items, "Apple"), vec!["APPLE JUICE", "apple pie"]);
    }

    #[test]
    fn test_empty_query_suggests_nothing() {
        let items = catalog(&["Apple"]);
        assert!(suggest(&items, "").is_empty());
    }

    #[test]
    fn test_duplicates_removed_keeping_first() {
        let items = catalog(&["Milk", "Oat Milk", "Milk", "Soy Milk"]);
        assert_eq!(suggest(&items, "milk"), vec!["Milk", "Oat Milk", "Soy Milk"]);
    }

    #[test]
    fn test_truncated_after_dedup() {
        let items = catalog(&["Rice", "Rice", "Rice A", "Rice B", "Rice C", "Rice D", "Rice E"]);
        let suggestions = suggest(&items, "rice");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions, vec!["Rice", "Rice A", "Rice B", "Rice C", "Rice D"]);
    }

    #[test]
    fn test_no_match() {
        let items = catalog(&["Apple", "Bread"]);
        assert!(suggest(&items, "zucchini").is_empty());
    }
}
