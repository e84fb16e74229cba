use serde_json::Value;

use crate::error::{DietError, Result};
use crate::models::FoodItem;

/// Decode a search response body into food items, preserving the service's order.
///
/// The body must be a JSON array whose elements all carry `id`, `name`,
/// `calories`, `protein`, `carbs` and `fat` with the right JSON types and
/// finite numbers. Values are otherwise taken as reported: blank names and
/// negative amounts pass through. A single mistyped element rejects the whole
/// response.
pub fn decode_items(body: &str) -> Result<Vec<FoodItem>> {
    let value: Value = serde_json::from_str(body)?;

    let elements = match value {
        Value::Array(elements) => elements,
        other => {
            return Err(DietError::MalformedResponse(format!(
                "expected a JSON array, got {}",
                kind_of(&other)
            )));
        }
    };

    let mut items = Vec::with_capacity(elements.len());
    for (i, element) in elements.into_iter().enumerate() {
        let item: FoodItem = serde_json::from_value(element)
            .map_err(|e| DietError::MalformedResponse(format!("item {}: {}", i, e)))?;

        if !item.is_valid() {
            return Err(DietError::MalformedResponse(format!(
                "item {}: non-finite nutrient value ({})",
                i,
                item.debug_string()
            )));
        }

        items.push(item);
    }

    Ok(items)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_preserves_order() {
        let body = r#"[
            {"id": 3, "name": "GRAPE", "calories": 62, "protein": 0.6, "carbs": 16, "fat": 0.3},
            {"id": 1, "name": "APPLE", "calories": 95, "protein": 0.5, "carbs": 25, "fat": 0.3}
        ]"#;

        let items = decode_items(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "GRAPE");
        assert_eq!(items[1].id, 1);
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode_items("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_array_is_malformed() {
        let err = decode_items(r#"{"detail": "Not Found"}"#).unwrap_err();
        assert!(matches!(err, DietError::MalformedResponse(_)));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let body = r#"[{"id": 1, "name": "Apple", "calories": 95, "protein": 0.5, "carbs": 25}]"#;
        let err = decode_items(body).unwrap_err();
        assert!(matches!(err, DietError::MalformedResponse(_)));
        assert!(err.to_string().contains("item 0"));
    }

    #[test]
    fn test_odd_items_still_decode() {
        let body = r#"[
            {"id": 1, "name": "Apple", "calories": 95, "protein": 0.5, "carbs": 25, "fat": 0.3},
            {"id": 2, "name": "", "calories": -5, "protein": 0, "carbs": 0, "fat": 0},
            {"id": 3, "name": "Grape", "calories": 62, "protein": 0.6, "carbs": 16, "fat": 0.3}
        ]"#;

        let items = decode_items(body).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].name, "");
        assert_eq!(items[1].calories, -5.0);
    }

    #[test]
    fn test_mistyped_field_is_malformed() {
        let body = r#"[{"id": 1, "name": "Apple", "calories": "95", "protein": 0.5, "carbs": 25, "fat": 0.3}]"#;
        assert!(matches!(
            decode_items(body),
            Err(DietError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_search_failure() {
        let err = decode_items("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, DietError::Json(_)));
        assert!(err.is_search_failure());
    }
}
