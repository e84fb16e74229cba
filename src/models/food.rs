use serde::{Deserialize, Serialize};

/// A food item as returned by the search service.
///
/// Nutrient amounts are per serving: calories in kcal, macros in grams.
/// Identity is the service-assigned `id`; two items with the same id are the same food.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodItem {
    pub fn new(id: i64, name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// All nutrient values are finite numbers.
    ///
    /// Names and signs are taken as the service reports them.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "#{} {}: {} kcal, P:{} C:{} F:{}",
            self.id,
            self.name,
            format_amount(self.calories),
            format_amount(self.protein),
            format_amount(self.carbs),
            format_amount(self.fat)
        )
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Render a nutrient amount the way the service's web page printed it.
///
/// Whole numbers print without a fractional part (`95`), everything else in the
/// shortest form that round-trips (`0.5`). Magnitudes below `1e-6` or from
/// `1e21` up switch to exponent form with an explicit sign (`1e-7`, `1e+21`).
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        // Avoids printing "-0".
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let exp_form = format!("{:e}", value);
        return match exp_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exp_form,
        };
    }

    format!("{}", value)
}
