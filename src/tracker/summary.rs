use crate::models::FoodItem;

/// One slice of the macro proportion view.
#[derive(Debug, Clone, PartialEq)]
pub struct MacroShare {
    pub label: &'static str,
    pub grams: f64,
    /// Share of the summed macros, 0..=100. Zero when nothing was logged.
    pub percent: f64,
}

/// One bar of the per-item calorie view.
#[derive(Debug, Clone, PartialEq)]
pub struct CalorieBar {
    pub name: String,
    pub calories: f64,
}

/// Raw nutrition totals over the logged foods.
///
/// No normalization against daily values is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionSummary {
    pub protein_total: f64,
    pub carbs_total: f64,
    pub fat_total: f64,
    /// Calories of each logged entry, in log order.
    pub per_item_calories: Vec<CalorieBar>,
}

/// Sum macros across every logged entry (duplicates included) and collect
/// each entry's calories.
pub fn aggregate(logged: &[FoodItem]) -> NutritionSummary {
    NutritionSummary {
        protein_total: logged.iter().map(|f| f.protein).sum(),
        carbs_total: logged.iter().map(|f| f.carbs).sum(),
        fat_total: logged.iter().map(|f| f.fat).sum(),
        per_item_calories: logged
            .iter()
            .map(|f| CalorieBar {
                name: f.name.clone(),
                calories: f.calories,
            })
            .collect(),
    }
}

impl NutritionSummary {
    pub fn macro_total(&self) -> f64 {
        self.protein_total + self.carbs_total + self.fat_total
    }

    pub fn calorie_total(&self) -> f64 {
        self.per_item_calories.iter().map(|b| b.calories).sum()
    }

    /// Protein, carbs and fat as proportions of their sum.
    ///
    /// An all-zero log yields three zero-percent slices rather than NaN.
    pub fn macro_shares(&self) -> [MacroShare; 3] {
        let total = self.macro_total();
        let share = |grams: f64| {
            if total > 0.0 {
                grams / total * 100.0
            } else {
                0.0
            }
        };

        [
            MacroShare {
                label: "Protein (g)",
                grams: self.protein_total,
                percent: share(self.protein_total),
            },
            MacroShare {
                label: "Carbs (g)",
                grams: self.carbs_total,
                percent: share(self.carbs_total),
            },
            MacroShare {
                label: "Fat (g)",
                grams: self.fat_total,
                percent: share(self.fat_total),
            },
        ]
    }

    /// Largest single-entry calorie count, used to scale the bar view.
    pub fn max_item_calories(&self) -> f64 {
        self.per_item_calories
            .iter()
            .map(|b| b.calories)
            .fold(0.0, f64::max)
    }
}
