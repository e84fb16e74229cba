mod export;
mod food_log;
mod summary;

pub use export::{CSV_HEADER, export_filename, to_csv, write_export};
pub use food_log::FoodLog;
pub use summary::{CalorieBar, MacroShare, NutritionSummary, aggregate};
