mod food;
mod sort;

pub use food::{FoodItem, format_amount};
pub use sort::{SortKey, SortState};
