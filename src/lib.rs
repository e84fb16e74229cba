pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod search;
pub mod state;
pub mod tracker;

pub use error::{DietError, Result};
pub use models::{FoodItem, SortKey, SortState};
pub use state::Session;
