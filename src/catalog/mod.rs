mod client;
mod decode;

pub use client::{FoodSource, HttpFoodSource};
pub use decode::decode_items;
