use crate::models::FoodItem;

/// Foods the user has logged this session, in log order.
///
/// Append-only: the same item may appear any number of times and nothing is
/// ever removed.
#[derive(Debug, Clone, Default)]
pub struct FoodLog {
    items: Vec<FoodItem>,
}

impl FoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. No deduplication, no cap.
    pub fn log(&mut self, item: FoodItem) {
        log::debug!("logged {}", item.debug_string());
        self.items.push(item);
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
