use std::fmt;
use std::str::FromStr;

use crate::error::DietError;
use crate::models::FoodItem;

/// A sortable column of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl SortKey {
    /// All columns in display order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Name,
        SortKey::Calories,
        SortKey::Protein,
        SortKey::Carbs,
        SortKey::Fat,
    ];

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Calories => "Calories (kcal)",
            SortKey::Protein => "Protein (g)",
            SortKey::Carbs => "Carbs (g)",
            SortKey::Fat => "Fat (g)",
        }
    }

    /// Field name as used by the service's JSON.
    pub fn field(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Calories => "calories",
            SortKey::Protein => "protein",
            SortKey::Carbs => "carbs",
            SortKey::Fat => "fat",
        }
    }

    /// Numeric value of this column, or `None` for the textual name column.
    pub fn numeric_value(self, item: &FoodItem) -> Option<f64> {
        match self {
            SortKey::Name => None,
            SortKey::Calories => Some(item.calories),
            SortKey::Protein => Some(item.protein),
            SortKey::Carbs => Some(item.carbs),
            SortKey::Fat => Some(item.fat),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl FromStr for SortKey {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|k| k.field() == wanted)
            .ok_or_else(|| DietError::UnknownSortKey(s.to_string()))
    }
}

/// Current sort column and direction of the result table.
///
/// Selecting the active column flips the direction; selecting another column
/// makes it active and resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: None,
            ascending: true,
        }
    }
}

impl SortState {
    pub fn by(key: SortKey, ascending: bool) -> Self {
        Self {
            key: Some(key),
            ascending,
        }
    }

    /// Apply a column-header selection.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.key = Some(key);
            self.ascending = true;
        }
    }

    /// Direction marker for a column header (empty when the column is not active).
    pub fn indicator(&self, key: SortKey) -> &'static str {
        match (self.key == Some(key), self.ascending) {
            (false, _) => "",
            (true, true) => " ▲",
            (true, false) => " ▼",
        }
    }
}
