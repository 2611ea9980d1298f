//! Entity and request models for the shopping list

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the `shopping_list` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub id: i32,
    pub name: String,
    /// Text-formatted currency, e.g. "3.00"
    pub price: String,
    pub date_added: DateTime<Utc>,
    pub checked: bool,
    pub category: Category,
}

/// Fields for inserting a new item.
///
/// `date_added` and `checked` are optional; when omitted the column
/// defaults apply (insertion time, false).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub price: String,
    pub date_added: Option<DateTime<Utc>>,
    pub checked: Option<bool>,
    pub category: Category,
}

/// Partial update for an existing item. `None` fields keep their
/// stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<String>,
    pub date_added: Option<DateTime<Utc>>,
    pub checked: Option<bool>,
    pub category: Option<Category>,
}

/// Meal categories, stored as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Main,
    Snack,
    Lunch,
    Breakfast,
}

impl Category {
    /// The stored text form of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "Main",
            Category::Snack => "Snack",
            Category::Lunch => "Lunch",
            Category::Breakfast => "Breakfast",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "main" => Ok(Category::Main),
            "snack" => Ok(Category::Snack),
            "lunch" => Ok(Category::Lunch),
            "breakfast" => Ok(Category::Breakfast),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
