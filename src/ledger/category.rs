use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed closed set of expense categories.
///
/// Variant order is significant: it is the tie-break order used when two
/// categories share the highest total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Travel,
    Bills,
    Shopping,
    Other,
}

impl Category {
    /// Every category in its canonical order.
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Travel,
        Category::Bills,
        Category::Shopping,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Bills => "Bills",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or(UnknownCategory)
    }
}

/// The raw value named no member of the fixed category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCategory;
