//! Character inventory
//!
//! An ordered list of item names. Blank entries (left over from empty form
//! slots) never make it into an `Inventory`; they are dropped on construction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Inventory(Vec<String>);

impl Inventory {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build an inventory, trimming each item and skipping blank ones.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            items
                .into_iter()
                .map(|item| item.as_ref().trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items joined for display, e.g. `"Herb pouch, Staff"`
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl From<Vec<String>> for Inventory {
    fn from(items: Vec<String>) -> Self {
        Self::from_items(items)
    }
}

impl From<Inventory> for Vec<String> {
    fn from(inventory: Inventory) -> Self {
        inventory.0
    }
}
