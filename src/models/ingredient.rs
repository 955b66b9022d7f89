use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An ingredient the machines can dispense. The name is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Ingredient {
    pub name: String,
    pub description: String,
    pub unit: String,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            unit: unit.into(),
        }
    }

    /// The blank instance a screen holds while nothing is selected.
    pub fn blank() -> Self {
        Self::new("", "", "")
    }
}
