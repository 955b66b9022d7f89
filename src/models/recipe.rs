use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A coffee recipe. The name is the natural key and may be renamed, so an
/// edited recipe remembers the name it was loaded under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    #[sqlx(skip)]
    #[serde(skip)]
    pub former_name: Option<String>,
    pub brewtime: i64,
    #[sqlx(rename = "amount_beans")]
    pub amount_of_beans: i64,
    #[sqlx(rename = "amount_added_milk")]
    pub amount_of_milk: i64,
    pub water_pressure: i64,
    #[sqlx(rename = "image")]
    pub image_url: Option<String>,
}

impl Recipe {
    pub const DEFAULT_IMAGE_URL: &'static str = "default";

    pub fn new(
        name: impl Into<String>,
        brewtime: i64,
        amount_of_beans: i64,
        amount_of_milk: i64,
        water_pressure: i64,
    ) -> Self {
        Self {
            name: name.into(),
            former_name: None,
            brewtime,
            amount_of_beans,
            amount_of_milk,
            water_pressure,
            image_url: Some(Self::DEFAULT_IMAGE_URL.to_string()),
        }
    }

    pub fn blank() -> Self {
        Self::new("", 0, 0, 0, 0)
    }

    /// The name under which this recipe is currently stored.
    pub fn stored_name(&self) -> &str {
        self.former_name.as_deref().unwrap_or(&self.name)
    }
}
