use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Machine {
    #[sqlx(rename = "idMachine")]
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "decription")]
    pub description: String,
}

impl Machine {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Blank machine; `i64::MAX` never matches a stored id.
    pub fn blank() -> Self {
        Self::new(i64::MAX, "", "")
    }
}
