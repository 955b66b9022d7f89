use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Backing row for a user's highscore, created and removed with its user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Score {
    #[sqlx(rename = "idScore")]
    pub id: i64,
    pub highscore: i64,
}
