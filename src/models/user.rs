use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A player account of the coffee machine game.
///
/// The highscore lives in the linked `Score` row; the user store fills
/// `highscore` through a join when it loads users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    #[sqlx(rename = "idUser")]
    pub id: i64,
    #[sqlx(rename = "name")]
    pub username: String,
    pub mail: String,
    pub password: String,
    #[sqlx(rename = "Score_idScore")]
    #[serde(skip)]
    pub score_id: i64,
    pub highscore: i64,
}

impl User {
    pub fn new(
        id: i64,
        username: impl Into<String>,
        mail: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            mail: mail.into(),
            password: password.into(),
            score_id: 0,
            highscore: 0,
        }
    }

    /// Blank user; `i64::MAX` never matches a stored id.
    pub fn blank() -> Self {
        Self::new(i64::MAX, "", "", "")
    }
}
