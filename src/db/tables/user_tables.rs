use super::ScoreTable;

/// Provides constants and utilities for working with
/// the "User" database table.
pub struct UserTable;

impl UserTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "User";

    /// The column name for the surrogate key of a user.
    pub const COLUMN_ID: &'static str = "idUser";

    /// The column name for the unique username.
    pub const COLUMN_NAME: &'static str = "name";

    pub const COLUMN_PASSWORD: &'static str = "password";

    pub const COLUMN_MAIL: &'static str = "mail";

    /// The column name for the foreign key to the user's Score row.
    pub const COLUMN_SCORE_ID: &'static str = "Score_idScore";

    /// SQL statement for creating the User table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} VARCHAR(45) NOT NULL,
                {} VARCHAR(45) NOT NULL,
                {} VARCHAR(45) NOT NULL,
                {} INTEGER NOT NULL,
                FOREIGN KEY ({}) REFERENCES {} ({})
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_NAME,
            Self::COLUMN_PASSWORD,
            Self::COLUMN_MAIL,
            Self::COLUMN_SCORE_ID,
            Self::COLUMN_SCORE_ID,
            ScoreTable::TABLE_NAME,
            ScoreTable::COLUMN_ID
        )
    }
}
