/// Provides constants and utilities for working with
/// the "Score" database table.
pub struct ScoreTable;

impl ScoreTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Score";

    /// The column name for the surrogate key of a score.
    pub const COLUMN_ID: &'static str = "idScore";

    /// The column name for the highscore value.
    pub const COLUMN_HIGHSCORE: &'static str = "highscore";

    /// SQL statement for creating the Score table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} INTEGER NOT NULL DEFAULT 0
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_HIGHSCORE
        )
    }
}
