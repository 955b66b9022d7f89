/// Provides constants and utilities for working with
/// the display settings profile table.
pub struct SettingsProfileTable;

impl SettingsProfileTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Setting_Profiles_Authoringtool";

    /// The column name for the profile name ("Current", "Default", ...).
    pub const COLUMN_NAME: &'static str = "name";

    pub const COLUMN_DARK_MODE: &'static str = "inDarkMode";

    /// The column name for the font size in points.
    pub const COLUMN_FONT_SIZE: &'static str = "font_size";

    pub const COLUMN_FONT_FAMILY: &'static str = "font_family";

    /// Rows every installation starts with.
    pub const SEEDED_PROFILES: [&'static str; 5] =
        ["Default", "Current", "Profile 1", "Profile 2", "Profile 3"];

    /// SQL statement for creating the settings table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} VARCHAR(45) PRIMARY KEY NOT NULL,
                {} BOOLEAN NOT NULL DEFAULT 0,
                {} INTEGER NOT NULL DEFAULT 14,
                {} VARCHAR(45) NOT NULL DEFAULT 'Arial'
            )",
            Self::TABLE_NAME,
            Self::COLUMN_NAME,
            Self::COLUMN_DARK_MODE,
            Self::COLUMN_FONT_SIZE,
            Self::COLUMN_FONT_FAMILY
        )
    }
}
