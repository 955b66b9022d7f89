/// Provides constants and utilities for working with
/// the "Ingredient" database table.
pub struct IngredientTable;

impl IngredientTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Ingredient";

    /// The column name for the natural key of an ingredient.
    pub const COLUMN_NAME: &'static str = "name";

    pub const COLUMN_DESCRIPTION: &'static str = "description";

    pub const COLUMN_UNIT: &'static str = "unit";

    /// SQL statement for creating the Ingredient table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} VARCHAR(45) PRIMARY KEY NOT NULL,
                {} VARCHAR(45) NOT NULL,
                {} VARCHAR(45) NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_NAME,
            Self::COLUMN_DESCRIPTION,
            Self::COLUMN_UNIT
        )
    }
}
