/// Provides constants and utilities for working with
/// the "Recipe" database table.
pub struct RecipeTable;

impl RecipeTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Recipe";

    pub const COLUMN_ID: &'static str = "idRecipe";

    /// The column name for the natural key of a recipe.
    pub const COLUMN_NAME: &'static str = "name";

    /// The column name for the brew time in seconds.
    pub const COLUMN_BREWTIME: &'static str = "brewtime";

    pub const COLUMN_AMOUNT_BEANS: &'static str = "amount_beans";

    pub const COLUMN_AMOUNT_WATER: &'static str = "amount_added_water";

    pub const COLUMN_AMOUNT_MILK: &'static str = "amount_added_milk";

    pub const COLUMN_WATER_PRESSURE: &'static str = "water_pressure";

    pub const COLUMN_FILLING_CAPACITY: &'static str = "filling_capacity";

    pub const COLUMN_WATER_TEMPERATURE: &'static str = "water_temperature";

    pub const COLUMN_SPOON_ID: &'static str = "Spoon_idspoon";

    pub const COLUMN_CUP_ID: &'static str = "Cup_idcup";

    /// The column name for the image reference shown by the machine.
    pub const COLUMN_IMAGE: &'static str = "image";

    /// Values the authoring tool does not edit; new recipes get these.
    pub const DEFAULT_FILLING_CAPACITY: i64 = 25;
    pub const DEFAULT_WATER_TEMPERATURE: i64 = 90;
    pub const DEFAULT_SPOON_ID: i64 = 2;
    pub const DEFAULT_CUP_ID: i64 = 2;

    /// SQL statement for creating the Recipe table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} VARCHAR(45) NOT NULL,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL DEFAULT 0,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL,
                {} INTEGER NOT NULL,
                {} VARCHAR(255)
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_NAME,
            Self::COLUMN_BREWTIME,
            Self::COLUMN_AMOUNT_BEANS,
            Self::COLUMN_AMOUNT_WATER,
            Self::COLUMN_AMOUNT_MILK,
            Self::COLUMN_WATER_PRESSURE,
            Self::COLUMN_FILLING_CAPACITY,
            Self::COLUMN_WATER_TEMPERATURE,
            Self::COLUMN_SPOON_ID,
            Self::COLUMN_CUP_ID,
            Self::COLUMN_IMAGE
        )
    }
}
