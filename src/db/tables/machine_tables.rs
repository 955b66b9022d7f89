/// Provides constants and utilities for working with
/// the "Machine" database table.
pub struct MachineTable;

impl MachineTable {
    /// The name of the database table
    pub const TABLE_NAME: &'static str = "Machine";

    /// The column name for the surrogate key of a machine.
    pub const COLUMN_ID: &'static str = "idMachine";

    pub const COLUMN_NAME: &'static str = "name";

    /// The column name for the machine's description. The misspelling is part
    /// of the deployed schema.
    pub const COLUMN_DESCRIPTION: &'static str = "decription";

    /// SQL statement for creating the Machine table with the defined schema.
    pub fn create_table() -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (
                {} INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
                {} VARCHAR(45) NOT NULL,
                {} VARCHAR(45) NOT NULL
            )",
            Self::TABLE_NAME,
            Self::COLUMN_ID,
            Self::COLUMN_NAME,
            Self::COLUMN_DESCRIPTION
        )
    }
}
