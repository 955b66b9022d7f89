pub mod ingredient_tables;
pub mod machine_tables;
pub mod recipe_tables;
pub mod score_tables;
pub mod settings_profile_tables;
pub mod user_tables;

pub use ingredient_tables::IngredientTable;
pub use machine_tables::MachineTable;
pub use recipe_tables::RecipeTable;
pub use score_tables::ScoreTable;
pub use settings_profile_tables::SettingsProfileTable;
pub use user_tables::UserTable;
