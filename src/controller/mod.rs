pub mod edit_fields;
pub mod ingredient;
pub mod machine;
pub mod message;
pub mod profile;
pub mod recipe;
pub mod settings;
pub mod table_view;
pub mod table_view_controller;
pub mod user;

pub use edit_fields::EditFields;
pub use ingredient::{IngredientController, IngredientScreen};
pub use machine::{MachineController, MachineScreen};
pub use message::{MessageField, MessageKind, StatusMessage};
pub use profile::{ProfileButton, ProfileController};
pub use recipe::{RecipeController, RecipeScreen};
pub use settings::SettingsController;
pub use table_view::{Column, RowAction, RowActionKind, TableView};
pub use table_view_controller::{CreateDeleteScreen, EditScreen, TableScreen, TableViewController};
pub use user::{UserController, UserScreen};
