pub mod ingredient;
pub mod machine;
pub mod recipe;
pub mod score;
pub mod settings_profile;
pub mod user;

pub use ingredient::Ingredient;
pub use machine::Machine;
pub use recipe::Recipe;
pub use score::Score;
pub use settings_profile::{FontFamily, FontSize, SettingsProfile};
pub use user::User;
