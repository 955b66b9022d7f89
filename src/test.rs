use crate::controller::table_view_controller::{LOOKUP_FAILED_WARNING, NO_PROPERTIES_WARNING};
use crate::controller::{
    IngredientController, IngredientScreen, MachineController, MachineScreen, MessageKind,
    ProfileButton, ProfileController, RecipeController, RecipeScreen, SettingsController,
    UserController, UserScreen,
};
use crate::db::{
    self, Creatable, DbPool, Deletable, Editable, IngredientStore, Listable, MachineStore,
    RecipeStore, ScoreStore, SettingsProfileStore, UserStore,
};
use crate::error::AppError;
use crate::models::{
    FontFamily, FontSize, Ingredient, Machine, Recipe, Score, SettingsProfile, User,
};
use crate::services::SettingsApplier;
use crate::view::{EventQueue, ViewRoot};

// Helper function to set up a fresh in-memory test database
async fn setup_test_db() -> DbPool {
    let pool = db::init_db_pool("sqlite::memory:", 1)
        .await
        .expect("Failed to initialize database");
    db::seed_settings_profiles(&pool)
        .await
        .expect("Failed to seed settings profiles");
    pool
}

async fn count_rows(pool: &DbPool, table: &str) -> i64 {
    let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows");
    count.0
}

// Helper function to create a test recipe directly in the store
async fn create_test_recipe(pool: &DbPool, name: &str) -> Recipe {
    let recipe = Recipe::new(name, 30, 18, 0, 9);
    RecipeStore::new(pool.clone())
        .create_new_property_in_db(&recipe)
        .await
        .expect("Failed to create recipe");
    recipe
}

async fn create_test_user(pool: &DbPool, username: &str) -> User {
    let store = UserStore::new(pool.clone());
    store
        .create_new_property_in_db(&User::new(0, username, "player@example.com", "secret"))
        .await
        .expect("Failed to create user");
    store
        .find_user_by_name(username)
        .await
        .expect("Failed to look up user")
        .expect("User was not stored")
}

// Ingredients and machines are provisioned outside the tool
async fn insert_test_ingredient(pool: &DbPool, name: &str, description: &str, unit: &str) {
    sqlx::query("INSERT INTO Ingredient (name, description, unit) VALUES (?, ?, ?)")
        .bind(name)
        .bind(description)
        .bind(unit)
        .execute(pool)
        .await
        .expect("Failed to insert ingredient");
}

async fn insert_test_machine(pool: &DbPool, name: &str, description: &str) -> i64 {
    sqlx::query("INSERT INTO Machine (name, decription) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(pool)
        .await
        .expect("Failed to insert machine")
        .last_insert_rowid()
}

fn settings_applier(pool: &DbPool) -> SettingsApplier {
    SettingsApplier::new(SettingsProfileStore::new(pool.clone()))
}

#[cfg(test)]
mod store_tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_setup_is_repeatable() {
        let pool = setup_test_db().await;

        db::setup_database(&pool)
            .await
            .expect("Second schema setup failed");
        db::seed_settings_profiles(&pool)
            .await
            .expect("Second seeding failed");

        assert_eq!(count_rows(&pool, "Setting_Profiles_Authoringtool").await, 5);
    }

    #[tokio::test]
    async fn test_ingredient_insert_and_list() {
        let pool = setup_test_db().await;
        let store = IngredientStore::new(pool.clone());

        insert_test_ingredient(&pool, "Espresso Bean", "Dark roast", "g").await;

        let ingredients = store.get_all_from_property().await.expect("Failed to list");
        assert_eq!(
            ingredients,
            vec![Ingredient::new("Espresso Bean", "Dark roast", "g")]
        );
    }

    #[tokio::test]
    async fn test_machine_update_by_id() {
        let pool = setup_test_db().await;
        let store = MachineStore::new(pool.clone());

        let id = insert_test_machine(&pool, "Barista One", "Counter machine").await;
        let mut machine = store
            .find_machine_by_id(id)
            .await
            .expect("Lookup failed")
            .expect("Machine missing");
        machine.description = "Lobby machine".to_string();
        store
            .update_property_in_db(&machine)
            .await
            .expect("Failed to update machine");

        let machines = store.get_all_from_property().await.expect("Failed to list");
        assert_eq!(machines.len(), 1);
        assert_eq!(machines[0].description, "Lobby machine");
        assert_eq!(machines[0].name, "Barista One");
    }

    #[tokio::test]
    async fn test_recipe_create_rename_delete() {
        let pool = setup_test_db().await;
        let store = RecipeStore::new(pool.clone());

        create_test_recipe(&pool, "Latte").await;
        assert!(store.find_recipe_by_name("Latte").await.unwrap().is_some());

        let mut renamed = Recipe::new("Caffe Latte", 35, 18, 150, 9);
        renamed.former_name = Some("Latte".to_string());
        store
            .update_property_in_db(&renamed)
            .await
            .expect("Failed to rename recipe");

        assert!(store.find_recipe_by_name("Latte").await.unwrap().is_none());
        let stored = store
            .find_recipe_by_name("Caffe Latte")
            .await
            .unwrap()
            .expect("Renamed recipe missing");
        assert_eq!(stored.amount_of_milk, 150);

        store
            .delete_property_from_db(&stored)
            .await
            .expect("Failed to delete recipe");
        assert!(store.get_all_from_property().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_create_links_score_row() {
        let pool = setup_test_db().await;

        let user = create_test_user(&pool, "barista").await;

        let score = ScoreStore::new(pool.clone())
            .get_score_by_id(user.score_id)
            .await
            .expect("Lookup failed")
            .expect("Score row missing");
        assert_eq!(score.highscore, 0);
        assert_eq!(user.highscore, 0);
    }

    #[tokio::test]
    async fn test_user_highscore_is_joined_from_score() {
        let pool = setup_test_db().await;
        let user = create_test_user(&pool, "barista").await;

        ScoreStore::new(pool.clone())
            .update_property_in_db(&Score {
                id: user.score_id,
                highscore: 420,
            })
            .await
            .expect("Failed to update score");

        let users = UserStore::new(pool.clone())
            .get_all_from_property()
            .await
            .expect("Failed to list users");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].highscore, 420);
    }

    #[tokio::test]
    async fn test_user_delete_removes_score_row() {
        let pool = setup_test_db().await;
        let store = UserStore::new(pool.clone());
        let keep = create_test_user(&pool, "keeper").await;
        let gone = create_test_user(&pool, "leaver").await;

        store
            .delete_property_from_db(&gone)
            .await
            .expect("Failed to delete user");

        let users = store.get_all_from_property().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "keeper");

        let scores = ScoreStore::new(pool.clone())
            .get_all_from_property()
            .await
            .unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].id, keep.score_id);
    }

    #[tokio::test]
    async fn test_deleting_unknown_user_changes_nothing() {
        let pool = setup_test_db().await;
        create_test_user(&pool, "keeper").await;

        let result = UserStore::new(pool.clone())
            .delete_property_from_db(&User::blank())
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert_eq!(count_rows(&pool, "User").await, 1);
        assert_eq!(count_rows(&pool, "Score").await, 1);
    }

    #[tokio::test]
    async fn test_settings_profiles_seeded() {
        let pool = setup_test_db().await;
        let store = SettingsProfileStore::new(pool.clone());

        let current = store
            .get_current_settings()
            .await
            .unwrap()
            .expect("Current profile missing");
        assert_eq!(current, SettingsProfile::default().renamed("Current"));
        assert!(store.get_default_settings().await.unwrap().is_some());
        assert!(store.get_profile_by_name("Profile 3").await.unwrap().is_some());
        assert_eq!(store.get_all_from_property().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_settings_profile_update() {
        let pool = setup_test_db().await;
        let store = SettingsProfileStore::new(pool.clone());

        store
            .update_property_in_db(&SettingsProfile::new(
                "Profile 2",
                true,
                FontSize::Small,
                FontFamily::ComicSansMS,
            ))
            .await
            .expect("Failed to update profile");

        let profile = store.get_profile_by_name("Profile 2").await.unwrap().unwrap();
        assert!(profile.in_dark_mode);
        assert_eq!(profile.font_size, FontSize::Small);
        assert_eq!(profile.font_family, FontFamily::ComicSansMS);
    }

    #[tokio::test]
    async fn test_writes_matching_no_row_fail() {
        let pool = setup_test_db().await;

        let results = [
            RecipeStore::new(pool.clone())
                .update_property_in_db(&Recipe::new("Ghost", 25, 18, 0, 9))
                .await,
            RecipeStore::new(pool.clone())
                .delete_property_from_db(&Recipe::new("Ghost", 25, 18, 0, 9))
                .await,
            IngredientStore::new(pool.clone())
                .update_property_in_db(&Ingredient::new("Ghost", "None", "g"))
                .await,
            MachineStore::new(pool.clone())
                .update_property_in_db(&Machine::blank())
                .await,
            UserStore::new(pool.clone())
                .update_property_in_db(&User::blank())
                .await,
            ScoreStore::new(pool.clone())
                .update_property_in_db(&Score {
                    id: 99,
                    highscore: 1,
                })
                .await,
            SettingsProfileStore::new(pool.clone())
                .update_property_in_db(&SettingsProfile::default().renamed("Profile 9"))
                .await,
        ];

        for result in results {
            assert!(matches!(
                result,
                Err(AppError::Database(sqlx::Error::RowNotFound))
            ));
        }
    }

    #[tokio::test]
    async fn test_update_with_unchanged_values_succeeds() {
        let pool = setup_test_db().await;
        insert_test_ingredient(&pool, "Milk", "Whole milk", "ml").await;

        IngredientStore::new(pool.clone())
            .update_property_in_db(&Ingredient::new("Milk", "Whole milk", "ml"))
            .await
            .expect("Unchanged row should still match");
    }

    #[tokio::test]
    async fn test_closed_pool_reports_storage_error() {
        let pool = setup_test_db().await;
        let store = RecipeStore::new(pool.clone());
        pool.close().await;

        let result = store.get_all_from_property().await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}

#[cfg(test)]
mod ingredient_controller_tests {
    use super::*;

    async fn ingredient_controller(pool: &DbPool) -> IngredientController {
        IngredientController::initialize(IngredientScreen::new(IngredientStore::new(pool.clone())))
            .await
    }

    #[tokio::test]
    async fn test_edit_ingredient_scenario() {
        let pool = setup_test_db().await;
        let store = IngredientStore::new(pool.clone());
        insert_test_ingredient(&pool, "Espresso Bean", "Dark roast", "g").await;

        let mut controller = ingredient_controller(&pool).await;
        assert_eq!(
            controller.table_view().items(),
            &[Ingredient::new("Espresso Bean", "Dark roast", "g")]
        );

        assert!(controller.on_edit_button_clicked(0));
        assert_eq!(controller.edit_fields().text("name"), "Espresso Bean");
        assert_eq!(controller.edit_fields().text("description"), "Dark roast");

        // 46 characters
        controller
            .edit_fields_mut()
            .set_text("description", "a".repeat(46));
        assert!(!controller.edit_property().await);
        assert_eq!(controller.message_field().kind(), Some(MessageKind::Warning));
        assert_eq!(
            controller.message_field().text(),
            Some("The description cannot be longer than 45 characters!")
        );
        assert_eq!(controller.selected_property().description, "Dark roast");
        let stored = store
            .find_ingredient_by_name("Espresso Bean")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.description, "Dark roast");

        controller
            .edit_fields_mut()
            .set_text("description", "Medium roast");
        controller.edit_fields_mut().set_text("unit", "kg");
        assert!(controller.edit_property().await);
        assert_eq!(controller.message_field().kind(), Some(MessageKind::Success));
        assert!(
            controller
                .message_field()
                .text()
                .unwrap()
                .contains("Espresso Bean")
        );
        assert!(controller.edit_fields().all_empty());
        assert_eq!(
            controller.table_view().items(),
            &[Ingredient::new("Espresso Bean", "Medium roast", "kg")]
        );
    }

    #[tokio::test]
    async fn test_description_of_exactly_45_characters_is_accepted() {
        let pool = setup_test_db().await;
        insert_test_ingredient(&pool, "Milk", "Whole milk", "ml").await;
        let mut controller = ingredient_controller(&pool).await;

        controller.on_edit_button_clicked(0);
        controller
            .edit_fields_mut()
            .set_text("description", "d".repeat(45));
        assert!(controller.edit_property().await);
        assert_eq!(controller.table_view().items()[0].description, "d".repeat(45));
    }

    #[tokio::test]
    async fn test_empty_unit_is_rejected() {
        let pool = setup_test_db().await;
        insert_test_ingredient(&pool, "Sugar", "White sugar", "g").await;
        let mut controller = ingredient_controller(&pool).await;

        controller.on_edit_button_clicked(0);
        controller.edit_fields_mut().set_text("unit", "");
        assert!(!controller.edit_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("The unit field should not be empty!")
        );
    }

    #[tokio::test]
    async fn test_empty_table_invites_creation() {
        let pool = setup_test_db().await;
        let controller = ingredient_controller(&pool).await;

        assert!(controller.table_view().is_empty());
        assert_eq!(controller.message_field().text(), Some(NO_PROPERTIES_WARNING));
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let pool = setup_test_db().await;
        insert_test_ingredient(&pool, "Cocoa", "Powder", "g").await;
        let mut controller = ingredient_controller(&pool).await;
        let first = controller.table_view().render();

        controller.refresh().await;
        controller.refresh().await;

        assert_eq!(controller.table_view().render(), first);
        assert_eq!(controller.selected_property(), &Ingredient::blank());
        assert!(controller.message_field().current().is_none());
    }

    #[tokio::test]
    async fn test_update_failure_is_reported() {
        let pool = setup_test_db().await;
        insert_test_ingredient(&pool, "Espresso Bean", "Dark roast", "g").await;
        let mut controller = ingredient_controller(&pool).await;
        controller.on_edit_button_clicked(0);
        controller
            .edit_fields_mut()
            .set_text("description", "Light roast");

        pool.close().await;

        assert!(!controller.edit_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("Updating Espresso Bean failed on database side")
        );
        // Nothing was reset and the selection is the row as loaded
        assert_eq!(controller.edit_fields().text("description"), "Light roast");
        assert_eq!(controller.table_view().len(), 1);
        assert_eq!(
            controller.selected_property(),
            &Ingredient::new("Espresso Bean", "Dark roast", "g")
        );
    }

    #[tokio::test]
    async fn test_refresh_with_unreachable_store_shows_warning() {
        let pool = setup_test_db().await;
        let mut controller = ingredient_controller(&pool).await;
        pool.close().await;

        controller.refresh().await;

        assert!(controller.table_view().is_empty());
        assert_eq!(controller.message_field().text(), Some(NO_PROPERTIES_WARNING));
    }
}

#[cfg(test)]
mod machine_controller_tests {
    use super::*;

    #[tokio::test]
    async fn test_edit_machine_description() {
        let pool = setup_test_db().await;
        insert_test_machine(&pool, "Barista One", "Counter machine").await;
        let mut controller =
            MachineController::initialize(MachineScreen::new(MachineStore::new(pool.clone())))
                .await;

        assert!(controller.on_edit_button_clicked(0));
        assert_eq!(controller.edit_fields().text("id"), "1");
        controller
            .edit_fields_mut()
            .set_text("description", "Lobby machine");

        assert!(controller.edit_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("Barista One was edited successfully!")
        );
        assert_eq!(
            controller.table_view().render(),
            vec![vec![
                "1".to_string(),
                "Barista One".to_string(),
                "Lobby machine".to_string(),
                "Edit".to_string(),
            ]]
        );
    }

    #[tokio::test]
    async fn test_edit_button_on_missing_row() {
        let pool = setup_test_db().await;
        let mut controller =
            MachineController::initialize(MachineScreen::new(MachineStore::new(pool.clone())))
                .await;

        assert!(!controller.on_edit_button_clicked(3));
        assert_eq!(controller.selected_property().id, i64::MAX);
    }
}

#[cfg(test)]
mod recipe_controller_tests {
    use super::*;

    async fn recipe_controller(pool: &DbPool) -> RecipeController {
        RecipeController::initialize(RecipeScreen::new(RecipeStore::new(pool.clone()))).await
    }

    fn fill_recipe_fields(
        controller: &mut RecipeController,
        name: &str,
        brewtime: &str,
        beans: &str,
        milk: &str,
        pressure: &str,
    ) {
        let fields = controller.edit_fields_mut();
        fields.set_text("name", name);
        fields.set_text("brewtime", brewtime);
        fields.set_text("coffeeBeans", beans);
        fields.set_text("milk", milk);
        fields.set_text("waterPressure", pressure);
    }

    fn names(controller: &RecipeController) -> Vec<String> {
        controller
            .table_view()
            .items()
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    #[tokio::test]
    async fn test_create_recipe_with_zero_milk() {
        let pool = setup_test_db().await;
        let mut controller = recipe_controller(&pool).await;

        fill_recipe_fields(&mut controller, "Espresso", "25", "18", "0", "9");
        assert!(controller.create_new_property().await);

        assert_eq!(
            controller.message_field().text(),
            Some("Espresso was added successfully!")
        );
        assert_eq!(names(&controller), vec!["Espresso".to_string()]);
        let stored = &controller.table_view().items()[0];
        assert_eq!(stored.amount_of_milk, 0);
        assert_eq!(stored.image_url.as_deref(), Some(Recipe::DEFAULT_IMAGE_URL));
        assert!(controller.edit_fields().all_empty());
    }

    #[tokio::test]
    async fn test_non_positive_numbers_are_rejected() {
        let pool = setup_test_db().await;
        let mut controller = recipe_controller(&pool).await;

        let rejected = [
            ("0", "18", "9"),
            ("25", "-1", "9"),
            ("25", "18", "0"),
            ("abc", "18", "9"),
        ];
        for (brewtime, beans, pressure) in rejected {
            fill_recipe_fields(&mut controller, "Espresso", brewtime, beans, "0", pressure);
            assert!(!controller.create_new_property().await);
            assert_eq!(
                controller.message_field().text(),
                Some("Brewtime, Water Pressure and the ingredients have to be positive numbers!")
            );
            assert_eq!(controller.selected_property(), &Recipe::blank());
        }

        assert_eq!(count_rows(&pool, "Recipe").await, 0);
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let pool = setup_test_db().await;
        let mut controller = recipe_controller(&pool).await;

        fill_recipe_fields(&mut controller, "", "25", "18", "0", "9");
        assert!(!controller.create_new_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("The name field cannot be empty!")
        );
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_is_rejected() {
        let pool = setup_test_db().await;
        create_test_recipe(&pool, "Espresso").await;
        create_test_recipe(&pool, "Cappuccino").await;
        let mut controller = recipe_controller(&pool).await;

        assert!(controller.on_edit_button_clicked(1));
        controller.edit_fields_mut().set_text("name", "Espresso");
        assert!(!controller.edit_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("A recipe with the name Espresso already exists! Choose another name!")
        );
        assert_eq!(controller.selected_property().name, "Cappuccino");

        controller.refresh().await;
        assert_eq!(
            names(&controller),
            vec!["Espresso".to_string(), "Cappuccino".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rename_to_own_name_and_to_new_name() {
        let pool = setup_test_db().await;
        create_test_recipe(&pool, "Cappuccino").await;
        let mut controller = recipe_controller(&pool).await;

        controller.on_edit_button_clicked(0);
        controller.edit_fields_mut().set_text("brewtime", "40");
        assert!(controller.edit_property().await);
        assert_eq!(controller.table_view().items()[0].brewtime, 40);

        controller.on_edit_button_clicked(0);
        controller.edit_fields_mut().set_text("name", "Flat White");
        assert!(controller.edit_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("Flat White was edited successfully!")
        );
        assert_eq!(names(&controller), vec!["Flat White".to_string()]);
        assert_eq!(controller.table_view().items()[0].brewtime, 40);
    }

    #[tokio::test]
    async fn test_delete_button_removes_recipe() {
        let pool = setup_test_db().await;
        create_test_recipe(&pool, "Espresso").await;
        create_test_recipe(&pool, "Lungo").await;
        let mut controller = recipe_controller(&pool).await;

        assert!(controller.on_delete_button_clicked(0).await);

        assert_eq!(
            controller.message_field().text(),
            Some("Espresso was deleted successfully!")
        );
        assert_eq!(names(&controller), vec!["Lungo".to_string()]);
        assert!(!controller.on_delete_button_clicked(5).await);
    }

    #[tokio::test]
    async fn test_edit_without_selection_is_reported() {
        let pool = setup_test_db().await;
        create_test_recipe(&pool, "Latte").await;
        let mut controller = recipe_controller(&pool).await;

        fill_recipe_fields(&mut controller, "Mocha", "25", "18", "0", "9");
        assert!(!controller.edit_property().await);

        assert_eq!(
            controller.message_field().text(),
            Some("Updating Mocha failed on database side")
        );
        assert_eq!(controller.selected_property(), &Recipe::blank());
        controller.refresh().await;
        assert_eq!(names(&controller), vec!["Latte".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_of_removed_recipe_is_reported() {
        let pool = setup_test_db().await;
        create_test_recipe(&pool, "Latte").await;
        let mut controller = recipe_controller(&pool).await;

        sqlx::query("DELETE FROM Recipe").execute(&pool).await.unwrap();

        assert!(!controller.on_delete_button_clicked(0).await);
        assert_eq!(
            controller.message_field().text(),
            Some("Deleting Latte failed on database side")
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_during_validation() {
        let pool = setup_test_db().await;
        let mut controller = recipe_controller(&pool).await;
        fill_recipe_fields(&mut controller, "Espresso", "25", "18", "0", "9");
        pool.close().await;

        assert!(!controller.create_new_property().await);
        assert_eq!(controller.message_field().text(), Some(LOOKUP_FAILED_WARNING));
    }
}

#[cfg(test)]
mod user_controller_tests {
    use super::*;

    async fn user_controller(pool: &DbPool) -> UserController {
        UserController::initialize(UserScreen::new(UserStore::new(pool.clone()))).await
    }

    fn fill_user_fields(
        controller: &mut UserController,
        username: &str,
        mail: &str,
        password: &str,
    ) {
        let fields = controller.edit_fields_mut();
        fields.set_text("username", username);
        fields.set_text("mail", mail);
        fields.set_text("password", password);
    }

    #[tokio::test]
    async fn test_create_then_delete_user() {
        let pool = setup_test_db().await;
        let mut controller = user_controller(&pool).await;

        fill_user_fields(&mut controller, "barista", "barista@example.com", "secret");
        assert!(controller.create_new_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("barista was added successfully!")
        );
        assert_eq!(controller.table_view().len(), 1);
        assert_eq!(controller.table_view().items()[0].username, "barista");
        assert_eq!(count_rows(&pool, "Score").await, 1);

        assert!(controller.on_delete_button_clicked(0).await);
        assert_eq!(
            controller.message_field().text(),
            Some("barista was deleted successfully!")
        );
        assert!(controller.table_view().is_empty());
        assert_eq!(count_rows(&pool, "User").await, 0);
        assert_eq!(count_rows(&pool, "Score").await, 0);
    }

    #[tokio::test]
    async fn test_rename_user_to_taken_username() {
        let pool = setup_test_db().await;
        create_test_user(&pool, "alice").await;
        create_test_user(&pool, "bob").await;
        let mut controller = user_controller(&pool).await;

        controller.on_edit_button_clicked(1);
        controller.edit_fields_mut().set_text("username", "alice");
        assert!(!controller.edit_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("A User with the username alice already exists! Choose another username!")
        );

        let store = UserStore::new(pool.clone());
        assert!(store.find_user_by_name("bob").await.unwrap().is_some());
        assert_eq!(
            store.get_all_from_property().await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_edit_user_keeping_username() {
        let pool = setup_test_db().await;
        let user = create_test_user(&pool, "alice").await;
        let mut controller = user_controller(&pool).await;

        controller.on_edit_button_clicked(0);
        assert_eq!(controller.edit_fields().text("id"), user.id.to_string());
        controller
            .edit_fields_mut()
            .set_text("mail", "alice@coffee.example");
        assert!(controller.edit_property().await);

        let stored = UserStore::new(pool.clone())
            .get_user_by_id(user.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.username, "alice");
        assert_eq!(stored.mail, "alice@coffee.example");
        assert_eq!(stored.score_id, user.score_id);
    }

    #[tokio::test]
    async fn test_empty_fields_are_rejected() {
        let pool = setup_test_db().await;
        let mut controller = user_controller(&pool).await;

        fill_user_fields(&mut controller, "carol", "", "secret");
        assert!(!controller.create_new_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("The editable fields cannot be empty!")
        );
        assert_eq!(count_rows(&pool, "User").await, 0);
        assert_eq!(count_rows(&pool, "Score").await, 0);
    }

    #[tokio::test]
    async fn test_delete_failure_is_reported() {
        let pool = setup_test_db().await;
        create_test_user(&pool, "alice").await;
        let mut controller = user_controller(&pool).await;
        pool.close().await;

        assert!(!controller.on_delete_button_clicked(0).await);
        assert_eq!(
            controller.message_field().text(),
            Some("Deleting alice failed on database side")
        );
        // No reload after a failed write
        assert_eq!(controller.table_view().len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_failure_during_create() {
        let pool = setup_test_db().await;
        let mut controller = user_controller(&pool).await;
        fill_user_fields(&mut controller, "dave", "dave@example.com", "secret");

        // The username lookup runs against a missing table
        sqlx::query("DROP TABLE User").execute(&pool).await.unwrap();

        assert!(!controller.create_new_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some(LOOKUP_FAILED_WARNING)
        );
    }

    #[tokio::test]
    async fn test_failed_user_insert_leaves_no_score_row() {
        let pool = setup_test_db().await;
        let mut controller = user_controller(&pool).await;
        fill_user_fields(&mut controller, "dave", "dave@example.com", "secret");

        sqlx::query(
            r#"
            CREATE TRIGGER reject_user BEFORE INSERT ON User
            BEGIN SELECT RAISE(ABORT, 'rejected'); END
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        assert!(!controller.create_new_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("Creating dave failed on database side")
        );
        assert_eq!(controller.selected_property(), &User::blank());
        assert_eq!(controller.edit_fields().text("username"), "dave");
        assert_eq!(count_rows(&pool, "User").await, 0);
        assert_eq!(count_rows(&pool, "Score").await, 0);
    }

    #[tokio::test]
    async fn test_edit_of_removed_user_is_reported() {
        let pool = setup_test_db().await;
        create_test_user(&pool, "alice").await;
        let mut controller = user_controller(&pool).await;
        controller.on_edit_button_clicked(0);
        controller.edit_fields_mut().set_text("mail", "new@example.com");

        sqlx::query("DELETE FROM User").execute(&pool).await.unwrap();

        assert!(!controller.edit_property().await);
        assert_eq!(
            controller.message_field().text(),
            Some("Updating alice failed on database side")
        );
        assert_eq!(controller.selected_property().mail, "player@example.com");
    }
}

#[cfg(test)]
mod edit_area_tests {
    use super::*;

    #[tokio::test]
    async fn test_reset_edit_area_on_every_screen() {
        let pool = setup_test_db().await;

        let mut ingredients = IngredientController::initialize(IngredientScreen::new(
            IngredientStore::new(pool.clone()),
        ))
        .await;
        let mut machines =
            MachineController::initialize(MachineScreen::new(MachineStore::new(pool.clone())))
                .await;
        let mut recipes =
            RecipeController::initialize(RecipeScreen::new(RecipeStore::new(pool.clone()))).await;
        let mut users =
            UserController::initialize(UserScreen::new(UserStore::new(pool.clone()))).await;

        let names: Vec<&'static str> = ingredients.edit_fields().names().collect();
        for name in names {
            ingredients.edit_fields_mut().set_text(name, "x");
        }
        let names: Vec<&'static str> = machines.edit_fields().names().collect();
        for name in names {
            machines.edit_fields_mut().set_text(name, "x");
        }
        let names: Vec<&'static str> = recipes.edit_fields().names().collect();
        for name in names {
            recipes.edit_fields_mut().set_text(name, "x");
        }
        let names: Vec<&'static str> = users.edit_fields().names().collect();
        for name in names {
            users.edit_fields_mut().set_text(name, "x");
        }

        ingredients.reset_edit_area();
        machines.reset_edit_area();
        recipes.reset_edit_area();
        users.reset_edit_area();

        assert!(ingredients.edit_fields().all_empty());
        assert!(machines.edit_fields().all_empty());
        assert!(recipes.edit_fields().all_empty());
        assert!(users.edit_fields().all_empty());
        assert_eq!(recipes.edit_fields().names().count(), 5);
        assert_eq!(users.edit_fields().names().count(), 4);
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;

    async fn profile_controller(pool: &DbPool, name: &str) -> ProfileController {
        ProfileController::load(
            SettingsProfileStore::new(pool.clone()),
            settings_applier(pool),
            name,
        )
        .await
        .expect("Failed to load profile")
    }

    fn selected_count(controller: &ProfileController, buttons: &[ProfileButton]) -> usize {
        buttons.iter().filter(|b| controller.is_selected(**b)).count()
    }

    #[tokio::test]
    async fn test_switch_font_size_to_big_and_save() {
        let pool = setup_test_db().await;
        let mut queue = EventQueue::new();
        let mut root = ViewRoot::new();
        let mut profile = profile_controller(&pool, "Profile 1").await;

        assert!(profile.is_selected(ProfileButton::MediumFontSize));

        profile.set_font_size(FontSize::Big, &mut queue);
        assert!(!profile.is_selected(ProfileButton::MediumFontSize));
        assert!(profile.is_selected(ProfileButton::BigFontSize));
        assert_eq!(
            selected_count(
                &profile,
                &[
                    ProfileButton::SmallFontSize,
                    ProfileButton::MediumFontSize,
                    ProfileButton::BigFontSize
                ]
            ),
            1
        );
        assert_eq!(
            selected_count(
                &profile,
                &[
                    ProfileButton::Arial,
                    ProfileButton::ComicSansMS,
                    ProfileButton::TimesNewRoman
                ]
            ),
            1
        );

        profile
            .save_current_configuration(&mut queue)
            .await
            .expect("Failed to save profile");

        let store = SettingsProfileStore::new(pool.clone());
        let current = store.get_current_settings().await.unwrap().unwrap();
        assert_eq!(current.font_size, FontSize::Big);
        assert_eq!(current.font_size.points(), 18);
        let saved = store.get_profile_by_name("Profile 1").await.unwrap().unwrap();
        assert_eq!(saved.font_size, FontSize::Big);
        assert_eq!(profile.profile(), &saved);

        queue.run_pending(&mut root);
        assert_eq!(root.style, "font-size: 18");
    }

    #[tokio::test]
    async fn test_unsaved_changes_are_previewed_but_not_stored() {
        let pool = setup_test_db().await;
        let mut queue = EventQueue::new();
        let mut root = ViewRoot::new();
        let mut profile = profile_controller(&pool, "Profile 2").await;

        profile.switch_dark_mode(&mut queue);
        profile.set_font_family(FontFamily::ComicSansMS, &mut queue);
        assert!(profile.is_dark_mode_box_checked());
        assert!(profile.is_selected(ProfileButton::ComicSansMS));

        queue.run_pending(&mut root);
        assert_eq!(root.stylesheets, vec!["/css/darkMode.css".to_string()]);
        assert!(root.has_style_class("rootComicSansMS"));

        let store = SettingsProfileStore::new(pool.clone());
        let stored = store.get_profile_by_name("Profile 2").await.unwrap().unwrap();
        assert!(!stored.in_dark_mode);
        assert_eq!(stored.font_family, FontFamily::Arial);
    }

    #[tokio::test]
    async fn test_reset_changes_restores_saved_profile() {
        let pool = setup_test_db().await;
        let mut queue = EventQueue::new();
        let mut profile = profile_controller(&pool, "Profile 3").await;

        profile.set_font_size(FontSize::Small, &mut queue);
        profile
            .reset_changes(&mut queue)
            .await
            .expect("Failed to reset changes");

        assert_eq!(profile.new_profile_settings(), profile.profile());
        assert!(profile.is_selected(ProfileButton::MediumFontSize));
        assert!(!profile.is_selected(ProfileButton::SmallFontSize));
    }

    #[tokio::test]
    async fn test_reset_to_default_keeps_profile_name() {
        let pool = setup_test_db().await;
        let mut queue = EventQueue::new();
        let store = SettingsProfileStore::new(pool.clone());
        store
            .update_property_in_db(&SettingsProfile::new(
                "Profile 1",
                true,
                FontSize::Big,
                FontFamily::TimesNewRoman,
            ))
            .await
            .unwrap();
        let mut profile = profile_controller(&pool, "Profile 1").await;

        profile
            .reset_to_default(&mut queue)
            .await
            .expect("Failed to reset to default");

        assert_eq!(profile.new_profile_settings().name, "Profile 1");
        assert_eq!(profile.new_profile_settings().font_size, FontSize::Medium);
        assert!(!profile.new_profile_settings().in_dark_mode);
        // Not saved yet
        let stored = store.get_profile_by_name("Profile 1").await.unwrap().unwrap();
        assert_eq!(stored.font_size, FontSize::Big);
    }

    #[tokio::test]
    async fn test_missing_profile_is_an_integrity_error() {
        let pool = setup_test_db().await;

        let result = ProfileController::load(
            SettingsProfileStore::new(pool.clone()),
            settings_applier(&pool),
            "Profile 9",
        )
        .await;

        match result {
            Err(e) => {
                assert!(e.is_integrity_violation());
                assert!(matches!(e, AppError::ProfileNotFound(name) if name == "Profile 9"));
            }
            Ok(_) => panic!("Expected a missing profile error"),
        }
    }

    #[tokio::test]
    async fn test_apply_current_settings() {
        let pool = setup_test_db().await;
        let mut queue = EventQueue::new();
        let mut root = ViewRoot::new();

        settings_applier(&pool)
            .apply_current_settings(&mut queue)
            .await
            .expect("Failed to apply current settings");
        assert_eq!(queue.run_pending(&mut root), 1);

        assert_eq!(root.stylesheets, vec!["/css/stylesheet.css".to_string()]);
        assert_eq!(
            root.style_classes,
            vec!["root".to_string(), "rootArial".to_string()]
        );
        assert_eq!(root.style, "font-size: 14");
    }

    #[tokio::test]
    async fn test_missing_current_settings_is_fatal() {
        let pool = setup_test_db().await;
        let mut queue = EventQueue::new();
        sqlx::query("DELETE FROM Setting_Profiles_Authoringtool WHERE name = 'Current'")
            .execute(&pool)
            .await
            .unwrap();

        let result = settings_applier(&pool).apply_current_settings(&mut queue).await;

        assert!(matches!(result, Err(AppError::MissingCurrentSettings)));
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_first_switch_to_first_tab_previews_nothing() {
        let pool = setup_test_db().await;
        let mut queue = EventQueue::new();
        let profiles = vec![
            profile_controller(&pool, "Profile 1").await,
            profile_controller(&pool, "Profile 2").await,
            profile_controller(&pool, "Profile 3").await,
        ];
        let mut settings = SettingsController::new(profiles);

        assert!(settings.switch_to_profile(0, &mut queue));
        assert!(queue.is_empty());

        assert!(settings.switch_to_profile(2, &mut queue));
        assert_eq!(settings.selected_tab(), 2);
        assert_eq!(queue.len(), 1);

        assert!(settings.switch_to_profile(0, &mut queue));
        assert_eq!(queue.len(), 2);

        assert!(!settings.switch_to_profile(7, &mut queue));
        assert_eq!(settings.tab_count(), 3);
    }
}
