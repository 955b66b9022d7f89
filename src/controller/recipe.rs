use async_trait::async_trait;

use crate::{
    controller::{
        edit_fields::EditFields,
        table_view::{Column, RowAction},
        table_view_controller::{CreateDeleteScreen, EditScreen, TableScreen, TableViewController},
    },
    db::{Creatable, Deletable, Editable, Listable, RecipeStore},
    error::Result,
    models::Recipe,
    validation::{ValidationError, parse_non_negative, parse_positive},
};

pub type RecipeController = TableViewController<RecipeScreen>;

pub struct RecipeScreen {
    store: RecipeStore,
}

impl RecipeScreen {
    pub const NAME_FIELD: &'static str = "name";
    pub const BREWTIME_FIELD: &'static str = "brewtime";
    pub const COFFEE_BEAN_FIELD: &'static str = "coffeeBeans";
    pub const MILK_FIELD: &'static str = "milk";
    pub const WATER_PRESSURE_FIELD: &'static str = "waterPressure";

    pub fn new(store: RecipeStore) -> Self {
        Self { store }
    }

    /// Brewtime, beans and pressure must be positive, milk may be zero.
    fn parse_numbers(fields: &EditFields) -> Option<(i64, i64, i64, i64)> {
        Some((
            parse_positive(fields.text(Self::BREWTIME_FIELD))?,
            parse_positive(fields.text(Self::COFFEE_BEAN_FIELD))?,
            parse_non_negative(fields.text(Self::MILK_FIELD))?,
            parse_positive(fields.text(Self::WATER_PRESSURE_FIELD))?,
        ))
    }
}

#[async_trait]
impl TableScreen for RecipeScreen {
    type Property = Recipe;

    fn regular_table_columns(&self) -> Vec<Column> {
        vec![
            Column::new("Name", "name"),
            Column::new("Brewtime", "brewtime"),
            Column::new("Coffee Beans", "amountOfBeans"),
            Column::new("Milk", "amountOfMilk"),
            Column::new("Water Pressure", "waterPressure"),
        ]
    }

    fn row_actions(&self) -> Vec<RowAction> {
        vec![RowAction::edit(), RowAction::delete()]
    }

    fn text_fields(&self) -> &'static [&'static str] {
        &[
            Self::NAME_FIELD,
            Self::BREWTIME_FIELD,
            Self::COFFEE_BEAN_FIELD,
            Self::MILK_FIELD,
            Self::WATER_PRESSURE_FIELD,
        ]
    }

    fn blank_property(&self) -> Recipe {
        Recipe::blank()
    }

    async fn get_all_from_selected_property(&self) -> Result<Vec<Recipe>> {
        self.store.get_all_from_property().await
    }
}

#[async_trait]
impl EditScreen for RecipeScreen {
    fn name_of(&self, property: &Recipe) -> String {
        property.name.clone()
    }

    fn load_property_in_edit_fields(&self, property: &Recipe, fields: &mut EditFields) {
        fields.set_text(Self::NAME_FIELD, property.name.as_str());
        fields.set_text(Self::BREWTIME_FIELD, property.brewtime.to_string());
        fields.set_text(Self::COFFEE_BEAN_FIELD, property.amount_of_beans.to_string());
        fields.set_text(Self::MILK_FIELD, property.amount_of_milk.to_string());
        fields.set_text(Self::WATER_PRESSURE_FIELD, property.water_pressure.to_string());
    }

    async fn apply_edit_fields(&self, selected: &Recipe, fields: &EditFields) -> Result<Recipe> {
        let (brewtime, beans, milk, water_pressure) =
            Self::parse_numbers(fields).ok_or(ValidationError::InvalidRecipeNumbers)?;

        let new_name = fields.text(Self::NAME_FIELD);
        if new_name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if new_name != selected.name && self.store.find_recipe_by_name(new_name).await?.is_some() {
            return Err(ValidationError::RecipeNameTaken(new_name.to_string()).into());
        }

        Ok(Recipe {
            name: new_name.to_string(),
            former_name: Some(selected.stored_name().to_string()),
            brewtime,
            amount_of_beans: beans,
            amount_of_milk: milk,
            water_pressure,
            image_url: Some(Recipe::DEFAULT_IMAGE_URL.to_string()),
        })
    }

    async fn update_property_in_db(&self, property: &Recipe) -> Result<()> {
        self.store.update_property_in_db(property).await
    }
}

#[async_trait]
impl CreateDeleteScreen for RecipeScreen {
    async fn create_new_property_in_db(&self, property: &Recipe) -> Result<()> {
        self.store.create_new_property_in_db(property).await
    }

    async fn delete_property_from_db(&self, property: &Recipe) -> Result<()> {
        self.store.delete_property_from_db(property).await
    }
}
