use async_trait::async_trait;

use crate::{
    controller::{
        edit_fields::EditFields,
        table_view::{Column, RowAction},
        table_view_controller::{EditScreen, TableScreen, TableViewController},
    },
    db::{Editable, IngredientStore, Listable},
    error::Result,
    models::Ingredient,
    validation::{require_filled, require_max_length},
};

pub type IngredientController = TableViewController<IngredientScreen>;

/// Ingredients can be edited but not created or deleted. Only the
/// description and the unit are editable.
pub struct IngredientScreen {
    store: IngredientStore,
}

impl IngredientScreen {
    pub const NAME_FIELD: &'static str = "name";
    pub const DESCRIPTION_FIELD: &'static str = "description";
    pub const UNIT_FIELD: &'static str = "unit";

    pub fn new(store: IngredientStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TableScreen for IngredientScreen {
    type Property = Ingredient;

    fn regular_table_columns(&self) -> Vec<Column> {
        vec![
            Column::new("Name", "name"),
            Column::new("Description", "description"),
            Column::new("Unit", "unit"),
        ]
    }

    fn row_actions(&self) -> Vec<RowAction> {
        vec![RowAction::edit()]
    }

    fn text_fields(&self) -> &'static [&'static str] {
        &[Self::NAME_FIELD, Self::DESCRIPTION_FIELD, Self::UNIT_FIELD]
    }

    fn blank_property(&self) -> Ingredient {
        Ingredient::blank()
    }

    async fn get_all_from_selected_property(&self) -> Result<Vec<Ingredient>> {
        self.store.get_all_from_property().await
    }
}

#[async_trait]
impl EditScreen for IngredientScreen {
    fn name_of(&self, property: &Ingredient) -> String {
        property.name.clone()
    }

    fn load_property_in_edit_fields(&self, property: &Ingredient, fields: &mut EditFields) {
        fields.set_text(Self::NAME_FIELD, property.name.as_str());
        fields.set_text(Self::DESCRIPTION_FIELD, property.description.as_str());
        fields.set_text(Self::UNIT_FIELD, property.unit.as_str());
    }

    async fn apply_edit_fields(
        &self,
        selected: &Ingredient,
        fields: &EditFields,
    ) -> Result<Ingredient> {
        let description = fields.text(Self::DESCRIPTION_FIELD);
        let unit = fields.text(Self::UNIT_FIELD);

        require_filled("description", description)?;
        require_filled("unit", unit)?;
        require_max_length("description", description)?;
        require_max_length("unit", unit)?;

        Ok(Ingredient {
            description: description.to_string(),
            unit: unit.to_string(),
            ..selected.clone()
        })
    }

    async fn update_property_in_db(&self, property: &Ingredient) -> Result<()> {
        self.store.update_property_in_db(property).await
    }
}
