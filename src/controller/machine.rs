use async_trait::async_trait;

use crate::{
    controller::{
        edit_fields::EditFields,
        table_view::{Column, RowAction},
        table_view_controller::{EditScreen, TableScreen, TableViewController},
    },
    db::{Editable, Listable, MachineStore},
    error::Result,
    models::Machine,
    validation::{require_filled, require_max_length},
};

pub type MachineController = TableViewController<MachineScreen>;

/// Machines are registered elsewhere; the tool edits their description.
pub struct MachineScreen {
    store: MachineStore,
}

impl MachineScreen {
    pub const ID_FIELD: &'static str = "id";
    pub const NAME_FIELD: &'static str = "name";
    pub const DESCRIPTION_FIELD: &'static str = "description";

    pub fn new(store: MachineStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TableScreen for MachineScreen {
    type Property = Machine;

    fn regular_table_columns(&self) -> Vec<Column> {
        vec![
            Column::new("ID", "id"),
            Column::new("Name", "name"),
            Column::new("Description", "description"),
        ]
    }

    fn row_actions(&self) -> Vec<RowAction> {
        vec![RowAction::edit()]
    }

    fn text_fields(&self) -> &'static [&'static str] {
        &[Self::ID_FIELD, Self::NAME_FIELD, Self::DESCRIPTION_FIELD]
    }

    fn blank_property(&self) -> Machine {
        Machine::blank()
    }

    async fn get_all_from_selected_property(&self) -> Result<Vec<Machine>> {
        self.store.get_all_from_property().await
    }
}

#[async_trait]
impl EditScreen for MachineScreen {
    fn name_of(&self, property: &Machine) -> String {
        property.name.clone()
    }

    fn load_property_in_edit_fields(&self, property: &Machine, fields: &mut EditFields) {
        fields.set_text(Self::ID_FIELD, property.id.to_string());
        fields.set_text(Self::NAME_FIELD, property.name.as_str());
        fields.set_text(Self::DESCRIPTION_FIELD, property.description.as_str());
    }

    async fn apply_edit_fields(&self, selected: &Machine, fields: &EditFields) -> Result<Machine> {
        let description = fields.text(Self::DESCRIPTION_FIELD);
        require_filled("description", description)?;
        require_max_length("description", description)?;

        Ok(Machine {
            description: description.to_string(),
            ..selected.clone()
        })
    }

    async fn update_property_in_db(&self, property: &Machine) -> Result<()> {
        self.store.update_property_in_db(property).await
    }
}
