//! The load, select, validate, persist and refresh cycle shared by every
//! entity screen.
//!
//! A screen supplies its entity type, columns, inputs and store access
//! through [`TableScreen`]. Implementing [`EditScreen`] unlocks the edit
//! operations of [`TableViewController`], and [`CreateDeleteScreen`] unlocks
//! create and delete on top of those.

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    controller::{
        edit_fields::EditFields,
        message::MessageField,
        table_view::{Column, RowAction, RowActionKind, TableView},
    },
    error::{AppError, Result},
};

pub const NO_PROPERTIES_WARNING: &str =
    "There are no properties in the corresponding table! You have to create one!";

pub const LOOKUP_FAILED_WARNING: &str = "Something went wrong on database side!";

#[async_trait]
pub trait TableScreen: Send + Sync {
    type Property: Clone + Serialize + Send + Sync + 'static;

    /// Columns bound to the serialized properties of a row.
    fn regular_table_columns(&self) -> Vec<Column>;

    /// Per-row buttons of the screen.
    fn row_actions(&self) -> Vec<RowAction> {
        Vec::new()
    }

    /// Names of the inputs in the edit area.
    fn text_fields(&self) -> &'static [&'static str] {
        &[]
    }

    /// The unpersisted instance held while nothing is selected.
    fn blank_property(&self) -> Self::Property;

    async fn get_all_from_selected_property(&self) -> Result<Vec<Self::Property>>;
}

#[async_trait]
pub trait EditScreen: TableScreen {
    /// Human readable name used in status messages.
    fn name_of(&self, property: &Self::Property) -> String;

    /// Copy `property` into the inputs.
    fn load_property_in_edit_fields(&self, property: &Self::Property, fields: &mut EditFields);

    /// Validate the inputs and return `selected` with them applied.
    ///
    /// Rule violations are returned as [`AppError::Validation`]; any other
    /// error comes from a lookup in the store.
    async fn apply_edit_fields(
        &self,
        selected: &Self::Property,
        fields: &EditFields,
    ) -> Result<Self::Property>;

    async fn update_property_in_db(&self, property: &Self::Property) -> Result<()>;
}

#[async_trait]
pub trait CreateDeleteScreen: EditScreen {
    async fn create_new_property_in_db(&self, property: &Self::Property) -> Result<()>;

    async fn delete_property_from_db(&self, property: &Self::Property) -> Result<()>;
}

/// Drives one entity screen.
pub struct TableViewController<S: TableScreen> {
    screen: S,
    table_view: TableView<S::Property>,
    edit_fields: EditFields,
    message_field: MessageField,
    selected_property: S::Property,
}

impl<S: TableScreen> TableViewController<S> {
    pub fn new(screen: S) -> Self {
        let selected_property = screen.blank_property();
        Self {
            screen,
            table_view: TableView::new(),
            edit_fields: EditFields::new(),
            message_field: MessageField::new(),
            selected_property,
        }
    }

    /// Builds the controller and loads its table, as the view does when the
    /// screen is first shown.
    pub async fn initialize(screen: S) -> Self {
        let mut controller = Self::new(screen);
        controller.refresh().await;
        controller
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn table_view(&self) -> &TableView<S::Property> {
        &self.table_view
    }

    pub fn edit_fields(&self) -> &EditFields {
        &self.edit_fields
    }

    pub fn edit_fields_mut(&mut self) -> &mut EditFields {
        &mut self.edit_fields
    }

    pub fn message_field(&self) -> &MessageField {
        &self.message_field
    }

    pub fn selected_property(&self) -> &S::Property {
        &self.selected_property
    }

    /// Rebuilds the table: columns, row actions and inputs, then rows, then
    /// drops the selection.
    pub async fn refresh(&mut self) {
        self.set_regular_table_columns();
        self.set_additional_content();
        match self.get_all_from_selected_property().await {
            Some(rows) => self.table_view.set_all(rows),
            None => self.table_view.clear(),
        }
        self.clear_selected_property();
    }

    pub fn set_regular_table_columns(&mut self) {
        self.table_view.set_columns(self.screen.regular_table_columns());
    }

    fn set_additional_content(&mut self) {
        self.table_view.set_row_actions(self.screen.row_actions());
        self.edit_fields.set_all_text_fields(self.screen.text_fields());
    }

    /// Reloads every row. An unreachable store or an empty table leaves the
    /// screen usable and shows a warning instead.
    pub async fn get_all_from_selected_property(&mut self) -> Option<Vec<S::Property>> {
        match self.screen.get_all_from_selected_property().await {
            Ok(rows) if rows.is_empty() => {
                self.message_field.show_warning(NO_PROPERTIES_WARNING);
                Some(rows)
            }
            Ok(rows) => Some(rows),
            Err(e) => {
                tracing::error!("Loading rows failed: {}", e);
                self.message_field.show_warning(NO_PROPERTIES_WARNING);
                None
            }
        }
    }

    pub fn clear_selected_property(&mut self) {
        self.selected_property = self.screen.blank_property();
    }

    pub fn show_warning_in_message_field(&mut self, warning: impl Into<String>) {
        self.message_field.show_warning(warning);
    }

    pub fn show_success_in_message_field(&mut self, success: impl Into<String>) {
        self.message_field.show_success(success);
    }
}

impl<S: EditScreen> TableViewController<S> {
    /// The edit button of row `index`: select the row and fill the inputs.
    /// Returns `false` if the row has no edit button.
    pub fn on_edit_button_clicked(&mut self, index: usize) -> bool {
        if self.table_view.action_at(RowActionKind::Edit, index).is_none() {
            return false;
        }
        let Some(row) = self.table_view.get(index).cloned() else {
            return false;
        };
        self.selected_property = row;
        self.load_selected_property_in_edit_field();
        true
    }

    pub fn load_selected_property_in_edit_field(&mut self) {
        self.screen
            .load_property_in_edit_fields(&self.selected_property, &mut self.edit_fields);
    }

    /// The "Edit" action of the screen. If the write fails the selection
    /// goes back to the row as it was loaded.
    pub async fn edit_property(&mut self) -> bool {
        let loaded = self.selected_property.clone();
        if !self.update_selected_property().await {
            return false;
        }
        if !self.update_selected_property_in_db().await {
            self.selected_property = loaded;
            return false;
        }
        let name = self.get_name_of_selected_property();
        self.reset_edit_area();
        self.show_success_in_message_field(format!("{} was edited successfully!", name));
        self.refresh().await;
        true
    }

    /// Applies the inputs to the selection. On rejection the selection is
    /// left untouched and the reason is shown. Nothing is written yet.
    pub async fn update_selected_property(&mut self) -> bool {
        match self
            .screen
            .apply_edit_fields(&self.selected_property, &self.edit_fields)
            .await
        {
            Ok(updated) => {
                self.selected_property = updated;
                true
            }
            Err(AppError::Validation(reason)) => {
                self.show_warning_in_message_field(reason.to_string());
                false
            }
            Err(e) => {
                tracing::error!("Validating inputs failed: {}", e);
                self.show_warning_in_message_field(LOOKUP_FAILED_WARNING);
                false
            }
        }
    }

    pub async fn update_selected_property_in_db(&mut self) -> bool {
        let result = self.screen.update_property_in_db(&self.selected_property).await;
        self.report_storage_result("Updating", result)
    }

    pub fn get_name_of_selected_property(&self) -> String {
        self.screen.name_of(&self.selected_property)
    }

    pub fn reset_edit_area(&mut self) {
        self.edit_fields.reset();
    }

    fn report_storage_result(&mut self, action: &str, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                let name = self.get_name_of_selected_property();
                tracing::error!("{} {} failed: {}", action, name, e);
                self.show_warning_in_message_field(format!(
                    "{} {} failed on database side",
                    action, name
                ));
                false
            }
        }
    }
}

impl<S: CreateDeleteScreen> TableViewController<S> {
    /// The delete button of row `index`: select the row and delete it right
    /// away. Returns `false` if the row has no delete button or the
    /// deletion failed.
    pub async fn on_delete_button_clicked(&mut self, index: usize) -> bool {
        if self.table_view.action_at(RowActionKind::Delete, index).is_none() {
            return false;
        }
        let Some(row) = self.table_view.get(index).cloned() else {
            return false;
        };
        self.selected_property = row;
        self.delete_selected_property().await
    }

    pub async fn delete_selected_property(&mut self) -> bool {
        if !self.delete_selected_property_from_db().await {
            return false;
        }
        let name = self.get_name_of_selected_property();
        self.reset_edit_area();
        self.show_success_in_message_field(format!("{} was deleted successfully!", name));
        self.refresh().await;
        true
    }

    pub async fn delete_selected_property_from_db(&mut self) -> bool {
        let result = self.screen.delete_property_from_db(&self.selected_property).await;
        self.report_storage_result("Deleting", result)
    }

    /// The "Create" action of the screen: the inputs are applied to a fresh
    /// blank instance, which is only stored if they pass validation.
    pub async fn create_new_property(&mut self) -> bool {
        self.clear_selected_property();
        if !self.update_selected_property().await {
            self.clear_selected_property();
            return false;
        }
        if !self.create_new_property_in_db().await {
            self.clear_selected_property();
            return false;
        }
        let name = self.get_name_of_selected_property();
        self.reset_edit_area();
        self.show_success_in_message_field(format!("{} was added successfully!", name));
        self.refresh().await;
        true
    }

    pub async fn create_new_property_in_db(&mut self) -> bool {
        let result = self
            .screen
            .create_new_property_in_db(&self.selected_property)
            .await;
        self.report_storage_result("Creating", result)
    }
}
