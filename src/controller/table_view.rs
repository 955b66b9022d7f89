use serde::Serialize;
use serde_json::Value;

/// A table column bound to one serialized property of the row type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub property: &'static str,
}

impl Column {
    pub const fn new(title: &'static str, property: &'static str) -> Self {
        Self { title, property }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowActionKind {
    Edit,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Center,
}

/// A button rendered in every filled row of an action column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub kind: RowActionKind,
    pub label: &'static str,
    pub style_class: &'static str,
    /// Fixed button width in pixels; `None` sizes the button to its label.
    pub width: Option<u16>,
    pub alignment: Alignment,
}

impl RowAction {
    pub fn edit() -> Self {
        Self {
            kind: RowActionKind::Edit,
            label: "Edit",
            style_class: "editButton",
            width: None,
            alignment: Alignment::Center,
        }
    }

    pub fn delete() -> Self {
        Self {
            kind: RowActionKind::Delete,
            label: "X",
            style_class: "deleteButton",
            width: Some(25),
            alignment: Alignment::Center,
        }
    }

    /// Empty cells carry no button.
    pub fn is_enabled_for<T>(&self, row: Option<&T>) -> bool {
        row.is_some()
    }
}

/// Rows plus the columns and row actions they are rendered with.
#[derive(Debug, Clone)]
pub struct TableView<T> {
    columns: Vec<Column>,
    row_actions: Vec<RowAction>,
    items: Vec<T>,
}

impl<T> Default for TableView<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            row_actions: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl<T: Serialize> TableView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    pub fn set_row_actions(&mut self, row_actions: Vec<RowAction>) {
        self.row_actions = row_actions;
    }

    pub fn set_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn row_actions(&self) -> &[RowAction] {
        &self.row_actions
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The action of `kind` for row `index`, if that row shows one.
    pub fn action_at(&self, kind: RowActionKind, index: usize) -> Option<&RowAction> {
        self.row_actions
            .iter()
            .find(|action| action.kind == kind)
            .filter(|action| action.is_enabled_for(self.get(index)))
    }

    /// Text of every bound cell, one `Vec` per row, followed by the labels of
    /// the row actions.
    pub fn render(&self) -> Vec<Vec<String>> {
        self.items
            .iter()
            .map(|item| {
                let value = serde_json::to_value(item).unwrap_or(Value::Null);
                let mut cells: Vec<String> = self
                    .columns
                    .iter()
                    .map(|column| cell_text(value.get(column.property)))
                    .collect();
                cells.extend(self.row_actions.iter().map(|a| a.label.to_string()));
                cells
            })
            .collect()
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
