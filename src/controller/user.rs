use async_trait::async_trait;

use crate::{
    controller::{
        edit_fields::EditFields,
        table_view::{Column, RowAction},
        table_view_controller::{CreateDeleteScreen, EditScreen, TableScreen, TableViewController},
    },
    db::{Creatable, Deletable, Editable, Listable, UserStore},
    error::Result,
    models::User,
    validation::ValidationError,
};

pub type UserController = TableViewController<UserScreen>;

pub struct UserScreen {
    store: UserStore,
}

impl UserScreen {
    pub const ID_FIELD: &'static str = "id";
    pub const USERNAME_FIELD: &'static str = "username";
    pub const MAIL_FIELD: &'static str = "mail";
    pub const PASSWORD_FIELD: &'static str = "password";

    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    async fn is_name_unique(&self, name: &str) -> Result<bool> {
        Ok(self.store.find_user_by_name(name).await?.is_none())
    }
}

#[async_trait]
impl TableScreen for UserScreen {
    type Property = User;

    fn regular_table_columns(&self) -> Vec<Column> {
        vec![
            Column::new("ID", "id"),
            Column::new("Username", "username"),
            Column::new("Mail", "mail"),
            Column::new("Password", "password"),
            Column::new("Highscore", "highscore"),
        ]
    }

    fn row_actions(&self) -> Vec<RowAction> {
        vec![RowAction::edit(), RowAction::delete()]
    }

    fn text_fields(&self) -> &'static [&'static str] {
        &[
            Self::ID_FIELD,
            Self::USERNAME_FIELD,
            Self::MAIL_FIELD,
            Self::PASSWORD_FIELD,
        ]
    }

    fn blank_property(&self) -> User {
        User::blank()
    }

    async fn get_all_from_selected_property(&self) -> Result<Vec<User>> {
        self.store.get_all_from_property().await
    }
}

#[async_trait]
impl EditScreen for UserScreen {
    fn name_of(&self, property: &User) -> String {
        property.username.clone()
    }

    fn load_property_in_edit_fields(&self, property: &User, fields: &mut EditFields) {
        fields.set_text(Self::ID_FIELD, property.id.to_string());
        fields.set_text(Self::USERNAME_FIELD, property.username.as_str());
        fields.set_text(Self::MAIL_FIELD, property.mail.as_str());
        fields.set_text(Self::PASSWORD_FIELD, property.password.as_str());
    }

    async fn apply_edit_fields(&self, selected: &User, fields: &EditFields) -> Result<User> {
        let new_username = fields.text(Self::USERNAME_FIELD);
        let new_mail = fields.text(Self::MAIL_FIELD);
        let new_password = fields.text(Self::PASSWORD_FIELD);

        if new_username.is_empty() || new_mail.is_empty() || new_password.is_empty() {
            return Err(ValidationError::EmptyEditableFields.into());
        }
        if new_username != selected.username && !self.is_name_unique(new_username).await? {
            return Err(ValidationError::UsernameTaken(new_username.to_string()).into());
        }

        Ok(User {
            username: new_username.to_string(),
            mail: new_mail.to_string(),
            password: new_password.to_string(),
            ..selected.clone()
        })
    }

    async fn update_property_in_db(&self, property: &User) -> Result<()> {
        self.store.update_property_in_db(property).await
    }
}

#[async_trait]
impl CreateDeleteScreen for UserScreen {
    async fn create_new_property_in_db(&self, property: &User) -> Result<()> {
        self.store.create_new_property_in_db(property).await
    }

    async fn delete_property_from_db(&self, property: &User) -> Result<()> {
        self.store.delete_property_from_db(property).await
    }
}
