//! Capability traits implemented by the entity stores.
//!
//! Each store translates one entity to and from the rows of one table. A
//! store implements only the capabilities its screen offers: every store can
//! list, most can edit, and only recipes and users can be created or deleted.

use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait Listable<T>: Send + Sync {
    /// Load every row of the backing table, fully materialized.
    async fn get_all_from_property(&self) -> Result<Vec<T>>;
}

#[async_trait]
pub trait Editable<T>: Listable<T> {
    /// Write the edited fields back to the row identified by the entity's key.
    async fn update_property_in_db(&self, updated_property: &T) -> Result<()>;
}

#[async_trait]
pub trait Creatable<T>: Send + Sync {
    async fn create_new_property_in_db(&self, new_property: &T) -> Result<()>;
}

#[async_trait]
pub trait Deletable<T>: Send + Sync {
    async fn delete_property_from_db(&self, property_to_delete: &T) -> Result<()>;
}
