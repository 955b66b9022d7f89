use async_trait::async_trait;

use crate::{
    db::{DbPool, Editable, Listable},
    error::{AppError, Result},
    models::Ingredient,
};

/// Ingredient store for database operations
pub struct IngredientStore {
    pool: DbPool,
}

impl IngredientStore {
    /// Create a new IngredientStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get an ingredient by its name
    pub async fn find_ingredient_by_name(&self, name: &str) -> Result<Option<Ingredient>> {
        let ingredient = sqlx::query_as::<_, Ingredient>(
            "SELECT name, description, unit FROM Ingredient WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(ingredient)
    }
}

#[async_trait]
impl Listable<Ingredient> for IngredientStore {
    async fn get_all_from_property(&self) -> Result<Vec<Ingredient>> {
        let ingredients = sqlx::query_as::<_, Ingredient>(
            "SELECT name, description, unit FROM Ingredient ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(ingredients)
    }
}

#[async_trait]
impl Editable<Ingredient> for IngredientStore {
    async fn update_property_in_db(&self, updated_property: &Ingredient) -> Result<()> {
        let result = sqlx::query("UPDATE Ingredient SET description = ?, unit = ? WHERE name = ?")
            .bind(&updated_property.description)
            .bind(&updated_property.unit)
            .bind(&updated_property.name)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::Database(sqlx::Error::RowNotFound));
        }

        Ok(())
    }
}
