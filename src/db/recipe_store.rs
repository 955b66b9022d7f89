use async_trait::async_trait;

use crate::{
    db::{Creatable, DbPool, Deletable, Editable, Listable, tables::RecipeTable},
    error::{AppError, Result},
    models::Recipe,
};

const SELECT_RECIPES: &str =
    "SELECT name, brewtime, amount_beans, amount_added_milk, water_pressure, image FROM Recipe";

/// Recipe store for database operations
pub struct RecipeStore {
    pool: DbPool,
}

impl RecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a recipe by its name
    pub async fn find_recipe_by_name(&self, name: &str) -> Result<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>(&format!("{SELECT_RECIPES} WHERE name = ?"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(recipe)
    }
}

#[async_trait]
impl Listable<Recipe> for RecipeStore {
    async fn get_all_from_property(&self) -> Result<Vec<Recipe>> {
        let recipes = sqlx::query_as::<_, Recipe>(&format!("{SELECT_RECIPES} ORDER BY idRecipe"))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(recipes)
    }
}

#[async_trait]
impl Editable<Recipe> for RecipeStore {
    /// Updates the row stored under the recipe's former name, which also
    /// renames it.
    async fn update_property_in_db(&self, updated_property: &Recipe) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE Recipe
            SET name = ?, brewtime = ?, amount_beans = ?, amount_added_water = 0,
                amount_added_milk = ?, water_pressure = ?, image = ?
            WHERE name = ?
            "#,
        )
        .bind(&updated_property.name)
        .bind(updated_property.brewtime)
        .bind(updated_property.amount_of_beans)
        .bind(updated_property.amount_of_milk)
        .bind(updated_property.water_pressure)
        .bind(&updated_property.image_url)
        .bind(updated_property.stored_name())
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::Database(sqlx::Error::RowNotFound));
        }

        Ok(())
    }
}

#[async_trait]
impl Creatable<Recipe> for RecipeStore {
    async fn create_new_property_in_db(&self, new_property: &Recipe) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO Recipe (name, brewtime, amount_beans, amount_added_water,
                amount_added_milk, water_pressure, filling_capacity, water_temperature,
                Spoon_idspoon, Cup_idcup, image)
            VALUES (?, ?, ?, 0, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_property.name)
        .bind(new_property.brewtime)
        .bind(new_property.amount_of_beans)
        .bind(new_property.amount_of_milk)
        .bind(new_property.water_pressure)
        .bind(RecipeTable::DEFAULT_FILLING_CAPACITY)
        .bind(RecipeTable::DEFAULT_WATER_TEMPERATURE)
        .bind(RecipeTable::DEFAULT_SPOON_ID)
        .bind(RecipeTable::DEFAULT_CUP_ID)
        .bind(&new_property.image_url)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(())
    }
}

#[async_trait]
impl Deletable<Recipe> for RecipeStore {
    async fn delete_property_from_db(&self, property_to_delete: &Recipe) -> Result<()> {
        let result = sqlx::query("DELETE FROM Recipe WHERE name = ?")
            .bind(property_to_delete.stored_name())
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::Database(sqlx::Error::RowNotFound));
        }

        Ok(())
    }
}
