use async_trait::async_trait;

use crate::{
    db::{DbPool, Editable, Listable},
    error::{AppError, Result},
    models::SettingsProfile,
};

const SELECT_PROFILES: &str =
    "SELECT name, inDarkMode, font_size, font_family FROM Setting_Profiles_Authoringtool";

/// Store for the display settings profiles
pub struct SettingsProfileStore {
    pool: DbPool,
}

impl SettingsProfileStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The profile currently applied to the tool.
    pub async fn get_current_settings(&self) -> Result<Option<SettingsProfile>> {
        self.get_profile_by_name(SettingsProfile::CURRENT).await
    }

    /// The template every profile can be reset to.
    pub async fn get_default_settings(&self) -> Result<Option<SettingsProfile>> {
        self.get_profile_by_name(SettingsProfile::DEFAULT).await
    }

    pub async fn get_profile_by_name(&self, name: &str) -> Result<Option<SettingsProfile>> {
        let profile =
            sqlx::query_as::<_, SettingsProfile>(&format!("{SELECT_PROFILES} WHERE name = ?"))
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(profile)
    }
}

#[async_trait]
impl Listable<SettingsProfile> for SettingsProfileStore {
    async fn get_all_from_property(&self) -> Result<Vec<SettingsProfile>> {
        let profiles =
            sqlx::query_as::<_, SettingsProfile>(&format!("{SELECT_PROFILES} ORDER BY name"))
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(profiles)
    }
}

#[async_trait]
impl Editable<SettingsProfile> for SettingsProfileStore {
    async fn update_property_in_db(&self, updated_property: &SettingsProfile) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE Setting_Profiles_Authoringtool
            SET inDarkMode = ?, font_size = ?, font_family = ?
            WHERE name = ?
            "#,
        )
        .bind(updated_property.in_dark_mode)
        .bind(updated_property.font_size)
        .bind(updated_property.font_family)
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
