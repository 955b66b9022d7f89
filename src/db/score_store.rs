use async_trait::async_trait;

use crate::{
    db::{DbPool, Editable, Listable},
    error::{AppError, Result},
    models::Score,
};

/// Score store for database operations
///
/// Score rows are created and deleted by the [`UserStore`](crate::db::UserStore)
/// together with their user; this store only reads and updates them.
pub struct ScoreStore {
    pool: DbPool,
}

impl ScoreStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a score by its id
    pub async fn get_score_by_id(&self, id: i64) -> Result<Option<Score>> {
        let score = sqlx::query_as::<_, Score>(
            "SELECT idScore, highscore FROM Score WHERE idScore = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(score)
    }
}

#[async_trait]
impl Listable<Score> for ScoreStore {
    async fn get_all_from_property(&self) -> Result<Vec<Score>> {
        let scores =
            sqlx::query_as::<_, Score>("SELECT idScore, highscore FROM Score ORDER BY idScore")
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(scores)
    }
}

#[async_trait]
impl Editable<Score> for ScoreStore {
    async fn update_property_in_db(&self, updated_property: &Score) -> Result<()> {
        let result = sqlx::query("UPDATE Score SET highscore = ? WHERE idScore = ?")
            .bind(updated_property.highscore)
            .bind(updated_property.id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::Database(sqlx::Error::RowNotFound));
        }

        Ok(())
    }
}
