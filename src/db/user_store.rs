use async_trait::async_trait;

use crate::{
    db::{Creatable, DbPool, Deletable, Editable, Listable},
    error::{AppError, Result},
    models::User,
};

/// Users joined with the highscore of their Score row.
const SELECT_USERS: &str = r#"
    SELECT u.idUser, u.name, u.mail, u.password, u.Score_idScore,
           COALESCE(s.highscore, 0) AS highscore
    FROM User u
    LEFT JOIN Score s ON s.idScore = u.Score_idScore
"#;

/// User store for database operations
pub struct UserStore {
    pool: DbPool,
}

impl UserStore {
    /// Create a new UserStore with the provided database pool
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a user by username
    pub async fn find_user_by_name(&self, name: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{SELECT_USERS} WHERE u.name = ?"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(user)
    }

    /// Get a user by ID
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{SELECT_USERS} WHERE u.idUser = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(user)
    }
}

#[async_trait]
impl Listable<User> for UserStore {
    /// Get a list of all users
    async fn get_all_from_property(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!("{SELECT_USERS} ORDER BY u.idUser"))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(users)
    }
}

#[async_trait]
impl Editable<User> for UserStore {
    async fn update_property_in_db(&self, updated_property: &User) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE User
            SET name = ?, password = ?, mail = ?
            WHERE idUser = ?
            "#,
        )
        .bind(&updated_property.username)
        .bind(&updated_property.password)
        .bind(&updated_property.mail)
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

#[async_trait]
impl Creatable<User> for UserStore {
    /// Inserts the user's Score row and then the user referencing it, in one
    /// transaction.
    async fn create_new_property_in_db(&self, new_property: &User) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let score_id = sqlx::query("INSERT INTO Score (highscore) VALUES (0)")
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?
            .last_insert_rowid();

        sqlx::query(
            r#"
            INSERT INTO User (name, password, mail, Score_idScore)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new_property.username)
        .bind(&new_property.password)
        .bind(&new_property.mail)
        .bind(score_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::debug!(
            "Created user {} with score row {}",
            new_property.username,
            score_id
        );
        Ok(())
    }
}

#[async_trait]
impl Deletable<User> for UserStore {
    /// Deletes the user and its Score row in one transaction.
    async fn delete_property_from_db(&self, property_to_delete: &User) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let score_id: Option<(i64,)> =
            sqlx::query_as("SELECT Score_idScore FROM User WHERE idUser = ?")
                .bind(property_to_delete.id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::Database)?;

        let Some((score_id,)) = score_id else {
            // Nothing stored under this id; dropping the transaction rolls back.
            return Err(AppError::Database(sqlx::Error::RowNotFound));
        };

        // The user row references the score, so it goes first.
        sqlx::query("DELETE FROM User WHERE idUser = ?")
            .bind(property_to_delete.id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM Score WHERE idScore = ?")
            .bind(score_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(())
    }
}
