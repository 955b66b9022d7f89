use async_trait::async_trait;

use crate::{
    db::{DbPool, Editable, Listable},
    error::{AppError, Result},
    models::Machine,
};

/// Machine store for database operations
pub struct MachineStore {
    pool: DbPool,
}

impl MachineStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_machine_by_id(&self, id: i64) -> Result<Option<Machine>> {
        let machine = sqlx::query_as::<_, Machine>(
            "SELECT idMachine, name, decription FROM Machine WHERE idMachine = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(machine)
    }
}

#[async_trait]
impl Listable<Machine> for MachineStore {
    async fn get_all_from_property(&self) -> Result<Vec<Machine>> {
        let machines = sqlx::query_as::<_, Machine>(
            "SELECT idMachine, name, decription FROM Machine ORDER BY idMachine",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(machines)
    }
}

#[async_trait]
impl Editable<Machine> for MachineStore {
    async fn update_property_in_db(&self, updated_property: &Machine) -> Result<()> {
        let result = sqlx::query("UPDATE Machine SET decription = ? WHERE idMachine = ?")
            .bind(&updated_property.description)
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
