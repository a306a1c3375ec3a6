use async_trait::async_trait;
use deadpool_postgres::Pool;

use crate::store::{
    entity::{Entity, TABLE_NAME},
    error::Result,
    EntityStore,
};

/// PostgreSQL-backed entity store
///
/// The pool is created once during startup and handed in; the store never
/// opens connections lazily on its own.
#[derive(Clone)]
pub struct PgEntityStore {
    pool: Pool,
}

impl PgEntityStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create the entity table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<()> {
        let conn = self.pool.get().await?;

        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (id SERIAL PRIMARY KEY, value VARCHAR NOT NULL)",
            TABLE_NAME
        );
        conn.batch_execute(&sql).await?;

        tracing::debug!(table = TABLE_NAME, "Entity schema ready");
        Ok(())
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    async fn create(&self, value: &str) -> Result<bool> {
        let conn = self.pool.get().await?;

        let sql = format!("INSERT INTO {} (value) VALUES ($1) RETURNING id", TABLE_NAME);
        let row = conn.query_opt(&sql, &[&value]).await?;

        Ok(row.is_some())
    }

    async fn read(&self, id: i32) -> Result<Option<Entity>> {
        let conn = self.pool.get().await?;

        let sql = format!("SELECT id, value FROM {} WHERE id = $1", TABLE_NAME);
        let row = conn.query_opt(&sql, &[&id]).await?;

        Ok(row.as_ref().map(Entity::from))
    }

    async fn update(&self, id: i32, value: &str) -> Result<bool> {
        let conn = self.pool.get().await?;

        // An unknown id matches no row, so nothing comes back
        let sql = format!(
            "UPDATE {} SET value = $2 WHERE id = $1 RETURNING id",
            TABLE_NAME
        );
        let row = conn.query_opt(&sql, &[&id, &value]).await?;

        Ok(row.is_some())
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let conn = self.pool.get().await?;

        let sql = format!("DELETE FROM {} WHERE id = $1", TABLE_NAME);
        let affected = conn.execute(&sql, &[&id]).await?;

        Ok(affected > 0)
    }
}
