use log::{info, trace};
use sqlx::SqlitePool;
use twilight_model::id::marker::GuildMarker;
use twilight_model::id::Id;

use crate::error::DatabaseError;

/// A locally persisted reference to a server the bot has joined. The id is
/// assigned by discord, never generated here.
#[derive(Debug, sqlx::FromRow)]
pub struct ServerRecord {
    pub id: i64,
}

pub async fn get_server(
    pool: &SqlitePool,
    guild_id: Id<GuildMarker>,
) -> Result<Option<ServerRecord>, DatabaseError> {
    let record = sqlx::query_as::<_, ServerRecord>("SELECT id FROM servers WHERE id=$1")
        .bind(guild_id.get() as i64)
        .fetch_optional(pool)
        .await?;

    Ok(record)
}

/// Get-or-create by primary key, existing records are never touched.
/// Returns whether a record was created.
pub async fn ensure_server(pool: &SqlitePool, guild_id: Id<GuildMarker>) -> Result<bool, DatabaseError> {
    if let Some(record) = get_server(pool, guild_id).await? {
        trace!("Server {} is already recorded", record.id);
        return Ok(false);
    }

    info!("No record found for server {}, inserting one", guild_id);
    sqlx::query("INSERT INTO servers (id) VALUES ($1)")
        .bind(guild_id.get() as i64)
        .execute(pool)
        .await?;

    Ok(true)
}

/// Makes sure every given server has a record. Safe to run on every
/// reconnect: lookups are by primary key and creation only happens on
/// absence.
pub async fn reconcile(pool: &SqlitePool, guild_ids: &[Id<GuildMarker>]) -> Result<usize, DatabaseError> {
    let mut created = 0;
    for guild_id in guild_ids {
        if ensure_server(pool, *guild_id).await? {
            created += 1;
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        // One connection, every :memory: connection is its own database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::database::MIGRATOR.run(&pool).await.unwrap();

        pool
    }

    async fn count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM servers")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn reconcile_creates_missing_records() {
        let pool = memory_pool().await;
        let guilds = [Id::new(10), Id::new(20)];

        assert_eq!(reconcile(&pool, &guilds).await.unwrap(), 2);

        assert_eq!(count(&pool).await, 2);
        assert_eq!(get_server(&pool, Id::new(10)).await.unwrap().unwrap().id, 10);
        assert_eq!(get_server(&pool, Id::new(20)).await.unwrap().unwrap().id, 20);
    }

    #[tokio::test]
    async fn reconcile_is_idempotent() {
        let pool = memory_pool().await;
        let guilds = [Id::new(10), Id::new(20)];

        reconcile(&pool, &guilds).await.unwrap();
        assert_eq!(reconcile(&pool, &guilds).await.unwrap(), 0);

        assert_eq!(count(&pool).await, 2);
    }

    #[tokio::test]
    async fn ensure_server_reports_creation() {
        let pool = memory_pool().await;

        assert!(ensure_server(&pool, Id::new(42)).await.unwrap());
        assert!(!ensure_server(&pool, Id::new(42)).await.unwrap());
        assert_eq!(count(&pool).await, 1);
    }

    #[tokio::test]
    async fn unknown_server_is_none() {
        let pool = memory_pool().await;

        assert!(get_server(&pool, Id::new(7)).await.unwrap().is_none());
    }
}
