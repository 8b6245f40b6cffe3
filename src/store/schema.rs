//! Schema setup for the album table

use sqlx::{MySql, Pool};

use super::error::{StoreError, StoreResult};

/// Create the album table if it does not exist yet.
pub async fn ensure_schema(pool: &Pool<MySql>) -> StoreResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS album (
            id     BIGINT NOT NULL AUTO_INCREMENT,
            title  VARCHAR(128) NOT NULL,
            artist VARCHAR(255) NOT NULL,
            price  DOUBLE NOT NULL,
            PRIMARY KEY (id),
            INDEX idx_album_artist (artist)
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|err| StoreError::write("ensure_schema", err))?;

    Ok(())
}
