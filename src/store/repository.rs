//! Album store - main entry point
//! Delegates to the ops module for actual operations

use sqlx::mysql::MySqlPoolOptions;
use sqlx::{Connection, MySql, Pool};

use crate::config::DbConfig;

use super::error::{StoreError, StoreResult};
use super::models::{Album, NewAlbum};
use super::{ops, schema};

/// Data-access object owning one MySQL connection pool.
#[derive(Debug)]
pub struct AlbumStore {
    pool: Pool<MySql>,
}

impl AlbumStore {
    /// Open a pool against the configured database.
    pub async fn connect(config: &DbConfig) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_with(config.connect_options())
            .await
            .map_err(StoreError::Connection)?;

        Ok(Self { pool })
    }

    /// Verify the connection is reachable.
    pub async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.pool.acquire().await.map_err(StoreError::Connection)?;
        conn.ping().await.map_err(StoreError::Connection)
    }

    /// Release the pool. Consuming `self` keeps the release single-shot.
    pub async fn close(self) {
        self.pool.close().await;
    }

    /// Create the album table if it is missing.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        schema::ensure_schema(&self.pool).await
    }

    pub async fn albums_by_artist(&self, name: &str) -> StoreResult<Vec<Album>> {
        ops::albums_by_artist(&self.pool, name).await
    }

    pub async fn album_by_id(&self, id: i64) -> StoreResult<Album> {
        ops::album_by_id(&self.pool, id).await
    }

    pub async fn add_album(&self, album: NewAlbum) -> StoreResult<i64> {
        ops::add_album(&self.pool, album).await
    }

    pub async fn update_album(&self, album: &Album) -> StoreResult<u64> {
        ops::update_album(&self.pool, album).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests run against a live MySQL and are skipped unless DB_USER
    // is set, the same switch the demo itself is configured with.
    fn live_config() -> Option<DbConfig> {
        if std::env::var(crate::config::ENV_DB_USER).is_err() {
            eprintln!("skipping: DB_USER not set");
            return None;
        }
        Some(DbConfig::from_env())
    }

    async fn live_store() -> Option<AlbumStore> {
        let config = live_config()?;
        let store = AlbumStore::connect(&config).await.expect("connect");
        store.ensure_schema().await.expect("ensure schema");
        Some(store)
    }

    /// Artist names unique per test so reruns do not see earlier rows.
    fn unique_artist(tag: &str) -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();
        format!("{tag} {}-{nanos}", std::process::id())
    }

    fn betty_carter(artist: &str) -> NewAlbum {
        NewAlbum {
            title: "The Modern Sound of Betty Carter".into(),
            artist: artist.into(),
            price: 49.99,
        }
    }

    #[tokio::test]
    async fn test_unknown_artist_yields_empty_vec() {
        let Some(store) = live_store().await else {
            return;
        };
        let albums = store
            .albums_by_artist(&unique_artist("Nobody"))
            .await
            .expect("query");
        assert!(albums.is_empty());
        store.close().await;
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let Some(store) = live_store().await else {
            return;
        };
        let err = store.album_by_id(i64::MAX).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id } if id == i64::MAX));
        store.close().await;
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let Some(store) = live_store().await else {
            return;
        };
        let new = betty_carter(&unique_artist("Betty Carter"));
        let id = store.add_album(new.clone()).await.expect("insert");
        assert!(id > 0);

        let album = store.album_by_id(id).await.expect("lookup");
        assert_eq!(
            album,
            Album {
                id,
                title: new.title,
                artist: new.artist,
                price: new.price,
            }
        );
        store.close().await;
    }

    #[tokio::test]
    async fn test_albums_by_artist_returns_all_matches() {
        let Some(store) = live_store().await else {
            return;
        };
        let artist = unique_artist("John Coltrane");
        for title in ["Blue Train", "Giant Steps"] {
            store
                .add_album(NewAlbum {
                    title: title.into(),
                    artist: artist.clone(),
                    price: 56.99,
                })
                .await
                .expect("insert");
        }

        let albums = store.albums_by_artist(&artist).await.expect("query");
        assert_eq!(albums.len(), 2);
        assert!(albums.iter().all(|a| a.artist == artist));
        store.close().await;
    }

    #[tokio::test]
    async fn test_update_missing_row_affects_nothing() {
        let Some(store) = live_store().await else {
            return;
        };
        let ghost = Album {
            id: i64::MAX,
            title: "Nothing".into(),
            artist: "Nobody".into(),
            price: 1.0,
        };
        let affected = store.update_album(&ghost).await.expect("update");
        assert_eq!(affected, 0);
        store.close().await;
    }

    #[tokio::test]
    async fn test_update_price_visible_on_reread() {
        let Some(store) = live_store().await else {
            return;
        };
        let new = betty_carter(&unique_artist("Betty Carter"));
        let id = store.add_album(new).await.expect("insert");

        let mut album = store.album_by_id(id).await.expect("lookup");
        album.price = 99.98;
        let affected = store.update_album(&album).await.expect("update");
        assert_eq!(affected, 1);

        let reread = store.album_by_id(id).await.expect("re-read");
        assert_eq!(reread.price, 99.98);
        store.close().await;
    }
}
