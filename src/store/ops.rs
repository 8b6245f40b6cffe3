//! Album CRUD operations

use sqlx::{MySql, Pool};

use super::error::{StoreError, StoreResult};
use super::models::{Album, NewAlbum};

/// Query for albums that have the specified artist name.
/// No match is an empty vec, not an error.
pub async fn albums_by_artist(pool: &Pool<MySql>, name: &str) -> StoreResult<Vec<Album>> {
    sqlx::query_as::<_, Album>("SELECT * FROM album WHERE artist = ?")
        .bind(name)
        .fetch_all(pool)
        .await
        .map_err(|err| StoreError::query("albums_by_artist", name, err))
}

/// Query for the album with the given id. Zero rows is `NotFound`; a
/// unique id matching more than one row is a query error.
pub async fn album_by_id(pool: &Pool<MySql>, id: i64) -> StoreResult<Album> {
    let mut rows = sqlx::query_as::<_, Album>("SELECT * FROM album WHERE id = ?")
        .bind(id)
        .fetch_all(pool)
        .await
        .map_err(|err| StoreError::query("album_by_id", id, err))?;

    match rows.len() {
        0 => Err(StoreError::NotFound { id }),
        1 => Ok(rows.remove(0)),
        n => Err(StoreError::query(
            "album_by_id",
            id,
            format!("{n} rows matched a unique id"),
        )),
    }
}

/// Insert a new album, returns the id assigned by the database.
pub async fn add_album(pool: &Pool<MySql>, album: NewAlbum) -> StoreResult<i64> {
    let result = sqlx::query("INSERT INTO album (title, artist, price) VALUES (?, ?, ?)")
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .execute(pool)
        .await
        .map_err(|err| StoreError::write("add_album", err))?;

    let id = result.last_insert_id();
    if id == 0 {
        return Err(StoreError::write("add_album", "no insert id returned"));
    }
    Ok(id as i64)
}

/// Update all mutable fields of the row matching `album.id`, returns the
/// affected-row count. 0 means no such row; the caller must not treat
/// that as success.
pub async fn update_album(pool: &Pool<MySql>, album: &Album) -> StoreResult<u64> {
    let result = sqlx::query("UPDATE album SET title = ?, artist = ?, price = ? WHERE id = ?")
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .bind(album.id)
        .execute(pool)
        .await
        .map_err(|err| StoreError::write("update_album", err))?;

    Ok(result.rows_affected())
}
