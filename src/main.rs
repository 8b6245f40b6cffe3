//! Tutorial-style demonstration of relational database access with sqlx:
//! get a pooled MySQL handle, ping it, query for multiple rows, query for
//! a single row, add data, update data.
//!
//! Credentials come from the environment:
//! `DB_USER=root DB_PASSWORD=12345678 cargo run`

mod config;
mod store;

use anyhow::Result;
use tracing::{error, info};

use config::DbConfig;
use store::{Album, AlbumStore, NewAlbum};

#[tokio::main]
async fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        error!("fatal: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = DbConfig::from_env();
    info!(dsn = %cfg.display_dsn(), "connecting to database");

    let store = AlbumStore::connect(&cfg).await?;

    // The pool is released on every exit path, success or failure.
    let outcome = run_session(&store).await;
    store.close().await;
    info!("closed");
    outcome
}

async fn run_session(store: &AlbumStore) -> Result<()> {
    store.ping().await?;
    info!("connected");

    store.ensure_schema().await?;

    let albums = store.albums_by_artist("John Coltrane").await?;
    info!(count = albums.len(), "albums found: {albums:?}");

    let id = store
        .add_album(NewAlbum {
            title: "The Modern Sound of Betty Carter".into(),
            artist: "Betty Carter".into(),
            price: 49.99,
        })
        .await?;
    info!(id, "album added");

    let album = store.album_by_id(id).await?;
    info!("album found: {album:?}");

    let affected = store
        .update_album(&Album {
            price: 99.98,
            ..album
        })
        .await?;
    info!(affected, "album price updated");

    Ok(())
}
