//! Album store module for MySQL-backed persistence
//! Wraps a sqlx connection pool behind a small data-access object

mod error;
mod models;
mod ops;
mod repository;
mod schema;

pub use error::{StoreError, StoreResult};
pub use models::{Album, NewAlbum};
pub use repository::AlbumStore;
