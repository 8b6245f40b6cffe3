//! Row models for the album table

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One record of the album table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Album {
    /// Unique identifier (auto-increment, assigned by the database)
    pub id: i64,
    /// Album title
    pub title: String,
    /// Artist name, the lookup key for multi-row queries
    pub artist: String,
    /// Price
    pub price: f64,
}

/// Input for adding an album; the id is assigned by the database.
#[derive(Debug, Clone)]
pub struct NewAlbum {
    pub title: String,
    pub artist: String,
    pub price: f64,
}
