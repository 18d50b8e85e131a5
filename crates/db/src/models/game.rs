//! Row model for the `games` table.

use gamecat_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A persisted game.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub platform: String,
    pub category_id: DbId,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
