//! The catalog store seam.
//!
//! The controller only talks to [`CatalogStore`]; [`PgCatalogStore`] is the
//! production implementation on top of [`GameRepo`]. Failures are a distinct
//! outcome from empty results: `Ok(vec![])` means "no games", `Err` means
//! the store could not answer.

use async_trait::async_trait;
use gamecat_core::game::NewGame;
use gamecat_core::search::SearchMode;
use gamecat_core::types::DbId;

use crate::models::game::Game;
use crate::repositories::GameRepo;
use crate::DbPool;

/// Failure raised by a catalog store.
///
/// Never shown to end users; callers log it and render a fixed message.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Create and read access to the game catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_games(&self) -> Result<Vec<Game>, StoreError>;

    async fn get_game(&self, id: DbId) -> Result<Option<Game>, StoreError>;

    /// Insert a validated game, returning its new ID.
    async fn create_game(&self, input: &NewGame) -> Result<DbId, StoreError>;

    async fn search_games(&self, terms: &str, mode: SearchMode)
        -> Result<Vec<Game>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}

/// [`CatalogStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        Ok(GameRepo::list(&self.pool).await?)
    }

    async fn get_game(&self, id: DbId) -> Result<Option<Game>, StoreError> {
        Ok(GameRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create_game(&self, input: &NewGame) -> Result<DbId, StoreError> {
        let id = GameRepo::create(&self.pool, input).await?;
        tracing::info!(game_id = id, title = %input.title, "Game created");
        Ok(id)
    }

    async fn search_games(
        &self,
        terms: &str,
        mode: SearchMode,
    ) -> Result<Vec<Game>, StoreError> {
        let games = GameRepo::search(&self.pool, terms, mode).await?;
        tracing::debug!(terms, %mode, results = games.len(), "Game search executed");
        Ok(games)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
