//! Repository for the `games` table.

use gamecat_core::game::NewGame;
use gamecat_core::search::SearchMode;
use gamecat_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::Game;

/// Column list for the `games` table.
const COLUMNS: &str = "id, title, platform, category_id, description, price, stock, \
    available, created_at, updated_at";

/// Ordering shared by listing and search.
const ORDER_BY: &str = "ORDER BY title, id";

/// Provides create and read queries for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game and return its store-assigned ID.
    pub async fn create(pool: &PgPool, input: &NewGame) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO games \
                (title, platform, category_id, description, price, stock, available) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.platform)
        .bind(input.category_id)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.available)
        .fetch_one(pool)
        .await
    }

    /// Find a game by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every game.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games {ORDER_BY}");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }

    /// Search by whitespace-separated keywords.
    ///
    /// Each keyword matches case-insensitively anywhere in the title,
    /// platform or description. Keyword predicates are combined with `mode`.
    /// A term string with no keywords matches every game.
    pub async fn search(
        pool: &PgPool,
        terms: &str,
        mode: SearchMode,
    ) -> Result<Vec<Game>, sqlx::Error> {
        let keywords: Vec<&str> = terms.split_whitespace().collect();
        if keywords.is_empty() {
            return Self::list(pool).await;
        }

        let query = format!(
            "SELECT {COLUMNS} FROM games WHERE {} {ORDER_BY}",
            search_clause(keywords.len(), mode)
        );
        let mut q = sqlx::query_as::<_, Game>(&query);
        for keyword in &keywords {
            q = q.bind(like_pattern(keyword));
        }
        q.fetch_all(pool).await
    }
}

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Build the WHERE clause for `count` keyword parameters (`$1..$count`).
fn search_clause(count: usize, mode: SearchMode) -> String {
    let separator = format!(" {} ", mode.as_sql());
    (1..=count)
        .map(|n| {
            format!(
                "(title ILIKE ${n} ESCAPE '\\' \
                 OR platform ILIKE ${n} ESCAPE '\\' \
                 OR description ILIKE ${n} ESCAPE '\\')"
            )
        })
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Wrap a keyword for substring matching, escaping LIKE wildcards.
fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
