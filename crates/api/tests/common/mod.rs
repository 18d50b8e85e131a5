//! Shared fixtures for the API integration tests.
//!
//! Tests run against an in-memory [`MemoryStore`] so they need no database.
//! `build_test_app` goes through the same `build_app_router` as `main.rs`.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use gamecat_api::config::ServerConfig;
use gamecat_api::controller::GameController;
use gamecat_api::error::AppError;
use gamecat_api::router::build_app_router;
use gamecat_api::state::AppState;
use gamecat_api::views::{JsonViews, ViewRenderer};
use gamecat_core::game::{DraftGame, NewGame};
use gamecat_core::search::SearchMode;
use gamecat_core::types::DbId;
use gamecat_db::models::game::Game;
use gamecat_db::store::{CatalogStore, StoreError};

// ---------------------------------------------------------------------------
// In-memory catalog store
// ---------------------------------------------------------------------------

/// A store call as observed by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List,
    Get(DbId),
    Create(NewGame),
    Search(String, SearchMode),
}

/// In-memory [`CatalogStore`] that records every call.
///
/// With `failing` set, every operation returns [`StoreError::Unavailable`].
#[derive(Default)]
pub struct MemoryStore {
    games: Mutex<Vec<Game>>,
    calls: Mutex<Vec<StoreCall>>,
    failing: bool,
    next_id: Mutex<DbId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    /// Make the next created game receive `id`.
    pub fn with_next_id(self, id: DbId) -> Self {
        *self.next_id.lock().unwrap() = id;
        self
    }

    pub fn with_games(self, games: Vec<Game>) -> Self {
        *self.games.lock().unwrap() = games;
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            Err(StoreError::Unavailable("memory store set to fail".into()))
        } else {
            Ok(())
        }
    }
}

fn matches_keyword(game: &Game, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    [&game.title, &game.platform, &game.description]
        .iter()
        .any(|field| field.to_lowercase().contains(&keyword))
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_games(&self) -> Result<Vec<Game>, StoreError> {
        self.record(StoreCall::List)?;
        Ok(self.games.lock().unwrap().clone())
    }

    async fn get_game(&self, id: DbId) -> Result<Option<Game>, StoreError> {
        self.record(StoreCall::Get(id))?;
        Ok(self.games.lock().unwrap().iter().find(|g| g.id == id).cloned())
    }

    async fn create_game(&self, input: &NewGame) -> Result<DbId, StoreError> {
        self.record(StoreCall::Create(input.clone()))?;

        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let now = chrono::Utc::now();
        self.games.lock().unwrap().push(Game {
            id,
            title: input.title.clone(),
            platform: input.platform.clone(),
            category_id: input.category_id,
            description: input.description.clone(),
            price: input.price,
            stock: input.stock,
            available: input.available,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    async fn search_games(
        &self,
        terms: &str,
        mode: SearchMode,
    ) -> Result<Vec<Game>, StoreError> {
        self.record(StoreCall::Search(terms.to_string(), mode))?;

        let keywords: Vec<&str> = terms.split_whitespace().collect();
        let games = self.games.lock().unwrap();
        Ok(games
            .iter()
            .filter(|game| match mode {
                _ if keywords.is_empty() => true,
                SearchMode::And => keywords.iter().all(|k| matches_keyword(game, k)),
                SearchMode::Or => keywords.iter().any(|k| matches_keyword(game, k)),
            })
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        if self.failing {
            Err(StoreError::Unavailable("memory store set to fail".into()))
        } else {
            Ok(())
        }
    }
}

/// Build a persisted-looking game.
pub fn game(id: DbId, title: &str, platform: &str, description: &str) -> Game {
    let now = chrono::Utc::now();
    Game {
        id,
        title: title.to_string(),
        platform: platform.to_string(),
        category_id: 1,
        description: description.to_string(),
        price: 9.99,
        stock: 5,
        available: true,
        created_at: now,
        updated_at: now,
    }
}

/// A small catalog used across tests.
pub fn sample_games() -> Vec<Game> {
    vec![
        game(1, "Chrono Trigger", "SNES", "Time travel RPG"),
        game(2, "Super Mario World", "SNES", "Platformer"),
        game(3, "The Legend of Zelda", "NES", "Adventure"),
        game(4, "Sonic the Hedgehog", "Genesis", "Fast platformer"),
    ]
}

// ---------------------------------------------------------------------------
// Recording view renderer
// ---------------------------------------------------------------------------

/// What [`RecordingViews`] was asked to render.
#[derive(Debug)]
pub enum View {
    List(Vec<Game>),
    Detail(Game),
    CreateForm {
        errors: Vec<String>,
        old: Option<DraftGame>,
    },
    SearchResults {
        query: String,
        games: Vec<Game>,
    },
    Error(AppError),
}

/// Renderer whose output is the view selection itself.
pub struct RecordingViews;

impl ViewRenderer for RecordingViews {
    type Output = View;

    fn render_list(&self, games: Vec<Game>) -> View {
        View::List(games)
    }

    fn render_detail(&self, game: Game) -> View {
        View::Detail(game)
    }

    fn render_create_form(&self, errors: Vec<String>, old: Option<DraftGame>) -> View {
        View::CreateForm { errors, old }
    }

    fn render_search_results(&self, query: String, games: Vec<Game>) -> View {
        View::SearchResults { query, games }
    }

    fn render_error(&self, error: AppError) -> View {
        View::Error(error)
    }
}

/// Controller over `store` that records view selections.
pub fn recording_controller(store: Arc<MemoryStore>) -> GameController<RecordingViews> {
    GameController::new(store, RecordingViews)
}

// ---------------------------------------------------------------------------
// HTTP app helpers
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        base_url: "/".to_string(),
    }
}

/// Build the full application router over `store`.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        controller: Arc::new(GameController::new(store, JsonViews)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri).await
}

/// Send a bodiless request with any method.
pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
