use std::sync::Arc;

use crate::config::ServerConfig;
use crate::controller::GameController;
use crate::views::JsonViews;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Game controller wired to the catalog store and JSON views.
    pub controller: Arc<GameController<JsonViews>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
