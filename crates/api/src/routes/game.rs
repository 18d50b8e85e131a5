//! Route definitions for the game catalog.
//!
//! Mounted at `/game`. Operations answer any method, matching the by-name
//! dispatch routes; only `create` tells a POST apart.

use axum::routing::{any, post};
use axum::Router;

use crate::handlers::game;
use crate::state::AppState;

/// Game routes mounted at `/game`.
///
/// ```text
/// ANY    /                      -> index
/// ANY    /index                 -> index
/// ANY    /detail/{id}           -> detail
/// POST   /create                -> create_submit
/// other  /create                -> create_form
/// ANY    /search                -> search (?query-terms=)
/// ANY    /error                 -> error (?message=)
/// ANY    /{op}                  -> dispatch by name
/// ANY    /{op}/{*param}         -> dispatch by name with a parameter
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(game::index))
        .route("/index", any(game::index))
        .route("/detail/{id}", any(game::detail))
        .route(
            "/create",
            post(game::create_submit).fallback(game::create_form),
        )
        .route("/search", any(game::search))
        .route("/error", any(game::error))
        .route("/{op}", any(game::dispatch))
        .route("/{op}/{*param}", any(game::dispatch_with_param))
}
