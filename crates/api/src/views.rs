//! View rendering for the game controller.
//!
//! The controller decides *which* view to show; a [`ViewRenderer`] decides
//! what that view looks like on the wire. [`JsonViews`] is the production
//! renderer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gamecat_core::game::DraftGame;
use gamecat_db::models::game::Game;
use serde::Serialize;

use crate::error::AppError;
use crate::response::DataResponse;

/// Produces output for each view the controller can select.
pub trait ViewRenderer: Send + Sync {
    type Output: Send;

    fn render_list(&self, games: Vec<Game>) -> Self::Output;

    fn render_detail(&self, game: Game) -> Self::Output;

    /// `old` is `None` for a blank form and the submitted draft otherwise.
    fn render_create_form(&self, errors: Vec<String>, old: Option<DraftGame>) -> Self::Output;

    fn render_search_results(&self, query: String, games: Vec<Game>) -> Self::Output;

    fn render_error(&self, error: AppError) -> Self::Output;
}

/// Create form payload: violation messages plus the values to re-display.
#[derive(Debug, Serialize)]
pub struct CreateFormView {
    pub errors: Vec<String>,
    pub old: Option<DraftGame>,
}

/// Search results payload, echoing the query as the user typed it.
#[derive(Debug, Serialize)]
pub struct SearchResultsView {
    pub query: String,
    pub games: Vec<Game>,
}

/// Renders every view as a JSON response.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonViews;

impl ViewRenderer for JsonViews {
    type Output = Response;

    fn render_list(&self, games: Vec<Game>) -> Response {
        Json(DataResponse { data: games }).into_response()
    }

    fn render_detail(&self, game: Game) -> Response {
        Json(DataResponse { data: game }).into_response()
    }

    fn render_create_form(&self, errors: Vec<String>, old: Option<DraftGame>) -> Response {
        let status = if errors.is_empty() {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };

        (
            status,
            Json(DataResponse {
                data: CreateFormView { errors, old },
            }),
        )
            .into_response()
    }

    fn render_search_results(&self, query: String, games: Vec<Game>) -> Response {
        Json(DataResponse {
            data: SearchResultsView { query, games },
        })
        .into_response()
    }

    fn render_error(&self, error: AppError) -> Response {
        error.into_response()
    }
}
