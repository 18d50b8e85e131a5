//! The game controller: turns a request into a store call and a view.
//!
//! Every operation ends in a rendered view or a redirect. Store failures,
//! lookup misses and unknown operations all become the error view; invalid
//! create submissions re-render the form with every violation listed.

use std::sync::Arc;

use gamecat_core::coerce::coerce_int;
use gamecat_core::game::{DraftGame, GameSubmission, MSG_INSERT_FAILED};
use gamecat_core::operation::Operation;
use gamecat_core::search::SearchQuery;
use gamecat_core::types::DbId;
use gamecat_db::store::CatalogStore;

use crate::error::AppError;
use crate::views::ViewRenderer;

pub const MSG_LIST_FAILED: &str = "There was a problem displaying games.";
pub const MSG_SEARCH_FAILED: &str = "An error has occurred while searching games.";

/// Result of a controller operation.
#[derive(Debug)]
pub enum Outcome<T> {
    /// A view was rendered.
    Rendered(T),
    /// Processing stopped; send the client to the detail view of this game.
    Redirect(DbId),
}

/// Inputs for [`GameController::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct GameRequest {
    /// Path parameter following the operation name (the id for `detail`).
    pub param: Option<String>,
    /// Posted create form. `Some` marks a submitting request.
    pub submission: Option<GameSubmission>,
    /// `query-terms` for `search`.
    pub query_terms: Option<String>,
    /// `message` for `error`.
    pub message: Option<String>,
}

/// Request handler over an injected catalog store and view renderer.
pub struct GameController<V> {
    store: Arc<dyn CatalogStore>,
    views: V,
}

impl<V: ViewRenderer> GameController<V> {
    pub fn new(store: Arc<dyn CatalogStore>, views: V) -> Self {
        Self { store, views }
    }

    pub fn store(&self) -> &Arc<dyn CatalogStore> {
        &self.store
    }

    /// Run any operation by its resolved name.
    pub async fn dispatch(&self, operation: Operation, request: GameRequest) -> Outcome<V::Output> {
        match operation {
            Operation::Index => self.index().await,
            Operation::Detail => self.detail(request.param.as_deref().unwrap_or("")).await,
            Operation::Create => self.create(request.submission.as_ref()).await,
            Operation::Search => self.search(request.query_terms.as_deref()).await,
            Operation::Error => self.error(request.message.unwrap_or_default()),
            Operation::Unknown(name) => {
                tracing::warn!(operation = %name, "Unknown game operation requested");
                self.fail(AppError::UnknownOperation(name))
            }
        }
    }

    /// List every game.
    pub async fn index(&self) -> Outcome<V::Output> {
        match self.store.list_games().await {
            Ok(games) => {
                tracing::debug!(count = games.len(), "Listing games");
                Outcome::Rendered(self.views.render_list(games))
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to list games");
                self.fail(AppError::StoreFailure(MSG_LIST_FAILED))
            }
        }
    }

    /// Show one game. `raw_id` is coerced leniently; non-numeric text is `0`.
    pub async fn detail(&self, raw_id: &str) -> Outcome<V::Output> {
        let id = coerce_int(raw_id);

        match self.store.get_game(id).await {
            Ok(Some(game)) => Outcome::Rendered(self.views.render_detail(game)),
            Ok(None) => {
                tracing::debug!(raw_id, id, "Game not found");
                self.fail(AppError::NotFound(raw_id.to_string()))
            }
            Err(err) => {
                tracing::error!(error = %err, id, "Failed to load game");
                self.fail(AppError::NotFound(raw_id.to_string()))
            }
        }
    }

    /// Show the blank create form, or validate and insert a submission.
    pub async fn create(&self, submission: Option<&GameSubmission>) -> Outcome<V::Output> {
        let Some(submission) = submission else {
            return Outcome::Rendered(self.views.render_create_form(Vec::new(), None));
        };

        let draft = DraftGame::from(submission);
        let new_game = match draft.validate() {
            Ok(new_game) => new_game,
            Err(err) => {
                tracing::debug!(violations = err.messages().len(), "Game submission rejected");
                return Outcome::Rendered(
                    self.views.render_create_form(err.into_messages(), Some(draft)),
                );
            }
        };

        match self.store.create_game(&new_game).await {
            Ok(id) => Outcome::Redirect(id),
            Err(err) => {
                tracing::error!(error = %err, title = %new_game.title, "Failed to insert game");
                let errors = vec![MSG_INSERT_FAILED.to_string()];
                Outcome::Rendered(self.views.render_create_form(errors, Some(draft)))
            }
        }
    }

    /// Keyword search. An empty query behaves exactly like [`Self::index`].
    pub async fn search(&self, query_terms: Option<&str>) -> Outcome<V::Output> {
        let query_terms = query_terms.unwrap_or("").trim();
        if query_terms.is_empty() {
            return self.index().await;
        }

        let query = SearchQuery::parse(query_terms);

        match self.store.search_games(&query.terms, query.mode).await {
            Ok(games) => Outcome::Rendered(
                self.views
                    .render_search_results(query_terms.to_string(), games),
            ),
            Err(err) => {
                tracing::error!(
                    error = %err,
                    terms = %query.terms,
                    mode = %query.mode,
                    "Failed to search games",
                );
                self.fail(AppError::StoreFailure(MSG_SEARCH_FAILED))
            }
        }
    }

    /// Show the error view with `message` verbatim.
    pub fn error(&self, message: impl Into<String>) -> Outcome<V::Output> {
        self.fail(AppError::Message(message.into()))
    }

    fn fail(&self, error: AppError) -> Outcome<V::Output> {
        Outcome::Rendered(self.views.render_error(error))
    }
}
