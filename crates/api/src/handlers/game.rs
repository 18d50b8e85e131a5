//! HTTP handlers for the game routes.
//!
//! Handlers only extract request data and translate the controller's
//! [`Outcome`] into a response; all decisions live in the controller.

use axum::extract::rejection::{FormRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::Method;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use gamecat_core::game::GameSubmission;
use gamecat_core::operation::Operation;

use crate::controller::{GameRequest, Outcome};
use crate::query::{ErrorParams, OperationParams, SearchParams};
use crate::state::AppState;

/// Turn a controller outcome into the HTTP response.
///
/// A redirect is `303 See Other` to the new game's detail view.
fn respond(state: &AppState, outcome: Outcome<Response>) -> Response {
    match outcome {
        Outcome::Rendered(response) => response,
        Outcome::Redirect(id) => Redirect::to(&state.config.detail_url(id)).into_response(),
    }
}

/// Read a posted form, treating an unreadable body as an empty submission.
///
/// An empty submission fails validation, so the client gets the form back
/// with every violation instead of a bare rejection.
fn submission_or_empty(form: Result<Form<GameSubmission>, FormRejection>) -> GameSubmission {
    match form {
        Ok(Form(submission)) => submission,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable game form submission");
            GameSubmission::default()
        }
    }
}

/// Read query parameters, treating an unreadable query string as empty.
fn params_or_default<T: Default>(query: Result<Query<T>, QueryRejection>) -> T {
    match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable query string, ignoring parameters");
            T::default()
        }
    }
}

/// Render the error view for a path segment that could not be decoded.
fn bad_path(state: &AppState, rejection: PathRejection) -> Response {
    tracing::warn!(error = %rejection, "Undecodable game path");
    let outcome = state.controller.error(rejection.body_text());
    respond(state, outcome)
}

/// ANY /game, ANY /game/index
pub async fn index(State(state): State<AppState>) -> Response {
    let outcome = state.controller.index().await;
    respond(&state, outcome)
}

/// ANY /game/detail/{id}
pub async fn detail(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Response {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => return bad_path(&state, rejection),
    };
    let outcome = state.controller.detail(&id).await;
    respond(&state, outcome)
}

/// GET /game/create
///
/// Blank creation form. Also serves methods other than POST.
pub async fn create_form(State(state): State<AppState>) -> Response {
    let outcome = state.controller.create(None).await;
    respond(&state, outcome)
}

/// POST /game/create
pub async fn create_submit(
    State(state): State<AppState>,
    form: Result<Form<GameSubmission>, FormRejection>,
) -> Response {
    let submission = submission_or_empty(form);
    let outcome = state.controller.create(Some(&submission)).await;
    respond(&state, outcome)
}

/// ANY /game/search?query-terms=
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let params = params_or_default(query);
    let outcome = state.controller.search(params.query_terms.as_deref()).await;
    respond(&state, outcome)
}

/// ANY /game/error?message=
pub async fn error(
    State(state): State<AppState>,
    query: Result<Query<ErrorParams>, QueryRejection>,
) -> Response {
    let params = params_or_default(query);
    let outcome = state.controller.error(params.message.unwrap_or_default());
    respond(&state, outcome)
}

/// ANY /game/{op}
///
/// Resolves the operation by name; unknown names render the error view.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    op: Result<Path<String>, PathRejection>,
    query: Result<Query<OperationParams>, QueryRejection>,
    form: Result<Form<GameSubmission>, FormRejection>,
) -> Response {
    let op = match op {
        Ok(Path(op)) => op,
        Err(rejection) => return bad_path(&state, rejection),
    };
    run_named(&state, &op, None, method, params_or_default(query), form).await
}

/// ANY /game/{op}/{*param}
pub async fn dispatch_with_param(
    State(state): State<AppState>,
    method: Method,
    path: Result<Path<(String, String)>, PathRejection>,
    query: Result<Query<OperationParams>, QueryRejection>,
    form: Result<Form<GameSubmission>, FormRejection>,
) -> Response {
    let (op, param) = match path {
        Ok(Path(segments)) => segments,
        Err(rejection) => return bad_path(&state, rejection),
    };
    run_named(&state, &op, Some(param), method, params_or_default(query), form).await
}

async fn run_named(
    state: &AppState,
    op: &str,
    param: Option<String>,
    method: Method,
    params: OperationParams,
    form: Result<Form<GameSubmission>, FormRejection>,
) -> Response {
    let submission = (method == Method::POST).then(|| submission_or_empty(form));

    let request = GameRequest {
        param,
        submission,
        query_terms: params.query_terms,
        message: params.message,
    };

    let outcome = state
        .controller
        .dispatch(Operation::from_name(op), request)
        .await;
    respond(state, outcome)
}
