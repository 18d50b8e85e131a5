//! Game catalog API server library.
//!
//! Exposes the controller, views, config, state, error handling and routes
//! so integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
