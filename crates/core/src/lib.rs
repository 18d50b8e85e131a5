//! Domain logic for the game catalog.
//!
//! Everything here is pure: no database access, no HTTP. The `db` and `api`
//! crates build on these types.

pub mod coerce;
pub mod error;
pub mod game;
pub mod operation;
pub mod search;
pub mod types;
