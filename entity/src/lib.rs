//! SeaORM entity models for the game review catalog.
//!
//! Each module mirrors one table created by the `migration` crate. Enumerations that
//! are stored in the database (roles, platforms, genres and vote types) live next to
//! the entity that owns them so that both the server and the test utilities share a
//! single definition.

pub mod author;
pub mod game;
pub mod prelude;
pub mod review;
pub mod user;
