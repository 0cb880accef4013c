//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and wrapped into GraphQL objects at the controller
//! boundary.

pub mod author;
pub mod game;
pub mod review;
pub mod user;
pub mod vote;
