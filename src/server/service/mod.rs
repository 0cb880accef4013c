//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! GraphQL resolvers and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation and the vote transition rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than GraphQL objects or entities

pub mod auth;
pub mod author;
pub mod game;
pub mod review;
pub mod user;
pub mod vote;
