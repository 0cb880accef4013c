//! GraphQL API backend and business logic.
//!
//! The backend uses Axum as the web framework, async-graphql for the API and SeaORM
//! for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - GraphQL resolvers, access control and object wrappers
//! - **Service Layer** (`service/`) - Business logic, validation and the voting rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types, GraphQL codes and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and per-request caller identity
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, schema)
//! - **Startup** (`startup`) - Tracing, database and session initialization
//! - **Schema** (`schema`) - Schema construction and the GraphQL HTTP handler
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives `POST /graphql`
//! 2. **Schema** handler resolves the caller from the session into an `AuthContext`
//! 3. **Controller** resolvers check access, convert inputs to params, call services
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** wraps domain models in GraphQL objects

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod schema;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
