//! Builders that insert catalog rows with usable defaults.
//!
//! Every factory has a builder (`UserFactory::new(db).role(..).build()`) and a
//! `create_*` shorthand. Unique columns such as user names and emails get a
//! counter suffix so a test can create as many rows as it needs.
//!
//! ```rust,ignore
//! let user = factory::create_user(db).await?;
//! let game = factory::game::GameFactory::new(db).released_year(2004).build().await?;
//! let review = factory::create_review(db, game.id, user.id).await?;
//!
//! // A review with its author and game in one call
//! let (author, game, review) = factory::helpers::create_review_with_dependencies(db).await?;
//! ```

pub mod author;
pub mod game;
pub mod helpers;
pub mod review;
pub mod user;

pub use author::create_author;
pub use game::create_game;
pub use review::create_review;
pub use user::create_user;
