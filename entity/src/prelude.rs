pub use super::author::Entity as Author;
pub use super::game::Entity as Game;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
