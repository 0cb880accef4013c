//! Unique value generation and multi-entity setups shared by the factories.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// names and emails to prevent collisions with unique constraints.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a review together with the user who wrote it and the game it belongs to.
///
/// Defaults are used throughout; reach for `ReviewFactory` when the review needs
/// a specific rating or seeded votes.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, game, review))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_review_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::game::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let game = crate::factory::game::create_game(db).await?;
    let review = crate::factory::review::create_review(db, game.id, author.id).await?;

    Ok((author, game, review))
}
