use super::*;
use test_utils::factory::user::UserFactory;

/// Tests loading credentials for login.
///
/// Expected: Ok(Some) with the stored password hash
#[tokio::test]
async fn returns_user_with_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let user = UserFactory::new(db)
        .email("login@example.com")
        .password_hash("$argon2id$v=19$hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo
        .find_credentials_by_email("login@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "$argon2id$v=19$hash");

    Ok(())
}

/// Tests loading credentials for an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo
        .find_credentials_by_email("nobody@example.com")
        .await?
        .is_none());

    Ok(())
}
