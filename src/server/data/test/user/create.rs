use super::*;

fn param(user_name: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        user_name: user_name.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$stub".to_string(),
        role: Role::User,
    }
}

/// Tests creating a user.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    let user = repo.create(param("alice", "alice@example.com")).await?;

    assert_eq!(user.user_name, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::User);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests creating a user with an email that is already registered.
///
/// Expected: Err from the unique constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();

    let repo = UserRepository::new(db);
    repo.create(param("alice", "same@example.com")).await?;
    let result = repo.create(param("bob", "same@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
