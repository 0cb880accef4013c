use super::*;

/// Tests promoting a user.
///
/// Expected: Ok(Some) with the new role persisted
#[tokio::test]
async fn sets_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .set_role_by_email(&user.email, Role::Admin)
        .await?
        .unwrap();

    assert_eq!(updated.role, Role::Admin);
    assert_eq!(repo.find_by_id(user.id).await?.unwrap().role, Role::Admin);

    Ok(())
}

/// Tests changing the role of an unknown email.
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

    let repo = UserRepository::new(db);

    assert!(repo
        .set_role_by_email("ghost@example.com", Role::Admin)
        .await?
        .is_none());

    Ok(())
}
