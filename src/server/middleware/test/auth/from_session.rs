use super::*;

/// Tests resolving a logged-in caller.
///
/// Expected: Ok with the session's user
#[tokio::test]
async fn resolves_user_from_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let auth = AuthContext::from_session(db, &session).await?;

    assert_eq!(auth.user_id(), Some(user.id));

    Ok(())
}

/// Tests resolving a session without a user.
///
/// Expected: Ok with an anonymous context
#[tokio::test]
async fn resolves_anonymous_without_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth = AuthContext::from_session(db, &session).await?;

    assert!(auth.user().is_none());

    Ok(())
}

/// Tests resolving a session whose user has been deleted.
///
/// Expected: Ok with an anonymous context
#[tokio::test]
async fn resolves_anonymous_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(&session).set_user_id(404).await?;

    let auth = AuthContext::from_session(db, &session).await?;

    assert!(auth.user_id().is_none());

    Ok(())
}

/// Tests that logging out forgets the user.
///
/// Expected: Ok with an anonymous context after clearing
#[tokio::test]
async fn resolves_anonymous_after_clear() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::create_user(db).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_user_id(user.id).await?;
    auth_session.clear().await?;

    let auth = AuthContext::from_session(db, &session).await?;

    assert!(auth.user().is_none());

    Ok(())
}
