use super::*;
use crate::server::model::user::User;
use test_utils::factory::user::create_user_with_role;

async fn context_with_role(role: Role) -> Result<AuthContext, AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let user = create_user_with_role(test.db(), role).await?;

    Ok(AuthContext::authenticated(User::from_entity(user)))
}

/// Tests requiring a user from an anonymous caller.
///
/// Expected: Err(UserNotInSession)
#[test]
fn rejects_anonymous_caller() {
    let auth = AuthContext::anonymous();
    let result = auth.require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests that any authenticated user passes an empty permission list.
///
/// Expected: Ok(User)
#[tokio::test]
async fn accepts_any_user_without_permissions() -> Result<(), AppError> {
    let auth = context_with_role(Role::User).await?;

    assert!(auth.require(&[]).is_ok());

    Ok(())
}

/// Tests catalog management permission per role.
///
/// Expected: denied for USER, granted for ADMIN and SUPER_ADMIN
#[tokio::test]
async fn manage_catalog_requires_admin() -> Result<(), AppError> {
    let user = context_with_role(Role::User).await?;
    let admin = context_with_role(Role::Admin).await?;
    let super_admin = context_with_role(Role::SuperAdmin).await?;

    assert!(matches!(
        user.require(&[Permission::ManageCatalog]),
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));
    assert!(admin.require(&[Permission::ManageCatalog]).is_ok());
    assert!(super_admin.require(&[Permission::ManageCatalog]).is_ok());

    Ok(())
}

/// Tests role management permission per role.
///
/// Expected: granted only for SUPER_ADMIN
#[tokio::test]
async fn manage_roles_requires_super_admin() -> Result<(), AppError> {
    let admin = context_with_role(Role::Admin).await?;
    let super_admin = context_with_role(Role::SuperAdmin).await?;

    assert!(matches!(
        admin.require(&[Permission::ManageRoles]),
        Err(AppError::AuthErr(AuthError::AccessDenied(..)))
    ));
    assert!(super_admin
        .require(&[Permission::ManageCatalog, Permission::ManageRoles])
        .is_ok());

    Ok(())
}
