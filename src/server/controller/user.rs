use async_graphql::{Context, Enum, Object, ID};
use chrono::{DateTime, Utc};

use super::{caller, db};
use crate::server::{
    error::GraphQlResultExt,
    middleware::auth::Permission,
    model::user::{ChangeRoleParam, User},
    service::user::UserService,
};

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "Role", remote = "entity::user::Role")]
pub enum RoleGql {
    User,
    Admin,
    SuperAdmin,
}

pub struct UserObject(pub User);

/// A registered user.
#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id)
    }

    async fn user_name(&self) -> &str {
        &self.0.user_name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn role(&self) -> RoleGql {
        self.0.role.into()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Changes the role of the user with the given email. Super admins only.
    async fn change_user_role(
        &self,
        ctx: &Context<'_>,
        email: String,
        role: RoleGql,
    ) -> async_graphql::Result<UserObject> {
        caller(ctx)
            .require(&[Permission::ManageRoles])
            .into_graphql()?;

        let user = UserService::new(db(ctx)?)
            .change_role(ChangeRoleParam {
                email,
                role: role.into(),
            })
            .await
            .into_graphql()?;

        Ok(UserObject(user))
    }
}
