//! Registration, login and session resolvers.

use async_graphql::{Context, InputObject, Object, SimpleObject};

use super::{caller, db, session, user::UserObject};
use crate::server::{
    error::GraphQlResultExt,
    middleware::session::AuthSession,
    model::user::{LoginParam, RegisterUserParam},
    service::auth::AuthService,
};

#[derive(InputObject)]
pub struct NewUserInput {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(InputObject)]
#[graphql(name = "UserLoginInput")]
pub struct UserLoginInput {
    pub email: String,
    pub password: String,
}

#[derive(SimpleObject)]
pub struct PingResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Default)]
pub struct AuthQuery;

#[Object]
impl AuthQuery {
    /// The logged-in user, or null for anonymous callers.
    async fn me(&self, ctx: &Context<'_>) -> Option<UserObject> {
        caller(ctx).user().cloned().map(UserObject)
    }

    async fn ping_server(&self) -> PingResponse {
        PingResponse {
            success: true,
            message: "Pong!".to_string(),
        }
    }
}

#[derive(Default)]
pub struct AuthMutation;

#[Object]
impl AuthMutation {
    /// Creates an account and logs it in.
    async fn register_new_user(
        &self,
        ctx: &Context<'_>,
        new_user: NewUserInput,
    ) -> async_graphql::Result<UserObject> {
        let user = AuthService::new(db(ctx)?)
            .register(RegisterUserParam {
                user_name: new_user.user_name,
                email: new_user.email,
                password: new_user.password,
            })
            .await
            .into_graphql()?;

        AuthSession::new(session(ctx)?)
            .set_user_id(user.id)
            .await
            .into_graphql()?;

        Ok(UserObject(user))
    }

    async fn login_user(
        &self,
        ctx: &Context<'_>,
        user_login: UserLoginInput,
    ) -> async_graphql::Result<UserObject> {
        let user = AuthService::new(db(ctx)?)
            .login(LoginParam {
                email: user_login.email,
                password: user_login.password,
            })
            .await
            .into_graphql()?;

        AuthSession::new(session(ctx)?)
            .set_user_id(user.id)
            .await
            .into_graphql()?;

        Ok(UserObject(user))
    }

    async fn logout_user(&self, ctx: &Context<'_>) -> async_graphql::Result<bool> {
        AuthSession::new(session(ctx)?).clear().await.into_graphql()?;

        Ok(true)
    }
}
