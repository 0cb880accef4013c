use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthContext, Permission},
        session::AuthSession,
    },
    model::user::Role,
};
use test_utils::{builder::TestBuilder, factory};

mod from_session;
mod require;
