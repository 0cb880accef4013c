use async_graphql::{Context, Object, ID};

use super::db;
use crate::server::{
    error::GraphQlResultExt, model::author::Author, service::author::AuthorService,
    util::parse::parse_id,
};

pub struct AuthorObject(pub Author);

#[Object(name = "Author")]
impl AuthorObject {
    async fn id(&self) -> ID {
        ID::from(self.0.id)
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn verified(&self) -> bool {
        self.0.verified
    }
}

#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<AuthorObject>> {
        let authors = AuthorService::new(db(ctx)?).get_all().await.into_graphql()?;

        Ok(authors.into_iter().map(AuthorObject).collect())
    }

    async fn author_by_id(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<AuthorObject> {
        let id = parse_id(&id, "author").into_graphql()?;
        let author = AuthorService::new(db(ctx)?)
            .get_by_id(id)
            .await
            .into_graphql()?;

        Ok(AuthorObject(author))
    }
}
