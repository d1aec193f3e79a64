use crate::api::{ApiClient, ApiError, User};
use futures::future::{FutureExt, LocalBoxFuture};
use std::rc::Rc;

/// Looks up the user shown after a successful login.
pub trait UserFetcher {
    fn fetch_user_by_id(&self, id: i64) -> LocalBoxFuture<'static, Result<User, ApiError>>;
}

/// Context slot for swapping the fetcher out, e.g. in tests.
#[derive(Clone)]
pub struct FetcherContext(pub Rc<dyn UserFetcher>);

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_user(&self, id: i64) -> Result<User, ApiError> {
        self.client.get_user(id).await
    }
}

impl UserFetcher for LoginRepository {
    fn fetch_user_by_id(&self, id: i64) -> LocalBoxFuture<'static, Result<User, ApiError>> {
        let repo = self.clone();
        async move { repo.fetch_user(id).await }.boxed_local()
    }
}
