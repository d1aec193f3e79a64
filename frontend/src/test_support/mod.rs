
#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiError, User};
    use crate::pages::login::repository::{FetcherContext, UserFetcher};
    use futures::channel::oneshot;
    use futures::future::{self, FutureExt, LocalBoxFuture};
    use leptos::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    pub fn john() -> User {
        User {
            id: 1,
            name: "John".into(),
        }
    }

    /// Resolves every fetch immediately with a fixed result and records the ids asked for.
    #[derive(Clone)]
    pub struct StubFetcher {
        result: Result<User, ApiError>,
        pub requested: Rc<RefCell<Vec<i64>>>,
    }

    impl StubFetcher {
        pub fn ok(user: User) -> Self {
            Self {
                result: Ok(user),
                requested: Rc::default(),
            }
        }

        pub fn err(error: ApiError) -> Self {
            Self {
                result: Err(error),
                requested: Rc::default(),
            }
        }
    }

    impl UserFetcher for StubFetcher {
        fn fetch_user_by_id(&self, id: i64) -> LocalBoxFuture<'static, Result<User, ApiError>> {
            self.requested.borrow_mut().push(id);
            future::ready(self.result.clone()).boxed_local()
        }
    }

    /// Holds every fetch open until the test resolves it by hand.
    #[derive(Clone, Default)]
    pub struct PendingFetcher {
        senders: Rc<RefCell<Vec<oneshot::Sender<Result<User, ApiError>>>>>,
        calls: Rc<Cell<usize>>,
    }

    impl PendingFetcher {
        pub fn calls(&self) -> usize {
            self.calls.get()
        }

        /// Completes the oldest outstanding fetch. Returns false when none is open.
        pub fn resolve(&self, result: Result<User, ApiError>) -> bool {
            let mut senders = self.senders.borrow_mut();
            if senders.is_empty() {
                return false;
            }
            senders.remove(0).send(result).is_ok()
        }
    }

    impl UserFetcher for PendingFetcher {
        fn fetch_user_by_id(&self, _id: i64) -> LocalBoxFuture<'static, Result<User, ApiError>> {
            let (tx, rx) = oneshot::channel();
            self.senders.borrow_mut().push(tx);
            self.calls.set(self.calls.get() + 1);
            async move {
                rx.await
                    .unwrap_or_else(|_| Err(ApiError::unknown("fetch dropped")))
            }
            .boxed_local()
        }
    }

    pub fn provide_fetcher(fetcher: impl UserFetcher + 'static) {
        provide_context(FetcherContext(Rc::new(fetcher)));
    }
}
