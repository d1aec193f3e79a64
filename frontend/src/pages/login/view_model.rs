use super::repository::{FetcherContext, LoginRepository, UserFetcher};
use super::utils::FormState;
use crate::api::{ApiClient, ApiError, User};
use crate::config;
use leptos::*;
use log::{debug, info, warn};
use std::cell::Cell;
use std::rc::Rc;

/// One dispatched fetch. `generation` ties the outcome back to the submit
/// that started it; outcomes for an older generation are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub user_id: i64,
    pub generation: u64,
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: RwSignal<FormState>,
    pub submit_action: Action<Submission, Result<User, ApiError>>,
    pub can_submit: Memo<bool>,
    pub is_loading: Memo<bool>,
    pub is_error_visible: Memo<bool>,
    pub submit_label: Memo<&'static str>,
    pub error_message: Memo<String>,
    pub user_name: Memo<Option<String>>,
    user_id: i64,
    generation: Rc<Cell<u64>>,
}

fn resolve_fetcher() -> Rc<dyn UserFetcher> {
    if let Some(FetcherContext(fetcher)) = use_context::<FetcherContext>() {
        return fetcher;
    }
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    Rc::new(LoginRepository::new_with_client(Rc::new(api)))
}

pub fn use_login_view_model() -> LoginViewModel {
    let fetcher = resolve_fetcher();
    let form = create_rw_signal(FormState::default());
    let generation = Rc::new(Cell::new(0u64));

    let generation_for_action = generation.clone();
    let submit_action = create_action(move |submission: &Submission| {
        let fetch = fetcher.fetch_user_by_id(submission.user_id);
        let ticket = submission.generation;
        let generation = generation_for_action.clone();
        async move {
            let result = fetch.await;
            if generation.get() != ticket {
                debug!("discarding outcome of abandoned submission #{}", ticket);
                return result;
            }
            match &result {
                Ok(user) => info!("fetched user {} ({})", user.id, user.name),
                Err(err) => warn!("user fetch failed [{}]: {}", err.code, err.error),
            }
            let outcome = result.clone();
            form.try_update(move |state| state.finish(outcome));
            result
        }
    });

    let generation_for_cleanup = generation.clone();
    on_cleanup(move || generation_for_cleanup.set(generation_for_cleanup.get() + 1));

    LoginViewModel {
        form,
        submit_action,
        can_submit: create_memo(move |_| form.with(FormState::can_submit)),
        is_loading: create_memo(move |_| form.with(FormState::is_loading)),
        is_error_visible: create_memo(move |_| form.with(FormState::is_error_visible)),
        submit_label: create_memo(move |_| form.with(FormState::submit_label)),
        error_message: create_memo(move |_| form.with(|state| state.error_message().to_string())),
        user_name: create_memo(move |_| {
            form.with(|state| state.user.as_ref().map(|user| user.name.clone()))
        }),
        user_id: config::user_id(),
        generation,
    }
}

impl LoginViewModel {
    pub fn set_username(&self, value: String) {
        self.form.update(|state| state.set_username(value));
    }

    pub fn set_password(&self, value: String) {
        self.form.update(|state| state.set_password(value));
    }

    /// Starts a fetch when the form allows it. Returns whether one was started.
    pub fn submit(&self) -> bool {
        match self.form.try_update(FormState::begin_submit) {
            Some(Ok(())) => {}
            Some(Err(reason)) => {
                debug!("submit ignored: {:?}", reason);
                return false;
            }
            None => return false,
        }

        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        info!("submitting login #{}; fetching user {}", ticket, self.user_id);
        self.submit_action.dispatch(Submission {
            user_id: self.user_id,
            generation: ticket,
        });
        true
    }

    /// Abandons the in-flight fetch, if any. Its outcome will be ignored.
    pub fn cancel_pending(&self) {
        self.generation.set(self.generation.get() + 1);
        if self.form.try_update(FormState::abandon).unwrap_or(false) {
            debug!("in-flight submission abandoned");
        }
    }
}
