//! Login, logout and set creation for the create-set page.
//!
//! The controller is single-threaded: it is shared behind an `Rc` and every
//! handler runs to completion except at its one network call. State that
//! changes across those suspension points lives in `Cell`/`RefCell`, and no
//! borrow is held over an `.await`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::api::{ApiClient, ApiError, FlashcardApi};
use crate::data::{AuthToken, Credentials, RawSetFields, SetCreateRequest};
use crate::errors::FormError;
use crate::session::{KeyValueBackend, Session, SessionStore};
use crate::status::{Connectivity, Notice, SUCCESS_CLEAR_DELAY, StatusKind, StatusMessage, Timer};
use crate::view::{self, View};

/// Marks a request as in flight for as long as it is alive.
struct InFlight<'a, V: View> {
    view: &'a V,
    flag: &'a Cell<bool>,
    mark: fn(&V, bool),
}

impl<'a, V: View> InFlight<'a, V> {
    /// `None` when the same kind of request is already running.
    fn acquire(view: &'a V, flag: &'a Cell<bool>, mark: fn(&V, bool)) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        mark(view, true);
        Some(Self { view, flag, mark })
    }
}

impl<V: View> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        self.flag.set(false);
        (self.mark)(self.view, false);
    }
}

pub struct SessionFormController<C, K, V, T> {
    api: FlashcardApi<C>,
    store: SessionStore<K>,
    session: RefCell<Option<Session>>,
    view: V,
    timer: T,
    clear_delay: Duration,
    status_generation: Rc<Cell<u64>>,
    login_in_flight: Cell<bool>,
    submitting: Cell<bool>,
}

impl<C, K, V, T> SessionFormController<C, K, V, T>
where
    C: ApiClient,
    K: KeyValueBackend,
    V: View + Clone + 'static,
    T: Timer,
{
    /// Picks up whatever session survived in the durable store.
    pub fn new(api: FlashcardApi<C>, store: SessionStore<K>, view: V, timer: T) -> Self {
        let session = store.load();
        if let Some(session) = &session {
            tracing::debug!(username = %session.username, "Restored stored session");
        }

        Self {
            api,
            store,
            session: RefCell::new(session),
            view,
            timer,
            clear_delay: SUCCESS_CLEAR_DELAY,
            status_generation: Rc::new(Cell::new(0)),
            login_in_flight: Cell::new(false),
            submitting: Cell::new(false),
        }
    }

    pub fn with_clear_delay(mut self, delay: Duration) -> Self {
        self.clear_delay = delay;
        self
    }

    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    fn current_token(&self) -> Option<AuthToken> {
        self.session.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn render_auth_state(&self) {
        let session = self.session();
        view::render_auth_state(&self.view, session.as_ref());
    }

    /// Replaces the status region. A success message clears itself after the
    /// configured delay unless another message has replaced it by then.
    pub fn show_status(&self, message: impl Into<StatusMessage>) {
        let message = message.into();
        let generation = self.status_generation.get().wrapping_add(1);
        self.status_generation.set(generation);
        self.view.set_status(Some(&message));

        if message.kind == StatusKind::Success {
            let current = Rc::clone(&self.status_generation);
            let view = self.view.clone();
            self.timer.schedule(
                self.clear_delay,
                Box::new(move || {
                    if current.get() == generation {
                        view.set_status(None);
                    }
                }),
            );
        }
    }

    pub async fn login(&self, username: &str, password: &str) {
        let Some(_pending) =
            InFlight::acquire(&self.view, &self.login_in_flight, V::set_login_pending)
        else {
            tracing::debug!("Login already in flight, ignoring");
            return;
        };

        let credentials = Credentials::new(username, password);
        match self.api.login(&credentials).await {
            Ok(response) => {
                let session = Session::new(response.auth_token, username);
                if let Err(err) = self.store.save(&session) {
                    tracing::warn!(%err, "Session not persisted, keeping it for this page only");
                }
                *self.session.borrow_mut() = Some(session);
                tracing::info!(username, "Signed in");

                self.show_status(Notice::LoggedIn);
                self.render_auth_state();
                self.view.reset_login_form();
            }
            Err(err) => {
                let notice = match err.rejection() {
                    Some(body) => {
                        tracing::warn!(%err, "Login rejected");
                        Notice::LoginRejected(body.detail.clone())
                    }
                    None => {
                        tracing::error!(%err, "Login request failed");
                        Notice::NetworkFailure
                    }
                };
                self.show_status(notice);
            }
        }
    }

    pub async fn create_set(&self, fields: RawSetFields) {
        let Some(token) = self.current_token() else {
            tracing::debug!(error = %FormError::AuthRequired, "Create set refused");
            self.show_status(Notice::SignInRequired);
            return;
        };

        let request = match SetCreateRequest::from_fields(fields) {
            Ok(request) => request,
            Err(err) => {
                tracing::debug!(error = %err, "Create set refused");
                self.show_status(Notice::NameRequired);
                return;
            }
        };

        let Some(_submitting) =
            InFlight::acquire(&self.view, &self.submitting, V::set_submitting)
        else {
            tracing::debug!("Create set already in flight, ignoring");
            return;
        };

        match self.api.create_set(&token, &request).await {
            Ok(created) => {
                tracing::info!(name = %created.name, id = ?created.id, "Set created");
                self.show_status(Notice::SetCreated(created.name));
                self.view.reset_create_form();
            }
            Err(err) => self.show_status(create_failure_notice(&err)),
        }
    }

    /// Drops the session locally. The server is not told.
    pub fn logout(&self) {
        self.session.borrow_mut().take();
        self.store.clear();
        tracing::info!("Signed out");

        self.show_status(Notice::LoggedOut);
        self.render_auth_state();
    }

    pub fn clear_form(&self) {
        self.view.reset_create_form();
        self.show_status(Notice::FormCleared);
    }

    pub fn connectivity_changed(&self, connectivity: Connectivity) {
        tracing::info!(?connectivity, "Connectivity changed");
        self.show_status(Notice::from(connectivity));
    }
}

fn create_failure_notice(err: &ApiError) -> Notice {
    match err.rejection() {
        Some(body) => {
            tracing::warn!(%err, "Create set rejected");
            Notice::SetRejected(body.error.clone().or_else(|| body.detail.clone()))
        }
        None if matches!(err, ApiError::ParseError(_)) => {
            // 2xx with an unreadable body: the set may exist server-side.
            tracing::warn!(%err, "Set created but response unreadable, a resubmit may duplicate it");
            Notice::NetworkFailure
        }
        None => {
            tracing::error!(%err, "Create set request failed");
            Notice::NetworkFailure
        }
    }
}
