//! The rendering surface the controller drives.

use crate::session::Session;
use crate::status::StatusMessage;

/// Named slots of the page. Implementations use interior mutability, the
/// controller only ever holds a shared reference.
pub trait View {
    fn show_login_panel(&self, visible: bool);
    fn show_create_panel(&self, visible: bool);
    fn set_username(&self, username: &str);
    fn show_logout(&self, visible: bool);
    /// `None` empties the region and resets its kind.
    fn set_status(&self, message: Option<&StatusMessage>);
    fn set_submitting(&self, submitting: bool);
    fn set_login_pending(&self, pending: bool);
    fn reset_login_form(&self);
    fn reset_create_form(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthView {
    Anonymous,
    Authenticated { username: String },
}

impl From<Option<&Session>> for AuthView {
    fn from(session: Option<&Session>) -> Self {
        match session {
            Some(session) => AuthView::Authenticated {
                username: session.username.clone(),
            },
            None => AuthView::Anonymous,
        }
    }
}

/// Shows the panel matching the current authentication state.
pub fn render_auth_state<V: View + ?Sized>(view: &V, session: Option<&Session>) {
    match AuthView::from(session) {
        AuthView::Authenticated { username } => {
            view.show_login_panel(false);
            view.show_create_panel(true);
            view.set_username(&username);
            view.show_logout(true);
        }
        AuthView::Anonymous => {
            view.show_login_panel(true);
            view.show_create_panel(false);
            view.show_logout(false);
        }
    }
}
