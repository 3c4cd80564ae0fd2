use std::rc::Rc;

use yew::prelude::*;

use flashdeck::status::StatusMessage;
use flashdeck::view::View;

/// Everything the page renders, driven by the controller through [`YewView`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub login_visible: bool,
    pub create_visible: bool,
    pub username: String,
    pub logout_visible: bool,
    pub status: Option<StatusMessage>,
    pub submitting: bool,
    pub login_pending: bool,
    /// Bumped to remount (and so empty) the login form.
    pub login_form_epoch: u32,
    pub create_form_epoch: u32,
}

pub enum PageAction {
    ShowLogin(bool),
    ShowCreate(bool),
    SetUsername(String),
    ShowLogout(bool),
    SetStatus(Option<StatusMessage>),
    SetSubmitting(bool),
    SetLoginPending(bool),
    ResetLoginForm,
    ResetCreateForm,
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::ShowLogin(visible) => next.login_visible = visible,
            PageAction::ShowCreate(visible) => next.create_visible = visible,
            PageAction::SetUsername(username) => next.username = username,
            PageAction::ShowLogout(visible) => next.logout_visible = visible,
            PageAction::SetStatus(status) => next.status = status,
            PageAction::SetSubmitting(submitting) => next.submitting = submitting,
            PageAction::SetLoginPending(pending) => next.login_pending = pending,
            PageAction::ResetLoginForm => {
                next.login_form_epoch = next.login_form_epoch.wrapping_add(1);
            }
            PageAction::ResetCreateForm => {
                next.create_form_epoch = next.create_form_epoch.wrapping_add(1);
            }
        }
        next.into()
    }
}

#[derive(Clone)]
pub struct YewView {
    dispatcher: UseReducerDispatcher<PageState>,
}

impl YewView {
    pub fn new(dispatcher: UseReducerDispatcher<PageState>) -> Self {
        Self { dispatcher }
    }
}

impl View for YewView {
    fn show_login_panel(&self, visible: bool) {
        self.dispatcher.dispatch(PageAction::ShowLogin(visible));
    }

    fn show_create_panel(&self, visible: bool) {
        self.dispatcher.dispatch(PageAction::ShowCreate(visible));
    }

    fn set_username(&self, username: &str) {
        self.dispatcher
            .dispatch(PageAction::SetUsername(username.to_string()));
    }

    fn show_logout(&self, visible: bool) {
        self.dispatcher.dispatch(PageAction::ShowLogout(visible));
    }

    fn set_status(&self, message: Option<&StatusMessage>) {
        self.dispatcher
            .dispatch(PageAction::SetStatus(message.cloned()));
    }

    fn set_submitting(&self, submitting: bool) {
        self.dispatcher.dispatch(PageAction::SetSubmitting(submitting));
    }

    fn set_login_pending(&self, pending: bool) {
        self.dispatcher.dispatch(PageAction::SetLoginPending(pending));
    }

    fn reset_login_form(&self) {
        self.dispatcher.dispatch(PageAction::ResetLoginForm);
    }

    fn reset_create_form(&self) {
        self.dispatcher.dispatch(PageAction::ResetCreateForm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck::status::StatusKind;

    fn apply(state: PageState, actions: Vec<PageAction>) -> PageState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn form_resets_bump_their_own_epoch() {
        let state = apply(
            PageState::default(),
            vec![
                PageAction::ResetCreateForm,
                PageAction::ResetCreateForm,
                PageAction::ResetLoginForm,
            ],
        );
        assert_eq!(state.create_form_epoch, 2);
        assert_eq!(state.login_form_epoch, 1);
    }

    #[test]
    fn slots_are_set_independently() {
        let message = StatusMessage::new("Form cleared", StatusKind::Info);
        let state = apply(
            PageState::default(),
            vec![
                PageAction::ShowCreate(true),
                PageAction::SetUsername("alice".to_string()),
                PageAction::SetStatus(Some(message.clone())),
                PageAction::SetSubmitting(true),
            ],
        );
        assert!(state.create_visible);
        assert!(!state.login_visible);
        assert_eq!(state.username, "alice");
        assert_eq!(state.status, Some(message));
        assert!(state.submitting);

        let state = apply(state, vec![PageAction::SetStatus(None)]);
        assert_eq!(state.status, None);
    }
}
