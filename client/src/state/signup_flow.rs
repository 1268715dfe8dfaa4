//! Signup submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Connects the [`SignupForm`] record to its three collaborators: the account
//! provider, the router, and the user-facing notice. Each collaborator sits
//! behind a small trait so the flow runs the same against browser adapters
//! and in-memory fakes.
//!
//! No timeout, retry, or cancellation is applied to the provider call; an
//! attempt settles only when the provider answers.

#[cfg(test)]
#[path = "signup_flow_test.rs"]
mod signup_flow_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::signup::{SignupForm, SubmitOutcome};
use crate::net::identity::AccountProvider;

/// Route requested after signup and by the secondary "Login" action.
pub const LOGIN_PATH: &str = "/login";

/// Notice shown once an account has been created.
pub const SIGNUP_SUCCESS_NOTICE: &str = "Signup Successful!";

/// Shared access to the form record.
pub trait FormStore {
    /// Apply `f` to the current form. Returns `None` if the store is gone
    /// (for example a signal disposed after the page unmounted).
    fn with_form<R>(&self, f: impl FnOnce(&mut SignupForm) -> R) -> Option<R>;
}

impl FormStore for RwSignal<SignupForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut SignupForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormStore for RefCell<SignupForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut SignupForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<S: FormStore + ?Sized> FormStore for Rc<S> {
    fn with_form<R>(&self, f: impl FnOnce(&mut SignupForm) -> R) -> Option<R> {
        (**self).with_form(f)
    }
}

/// Transitions the UI to another view.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Shows a one-off notice to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// [`Navigator`] backed by the router's navigate function.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Drives a signup attempt from click to redirect.
#[derive(Clone)]
pub struct SignupController<S, P, N, C> {
    store: S,
    provider: P,
    navigator: N,
    notifier: C,
}

impl<S, P, N, C> SignupController<S, P, N, C>
where
    S: FormStore,
    P: AccountProvider,
    N: Navigator,
    C: Notifier,
{
    pub fn new(store: S, provider: P, navigator: N, notifier: C) -> Self {
        Self { store, provider, navigator, notifier }
    }

    /// Run one submission attempt.
    ///
    /// Clears the previous error, calls the provider, then either shows the
    /// success notice and navigates to [`LOGIN_PATH`] or leaves the failure
    /// text on the form. A click while an attempt is pending is dropped.
    pub async fn submit(&self) {
        let Some(request) = self.store.with_form(SignupForm::begin_submit).flatten() else {
            log::debug!("signup submit ignored: attempt already pending");
            return;
        };
        log::debug!("signup attempt started for {}", request.email);

        let result = self.provider.create_account(&request.email, &request.password).await;

        match self.store.with_form(|form| form.finish_submit(result)) {
            Some(SubmitOutcome::Created(account)) => {
                log::info!("account created: uid={}", account.uid);
                self.notifier.notify(SIGNUP_SUCCESS_NOTICE);
                self.navigator.navigate(LOGIN_PATH);
            }
            Some(SubmitOutcome::Failed) => {
                let message = self.store.with_form(|form| form.error_message.clone()).unwrap_or_default();
                log::warn!("signup failed: {message}");
            }
            None => log::debug!("signup settled after form was dropped"),
        }
    }

    /// Go to the login view without submitting.
    pub fn go_to_login(&self) {
        self.navigator.navigate(LOGIN_PATH);
    }
}
