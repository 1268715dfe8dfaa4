//! Signup page: email + password form backed by the identity provider.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::AuthConfig;
use crate::net::identity::IdentityToolkitProvider;
use crate::state::signup::SignupForm;
use crate::state::signup_flow::{RouterNavigator, SignupController};
use crate::util::notify::AlertNotifier;

/// Accessible label for the visibility toggle.
fn visibility_toggle_label(visible: bool) -> &'static str {
    if visible { "Hide password" } else { "Show password" }
}

/// Signup page. Form state lives and dies with the page.
#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let config = use_context::<AuthConfig>().unwrap_or_default();

    let controller = SignupController::new(
        form,
        IdentityToolkitProvider::new(config),
        RouterNavigator::new(use_navigate()),
        AlertNotifier,
    );

    let on_submit = {
        let controller = controller.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            #[cfg(feature = "hydrate")]
            {
                let controller = controller.clone();
                leptos::task::spawn_local(async move {
                    controller.submit().await;
                });
            }

            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &controller;
            }
        }
    };

    let on_login = move |_| controller.go_to_login();

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <form class="signup-form" on:submit=on_submit>
                    <p class="signup-form__heading">"Sign Up"</p>

                    <div class="signup-field">
                        <MailIcon/>
                        <input
                            class="signup-field__input"
                            type="email"
                            placeholder="Enter your email"
                            required=true
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                    </div>

                    <div class="signup-field">
                        <LockIcon/>
                        <input
                            class="signup-field__input"
                            type=move || form.with(SignupForm::password_input_type)
                            placeholder="Enter your password"
                            required=true
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        />
                        <button
                            class="signup-field__toggle"
                            type="button"
                            aria-label=move || visibility_toggle_label(form.with(|f| f.show_password))
                            on:click=move |_| form.update(SignupForm::toggle_password_visibility)
                        >
                            {move || {
                                if form.with(|f| f.show_password) {
                                    view! { <EyeOffIcon/> }.into_any()
                                } else {
                                    view! { <EyeIcon/> }.into_any()
                                }
                            }}
                        </button>
                    </div>

                    <Show when=move || form.with(SignupForm::has_error)>
                        <p class="signup-form__error">{move || form.with(|f| f.error_message.clone())}</p>
                    </Show>

                    <div class="signup-form__actions">
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || form.with(|f| f.pending)
                        >
                            "Sign Up"
                        </button>
                        <button class="btn" type="button" on:click=on_login>
                            "Login"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
fn MailIcon() -> impl IntoView {
    view! {
        <svg class="signup-field__icon" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path>
            <polyline points="22,6 12,13 2,6"></polyline>
        </svg>
    }
}

#[component]
fn LockIcon() -> impl IntoView {
    view! {
        <svg class="signup-field__icon" viewBox="0 0 24 24" aria-hidden="true">
            <rect x="3" y="11" width="18" height="11" rx="2" ry="2"></rect>
            <path d="M7 11V7a5 5 0 0 1 10 0v4"></path>
        </svg>
    }
}

#[component]
fn EyeIcon() -> impl IntoView {
    view! {
        <svg class="signup-field__toggle-icon" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"></path>
            <circle cx="12" cy="12" r="3"></circle>
        </svg>
    }
}

#[component]
fn EyeOffIcon() -> impl IntoView {
    view! {
        <svg class="signup-field__toggle-icon" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94"></path>
            <path d="M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19"></path>
            <line x1="1" y1="1" x2="23" y2="23"></line>
        </svg>
    }
}
