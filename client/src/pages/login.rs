//! Login landing page reached after signup or from the signup form's
//! secondary action. Credential sign-in itself is owned by the identity
//! provider.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log In"</h1>
                <p class="login-card__subtitle">"Sign in with the account you just created."</p>
                <a href="/signup" class="login-link">
                    "Need an account? Sign up"
                </a>
            </div>
        </div>
    }
}
