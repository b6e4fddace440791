//! Login page: email + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use catalog::LoginRequest;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::error::ApiError;
use crate::state::session::SessionStore;
use crate::util::storage::StorageError;
use crate::util::session_gate::{HOME_ROUTE, should_leave_login};

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Inline message for a failed login.
pub(crate) fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 400 | 401 | 422 } => "Invalid email or password.".to_owned(),
        other => format!("Login failed: {other}"),
    }
}

/// Inline message when the token could not be persisted.
pub(crate) fn session_write_failure_message(err: &StorageError) -> String {
    format!("Signed in, but your session could not be saved: {err}")
}

/// True when an already-authenticated visitor should be sent home. A login
/// in flight finishes with its own full page load instead.
pub(crate) fn should_forward_home(session: &SessionStore, busy: bool) -> bool {
    !busy && should_leave_login(session)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        if should_forward_home(&session.get(), busy.get()) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &request).await {
                    Ok(resp) => {
                        let saved = session
                            .try_update(|s| s.save(crate::state::session::Session::from(resp)))
                            .unwrap_or(Err(StorageError::Unavailable));
                        match saved {
                            Ok(()) => crate::util::navigation::hard_navigate(HOME_ROUTE),
                            Err(err) => {
                                log::warn!("session not persisted: {err}");
                                error.set(Some(session_write_failure_message(&err)));
                                busy.set(false);
                            }
                        }
                    }
                    Err(err) => {
                        error.set(Some(login_failure_message(&err)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Inventory"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <Show when=move || session.with(SessionStore::was_expired)>
                    <p class="login-message">"Your session has expired. Please sign in again."</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
