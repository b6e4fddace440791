//! Signed-in user block with logout.

use catalog::UserProfile;
use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::navigation::hard_navigate;
use crate::util::session_gate::LOGIN_ROUTE;

/// Name and email of the current user plus a logout action.
#[component]
pub fn UserInfo() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let name = move || session.with(|s| s.user().map(UserProfile::display_name).unwrap_or_default());
    let email = move || session.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default());

    let on_logout = move |_| {
        session.update(SessionStore::clear);
        hard_navigate(LOGIN_ROUTE);
    };

    view! {
        <div class="user-info">
            <div class="user-info__name">
                <strong>{name}</strong>
            </div>
            <div class="user-info__email">{email}</div>
            <button class="user-info__logout" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}
