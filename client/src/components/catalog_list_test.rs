use catalog::UserProfile;

use super::*;
use crate::state::catalog::ListStatus;
use crate::state::session::Session;

struct Signals {
    session: RwSignal<SessionStore>,
    catalog: RwSignal<CatalogState>,
    panels: RwSignal<PanelsState>,
}

fn signals(store: SessionStore) -> Signals {
    Signals {
        session: RwSignal::new(store),
        catalog: RwSignal::new(CatalogState::default()),
        panels: RwSignal::new(PanelsState::default()),
    }
}

fn signed_in() -> SessionStore {
    SessionStore::with_session(Some(Session {
        token: "t1".to_owned(),
        user: UserProfile {
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
            email: "a@b.com".to_owned(),
            roles: Vec::new(),
        },
    }))
}

fn request_products(s: &Signals) {
    request_list::<Product>(s.session, s.catalog, s.panels, ClientConfig::with_api_base("http://api.test"));
}

fn product_status(s: &Signals) -> ListStatus {
    s.catalog.with_untracked(|c| c.products.status.clone())
}

#[test]
fn unloaded_session_requests_nothing() {
    let owner = Owner::new();
    owner.set();
    let s = signals(SessionStore::default());
    request_products(&s);
    assert_eq!(product_status(&s), ListStatus::Idle);
}

#[test]
fn missing_token_requests_nothing() {
    let owner = Owner::new();
    owner.set();
    let s = signals(SessionStore::with_session(None));
    request_products(&s);
    assert_eq!(product_status(&s), ListStatus::Idle);
}

#[test]
fn expired_session_requests_nothing() {
    let owner = Owner::new();
    owner.set();
    let mut store = signed_in();
    store.expire();
    let s = signals(store);
    request_products(&s);
    assert_eq!(product_status(&s), ListStatus::Idle);
}

#[test]
fn session_present_starts_loading_once() {
    let owner = Owner::new();
    owner.set();
    let s = signals(signed_in());
    request_products(&s);
    assert_eq!(product_status(&s), ListStatus::Loading);

    // A second mount on the same page does not restart the request.
    s.catalog.update(|c| c.products.status = ListStatus::Ready);
    request_products(&s);
    assert_eq!(product_status(&s), ListStatus::Ready);
}

#[test]
fn requesting_products_leaves_locations_alone() {
    let owner = Owner::new();
    owner.set();
    let s = signals(signed_in());
    request_products(&s);
    assert_eq!(s.catalog.with_untracked(|c| c.locations.status.clone()), ListStatus::Idle);
}
