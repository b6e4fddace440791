use super::*;

// =============================================================
// Helpers
// =============================================================

fn record(name: &str, quantity: i64, reorder_point: i64) -> InventoryRecord {
    InventoryRecord {
        counterpart_name: name.to_owned(),
        quantity,
        reorder_point,
        in_stock: quantity > 0,
        needs_reorder: quantity < reorder_point,
        product_id: None,
        location_id: None,
    }
}

/// Answers every ticket immediately and remembers which endpoints were hit.
#[derive(Default)]
struct FakeInventory {
    responses: HashMap<PanelKey, Vec<InventoryRecord>>,
    calls: Vec<String>,
}

impl FakeInventory {
    fn with(mut self, key: PanelKey, rows: Vec<InventoryRecord>) -> Self {
        self.responses.insert(key, rows);
        self
    }

    fn click(&mut self, panels: &mut PanelsState, key: PanelKey) {
        if let Toggle::Fetch(ticket) = panels.toggle(key) {
            self.calls.push(key.kind.inventory_path(key.id));
            let rows = self.responses.get(&key).cloned().unwrap_or_default();
            assert_eq!(panels.resolve(ticket, Ok(rows)), Resolution::Applied);
        }
    }
}

fn product(id: i64) -> PanelKey {
    PanelKey::new(EntityKind::Product, id)
}

fn location(id: i64) -> PanelKey {
    PanelKey::new(EntityKind::Location, id)
}

// =============================================================
// Toggle state machine
// =============================================================

#[test]
fn unknown_panel_is_collapsed_and_empty() {
    let panels = PanelsState::default();
    assert_eq!(panels.state(product(1)), PanelState::Collapsed);
    assert_eq!(panels.content(product(1)), PanelContent::Empty);
    assert!(panels.is_empty());
}

#[test]
fn expanding_issues_one_fetch_to_by_product_endpoint() {
    let mut panels = PanelsState::default();
    let mut api = FakeInventory::default().with(product(1), vec![record("Warehouse", 0, 5), record("Annex", 9, 2)]);

    api.click(&mut panels, product(1));

    assert_eq!(api.calls, vec!["/inventory/by-product/1".to_owned()]);
    assert!(panels.is_expanded(product(1)));
    assert_eq!(panels.row_count(product(1)), 2);
}

#[test]
fn expanding_location_uses_by_location_endpoint() {
    let mut panels = PanelsState::default();
    let mut api = FakeInventory::default().with(location(4), vec![record("Widget", 3, 1)]);

    api.click(&mut panels, location(4));

    assert_eq!(api.calls, vec!["/inventory/by-location/4".to_owned()]);
    assert_eq!(panels.row_count(location(4)), 1);
}

#[test]
fn collapsing_issues_no_fetch_and_clears_rows() {
    let mut panels = PanelsState::default();
    let mut api = FakeInventory::default().with(product(1), vec![record("Warehouse", 0, 5)]);
    api.click(&mut panels, product(1));

    assert_eq!(panels.toggle(product(1)), Toggle::Collapsed);

    assert_eq!(api.calls.len(), 1);
    assert_eq!(panels.state(product(1)), PanelState::Collapsed);
    assert_eq!(panels.row_count(product(1)), 0);
    assert_eq!(panels.content(product(1)), PanelContent::Empty);
}

#[test]
fn double_toggle_returns_to_collapsed_regardless_of_rows() {
    for n in [0_usize, 1, 5] {
        let mut panels = PanelsState::default();
        let rows = (0..n).map(|i| record(&format!("L{i}"), 1, 0)).collect();
        let mut api = FakeInventory::default().with(product(7), rows);
        api.click(&mut panels, product(7));
        api.click(&mut panels, product(7));
        assert_eq!(panels.state(product(7)), PanelState::Collapsed);
        assert_eq!(panels.row_count(product(7)), 0);
    }
}

#[test]
fn reexpanding_fetches_again() {
    let mut panels = PanelsState::default();
    let mut api = FakeInventory::default().with(product(1), vec![record("Warehouse", 0, 5)]);

    api.click(&mut panels, product(1));
    api.click(&mut panels, product(1));
    api.click(&mut panels, product(1));

    assert_eq!(api.calls, vec!["/inventory/by-product/1".to_owned(), "/inventory/by-product/1".to_owned()]);
    assert!(panels.is_expanded(product(1)));
    assert_eq!(panels.len(), 1);
}

#[test]
fn rows_keep_service_order() {
    let mut panels = PanelsState::default();
    let mut api =
        FakeInventory::default().with(product(1), vec![record("Zeta", 1, 0), record("Alpha", 1, 0), record("Mid", 1, 0)]);
    api.click(&mut panels, product(1));

    let PanelContent::Rows(rows) = panels.content(product(1)) else {
        panic!("expected rows");
    };
    let names: Vec<_> = rows.iter().map(|r| r.counterpart_name.as_str()).collect();
    assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
}

#[test]
fn panels_are_independent_per_entity() {
    let mut panels = PanelsState::default();
    let mut api = FakeInventory::default()
        .with(product(1), vec![record("A", 1, 0)])
        .with(product(2), vec![record("B", 1, 0), record("C", 1, 0)]);

    api.click(&mut panels, product(1));
    api.click(&mut panels, product(2));
    api.click(&mut panels, product(1));

    assert_eq!(panels.state(product(1)), PanelState::Collapsed);
    assert_eq!(panels.row_count(product(2)), 2);
}

#[test]
fn same_id_in_different_kinds_are_different_panels() {
    let mut panels = PanelsState::default();
    panels.toggle(product(1));
    assert!(!panels.is_expanded(location(1)));
}

// =============================================================
// Loading, failure and stale responses
// =============================================================

#[test]
fn expanded_panel_shows_loading_until_resolved() {
    let mut panels = PanelsState::default();
    let Toggle::Fetch(ticket) = panels.toggle(product(1)) else {
        panic!("expected fetch");
    };
    assert_eq!(panels.content(product(1)), PanelContent::Loading);
    assert_eq!(ticket.key, product(1));
}

#[test]
fn failed_fetch_is_visible_and_recoverable() {
    let mut panels = PanelsState::default();
    let Toggle::Fetch(ticket) = panels.toggle(product(1)) else {
        panic!("expected fetch");
    };
    panels.resolve(ticket, Err(ApiError::Status { status: 500 }));
    assert_eq!(panels.content(product(1)), PanelContent::Failed("request failed: HTTP 500".to_owned()));
    assert!(panels.is_expanded(product(1)));

    assert_eq!(panels.toggle(product(1)), Toggle::Collapsed);
    assert!(matches!(panels.toggle(product(1)), Toggle::Fetch(_)));
}

#[test]
fn response_after_collapse_is_discarded() {
    let mut panels = PanelsState::default();
    let Toggle::Fetch(ticket) = panels.toggle(product(1)) else {
        panic!("expected fetch");
    };
    panels.toggle(product(1));

    assert_eq!(panels.resolve(ticket, Ok(vec![record("Late", 1, 0)])), Resolution::Stale);
    assert_eq!(panels.state(product(1)), PanelState::Collapsed);
    assert_eq!(panels.content(product(1)), PanelContent::Empty);
}

#[test]
fn superseded_response_loses_even_when_it_arrives_last() {
    let mut panels = PanelsState::default();
    let Toggle::Fetch(first) = panels.toggle(product(1)) else {
        panic!("expected fetch");
    };
    panels.toggle(product(1));
    let Toggle::Fetch(second) = panels.toggle(product(1)) else {
        panic!("expected fetch");
    };
    assert_ne!(first.generation, second.generation);

    assert_eq!(panels.resolve(second, Ok(vec![record("Fresh", 2, 0)])), Resolution::Applied);
    assert_eq!(panels.resolve(first, Ok(vec![record("Old", 1, 0), record("Old", 1, 0)])), Resolution::Stale);

    assert_eq!(panels.content(product(1)), PanelContent::Rows(vec![record("Fresh", 2, 0)]));
}

#[test]
fn resolved_ticket_cannot_be_applied_twice_over_newer_content() {
    let mut panels = PanelsState::default();
    let Toggle::Fetch(first) = panels.toggle(product(1)) else {
        panic!("expected fetch");
    };
    panels.resolve(first, Ok(vec![record("A", 1, 0)]));
    panels.toggle(product(1));
    panels.toggle(product(1));
    assert_eq!(panels.resolve(first, Ok(vec![record("A", 1, 0)])), Resolution::Stale);
    assert_eq!(panels.content(product(1)), PanelContent::Loading);
}

// =============================================================
// forget_kind
// =============================================================

#[test]
fn forget_kind_drops_only_that_kind() {
    let mut panels = PanelsState::default();
    panels.toggle(product(1));
    panels.toggle(location(1));

    panels.forget_kind(EntityKind::Product);

    assert_eq!(panels.len(), 1);
    assert!(!panels.is_expanded(product(1)));
    assert!(panels.is_expanded(location(1)));
}

#[test]
fn ticket_from_forgotten_panel_does_not_match_recreated_panel() {
    let mut panels = PanelsState::default();
    let Toggle::Fetch(old) = panels.toggle(product(1)) else {
        panic!("expected fetch");
    };
    panels.forget_kind(EntityKind::Product);
    assert_eq!(panels.resolve(old, Ok(Vec::new())), Resolution::Stale);

    panels.toggle(product(1));
    assert_eq!(panels.resolve(old, Ok(vec![record("Ghost", 1, 0)])), Resolution::Stale);
    assert_eq!(panels.content(product(1)), PanelContent::Loading);
}

// =============================================================
// PanelKey
// =============================================================

#[test]
fn dom_id_names_kind_and_id() {
    assert_eq!(product(1).dom_id(), "product-inventory-1");
    assert_eq!(location(12).dom_id(), "location-inventory-12");
}
