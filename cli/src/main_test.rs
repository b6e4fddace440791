use super::*;

fn record(name: &str, quantity: i64, needs_reorder: bool) -> InventoryRecord {
    InventoryRecord {
        counterpart_name: name.to_owned(),
        quantity,
        reorder_point: 5,
        in_stock: quantity > 0,
        needs_reorder,
        product_id: None,
        location_id: None,
    }
}

#[test]
fn low_stock_keeps_only_reorder_rows_in_order() {
    let rows = vec![record("A", 0, true), record("B", 40, false), record("C", 3, true)];
    let names: Vec<&str> = low_stock_rows(&rows).map(|r| r.counterpart_name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
}

#[test]
fn low_stock_empty_when_nothing_flagged() {
    let rows = vec![record("A", 10, false)];
    assert_eq!(low_stock_rows(&rows).count(), 0);
}

#[test]
fn low_stock_line_names_product_and_location() {
    let product = Product {
        id: 1,
        sku: "S1".to_owned(),
        name: "Widget".to_owned(),
        description: None,
        price: 9.5,
    };
    assert_eq!(
        low_stock_line(&product, &record("Warehouse", 0, true)),
        "Widget (S1) @ Warehouse: qty 0 (reorder at 5)"
    );
}

#[test]
fn inventory_subcommand_maps_to_kind() {
    assert_eq!(InventorySubcommand::Product { id: 3 }.target(), (EntityKind::Product, 3));
    assert_eq!(InventorySubcommand::Location { id: 7 }.target(), (EntityKind::Location, 7));
}

#[test]
fn cli_parses_inventory_location() {
    let cli = Cli::try_parse_from(["stockroom-cli", "--token", "t1", "inventory", "location", "4"]).unwrap();
    assert_eq!(cli.token.as_deref(), Some("t1"));
    match cli.command {
        Command::Inventory(inv) => assert_eq!(inv.command.target(), (EntityKind::Location, 4)),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn server_message_prefers_detail() {
    assert_eq!(server_message(&serde_json::json!({"detail": "Not authenticated"})), "Not authenticated");
    assert_eq!(server_message(&Value::Null), "null");
}

#[test]
fn missing_token_message_names_flag_and_env() {
    assert_eq!(
        CliError::MissingToken.to_string(),
        "missing token; pass --token or set STOCKROOM_TOKEN"
    );
}

#[test]
fn success_body_must_be_json() {
    let err = parse_body(200, "<html>gateway</html>", "/products").unwrap_err();
    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[test]
fn success_body_parses() {
    let value = parse_body(200, r#"[{"id":1}]"#, "/products").unwrap();
    assert_eq!(value, serde_json::json!([{"id": 1}]));
}

#[test]
fn error_status_uses_detail_or_raw_text() {
    match parse_body(401, r#"{"detail":"Not authenticated"}"#, "/products").unwrap_err() {
        CliError::ServerError { status, path, message } => {
            assert_eq!(status, 401);
            assert_eq!(path, "/products");
            assert_eq!(message, "Not authenticated");
        }
        other => panic!("unexpected error: {other}"),
    }
    match parse_body(502, " Bad Gateway \n", "/locations").unwrap_err() {
        CliError::ServerError { message, .. } => assert_eq!(message, "Bad Gateway"),
        other => panic!("unexpected error: {other}"),
    }
}
