//! Display strings for catalog rows and inventory panels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use catalog::{EntityKind, InventoryRecord, Location, Product};

/// Heading for a product row: `"Widget (S1)"`.
pub fn product_title(product: &Product) -> String {
    format!("{} ({})", product.name, product.sku)
}

/// `"Price: $9.50"`.
pub fn price_label(price: f64) -> String {
    format!("Price: ${price:.2}")
}

/// `"Capacity: 5000"`.
pub fn capacity_label(location: &Location) -> String {
    format!("Capacity: {}", location.capacity)
}

/// Counterpart line of an inventory row, e.g. `"Location: Warehouse"`.
pub fn counterpart_line(kind: EntityKind, record: &InventoryRecord) -> String {
    format!("{}: {}", kind.counterpart_label(), record.counterpart_name)
}

/// `"Qty: 0 | Reorder @ 5"`.
pub fn quantity_line(record: &InventoryRecord) -> String {
    format!("Qty: {} | Reorder @ {}", record.quantity, record.reorder_point)
}

/// Stock glyph; exactly one of in/out of stock.
pub fn stock_glyph(record: &InventoryRecord) -> &'static str {
    if record.in_stock { "✅ In Stock" } else { "❌ Out of Stock" }
}

/// Reorder warning, independent of stock status.
pub fn reorder_glyph(record: &InventoryRecord) -> Option<&'static str> {
    record.needs_reorder.then_some("⚠️ Needs Reorder")
}

/// Full status line, e.g. `"❌ Out of Stock ⚠️ Needs Reorder"`.
pub fn stock_status_line(record: &InventoryRecord) -> String {
    match reorder_glyph(record) {
        Some(warning) => format!("{} {warning}", stock_glyph(record)),
        None => stock_glyph(record).to_owned(),
    }
}
