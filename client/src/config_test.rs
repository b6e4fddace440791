use super::*;

#[test]
fn with_api_base_trims_trailing_slashes() {
    let cfg = ClientConfig::with_api_base("https://inventory.example.com///");
    assert_eq!(cfg.api_base, "https://inventory.example.com");
}

#[test]
fn with_api_base_blank_uses_default() {
    assert_eq!(ClientConfig::with_api_base("   ").api_base, DEFAULT_API_BASE);
}

#[test]
fn url_joins_endpoint_paths() {
    let cfg = ClientConfig::with_api_base("http://localhost:8000");
    assert_eq!(cfg.url("/inventory/by-product/1"), "http://localhost:8000/inventory/by-product/1");
}
