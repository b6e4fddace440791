//! Shared REST wire model for the inventory catalog service.
//!
//! This crate owns the JSON representation used by both `client` and `cli`.
//! It also owns the endpoint paths, so the browser and the command line
//! always talk to the same routes.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Path of the token exchange endpoint.
pub const LOGIN_PATH: &str = "/auth/token";

/// Which side of the catalog an entity belongs to.
///
/// Product and location panels behave identically; this enum carries the
/// only two things that differ between them: the endpoint segment and the
/// label of the counterpart shown in each inventory row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Product,
    Location,
}

impl EntityKind {
    /// Path of the list endpoint for this kind.
    #[must_use]
    pub fn list_path(self) -> &'static str {
        match self {
            Self::Product => "/products",
            Self::Location => "/locations",
        }
    }

    /// Path of the inventory breakdown endpoint for one entity of this kind.
    #[must_use]
    pub fn inventory_path(self, id: i64) -> String {
        match self {
            Self::Product => format!("/inventory/by-product/{id}"),
            Self::Location => format!("/inventory/by-location/{id}"),
        }
    }

    /// Label of the entity on the other side of an inventory row.
    #[must_use]
    pub fn counterpart_label(self) -> &'static str {
        match self {
            Self::Product => "Location",
            Self::Location => "Product",
        }
    }

    /// Lowercase name, used for element ids and log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Location => "location",
        }
    }
}

/// A summary record returned by one of the list endpoints.
pub trait Entity: Clone + PartialEq + for<'de> Deserialize<'de> + 'static {
    /// Which list this entity comes from.
    const KIND: EntityKind;

    /// Server-assigned identifier.
    fn id(&self) -> i64;
}

/// A catalog product as returned by `GET /products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Stock keeping unit code (e.g. `"TECH-001"`).
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price in USD.
    pub price: f64,
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> i64 {
        self.id
    }
}

/// A storage location as returned by `GET /locations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    pub address: String,
    /// Storage capacity in units.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub capacity: i64,
}

impl Entity for Location {
    const KIND: EntityKind = EntityKind::Location;

    fn id(&self) -> i64 {
        self.id
    }
}

/// One row of an inventory breakdown.
///
/// The by-product endpoint names the location (`location_name`) and the
/// by-location endpoint names the product (`product_name`); both land in
/// `counterpart_name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(alias = "location_name", alias = "product_name")]
    pub counterpart_name: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub quantity: i64,
    /// Quantity below which restocking is needed.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub reorder_point: i64,
    pub in_stock: bool,
    pub needs_reorder: bool,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub location_id: Option<i64>,
}

/// Credentials posted to [`LOGIN_PATH`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile of the authenticated user, embedded in the token response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserProfile {
    /// `"{first} {last}"`, trimmed when either part is empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Successful response of [`LOGIN_PATH`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserProfile,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Join a base URL and an absolute endpoint path without doubling slashes.
#[must_use]
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Value of the `Authorization` header for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
