use serde::{Deserialize, Serialize};

/// Placeholder stored for any field the page did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub price: String,
    pub shipping_price: String,
    pub photo_url: String,
    /// Attribute table as `(label, value)` pairs in page order.
    pub details: Vec<(String, String)>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRecord {
    pub name: String,
    pub items_link: String,
}

impl Default for SellerRecord {
    fn default() -> Self {
        Self {
            name: NOT_AVAILABLE.to_string(),
            items_link: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Everything extracted from one listing page. This is also the layout of the archive file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub main_information: ProductRecord,
    pub seller_information: SellerRecord,
}
