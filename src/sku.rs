//! Client for the product-catalog API.
//!
//! The catalog has shipped two response shapes for the same endpoint: an
//! older one listing attribute values directly, and a newer one listing a
//! SKU set with shade names held in a separate lookup. [`ProductResponse`]
//! accepts either and normalizes both into [`Sku`] records.

use serde::Deserialize;

use std::collections::HashMap;

use crate::error::SkuError;

/// Base URL of the catalog endpoint; the product identifier is appended.
pub const DEFAULT_API_BASE: &str = "https://dev.shopalyst.com/shopalyst-service/v1/products/";

/// Placeholder for fields a response shape does not carry.
const MISSING: &str = "N/A";

/// A product response in either of the catalog's two known shapes.
///
/// The SKU-set shape is tried first, so a response carrying both shapes
/// resolves to the richer one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductResponse {
    /// Newer shape: SKU set plus a shade-title lookup keyed by shade id.
    Skus {
        #[serde(rename = "skuSet")]
        sku_set: Vec<SkuEntry>,
        #[serde(rename = "shadeTitles", default)]
        shade_titles: HashMap<String, String>,
    },
    /// Older shape: one entry per attribute value.
    Attributes {
        #[serde(rename = "attributeValues")]
        attribute_values: Vec<AttributeValue>,
    },
}

/// One entry of the SKU-set shape.
#[derive(Debug, Deserialize)]
pub struct SkuEntry {
    #[serde(rename = "skuId")]
    pub sku_id: String,
    #[serde(rename = "shadeId", default)]
    pub shade_id: Option<String>,
    #[serde(rename = "offerPrice", default)]
    pub offer_price: Option<f64>,
    #[serde(default)]
    pub title: Option<String>,
}

/// One entry of the attribute-value shape.
#[derive(Debug, Deserialize)]
pub struct AttributeValue {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// One SKU, normalized from either response shape.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Sku {
    pub sku_id: String,
    pub shade: String,
    pub offer_price: String,
    pub title: String,
}

impl ProductResponse {
    /// Normalizes the response into one [`Sku`] per variant, substituting
    /// `N/A` for anything the shape does not carry (the attribute-value
    /// shape has no prices; a SKU entry may name a shade the lookup does
    /// not know).
    #[must_use]
    pub fn sku_details(&self) -> Vec<Sku> {
        match self {
            Self::Skus {
                sku_set,
                shade_titles,
            } => sku_set
                .iter()
                .map(|entry| Sku {
                    sku_id: entry.sku_id.clone(),
                    shade: entry
                        .shade_id
                        .as_ref()
                        .and_then(|id| shade_titles.get(id))
                        .cloned()
                        .unwrap_or_else(|| MISSING.to_string()),
                    offer_price: entry
                        .offer_price
                        .map_or_else(|| MISSING.to_string(), |price| format!("{price:.2}")),
                    title: entry.title.clone().unwrap_or_else(|| MISSING.to_string()),
                })
                .collect(),
            Self::Attributes { attribute_values } => attribute_values
                .iter()
                .map(|item| Sku {
                    sku_id: item.id.clone().unwrap_or_else(|| MISSING.to_string()),
                    shade: item.value.clone().unwrap_or_else(|| MISSING.to_string()),
                    offer_price: MISSING.to_string(),
                    title: item.title.clone().unwrap_or_else(|| MISSING.to_string()),
                })
                .collect(),
        }
    }
}

/// Fetches the product with `product_id` from the catalog at `api_base`.
///
/// Issues a single blocking GET; no retries.
///
/// # Errors
///
/// Returns [`SkuError::Http`] if the request fails or the server answers
/// with a non-2xx status, and [`SkuError::Decode`] if the body matches
/// neither known shape.
pub fn fetch_product(api_base: &str, product_id: &str) -> Result<ProductResponse, SkuError> {
    let url = format!("{api_base}{product_id}");
    let response = reqwest::blocking::get(&url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(|source| SkuError::Http {
            url: url.clone(),
            source,
        })?;
    response.json().map_err(|source| SkuError::Decode { url, source })
}

/// Renders SKU details in the fixed block format:
///
/// ```txt
/// --------------------------
/// Product 1
/// skuId : S1
/// shade : Rosewood
/// offerPrice : 499.00
/// title : Matte Lipstick
/// ```
///
/// with a blank line after each block.
#[must_use]
pub fn format_sku_details(skus: &[Sku]) -> String {
    let mut out = String::new();
    for (i, sku) in skus.iter().enumerate() {
        out.push_str("--------------------------\n");
        out.push_str(&format!("Product {}\n", i + 1));
        out.push_str(&format!("skuId : {}\n", sku.sku_id));
        out.push_str(&format!("shade : {}\n", sku.shade));
        out.push_str(&format!("offerPrice : {}\n", sku.offer_price));
        out.push_str(&format!("title : {}\n", sku.title));
        out.push('\n');
    }
    out
}
