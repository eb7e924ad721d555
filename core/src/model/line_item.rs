// core/src/model/line_item.rs

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::product::CatalogProduct;

/// One product-plus-quantity entry in the cart.
///
/// Name, price and photo are captured when the product is added and are not
/// re-synced with the catalog afterwards. The serialized field names are the
/// persisted layout (`id`, `name`, `price`, `photo`, `quantity`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
  #[serde(rename = "id")]
  pub product_id: String,
  pub name: String,
  #[serde(rename = "price")]
  pub unit_price: u64,
  #[serde(
    rename = "photo",
    default,
    deserialize_with = "empty_string_as_none",
    skip_serializing_if = "Option::is_none"
  )]
  pub photo_url: Option<String>,
  pub quantity: u32,
}

impl CartLineItem {
  pub fn from_product(product: &CatalogProduct, quantity: u32) -> Self {
    Self {
      product_id: product.id.clone(),
      name: product.name.clone(),
      unit_price: product.price_sale,
      photo_url: product.primary_photo().map(str::to_string),
      quantity,
    }
  }

  pub fn line_total(&self) -> u64 {
    self.unit_price.saturating_mul(u64::from(self.quantity))
  }
}

// Older carts stored a missing photo as "".
fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = Option::<String>::deserialize(deserializer)?;
  Ok(raw.filter(|s| !s.is_empty()))
}
