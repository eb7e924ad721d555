// core/src/model/product.rs

use serde::{Deserialize, Serialize};

/// A catalog product as supplied by the product-loading collaborator.
/// Prices are integers in the catalog's currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
  pub id: String,
  pub name: String,
  pub price_sale: u64,
  #[serde(default)]
  pub price_old: Option<u64>,
  #[serde(default)]
  pub photos: Vec<String>,
}

impl CatalogProduct {
  pub fn new(id: impl Into<String>, name: impl Into<String>, price_sale: u64) -> Self {
    Self {
      id: id.into(),
      name: name.into(),
      price_sale,
      price_old: None,
      photos: Vec::new(),
    }
  }

  pub fn with_photo(mut self, url: impl Into<String>) -> Self {
    self.photos.push(url.into());
    self
  }

  pub fn with_old_price(mut self, price_old: u64) -> Self {
    self.price_old = Some(price_old);
    self
  }

  /// The photo shown in the cart: the first non-empty catalog photo.
  pub fn primary_photo(&self) -> Option<&str> {
    self.photos.first().map(String::as_str).filter(|url| !url.is_empty())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn primary_photo_is_first_entry() {
    let product = CatalogProduct::new("p1", "Mug", 29900)
      .with_photo("https://cdn.example/mug-front.jpg")
      .with_photo("https://cdn.example/mug-back.jpg");
    assert_eq!(product.primary_photo(), Some("https://cdn.example/mug-front.jpg"));
  }

  #[test]
  fn empty_first_photo_counts_as_missing() {
    let product = CatalogProduct::new("p1", "Mug", 29900).with_photo("");
    assert_eq!(product.primary_photo(), None);
  }

  #[test]
  fn backend_row_without_optional_fields_deserializes() {
    let product: CatalogProduct =
      serde_json::from_str(r#"{"id":"p9","name":"Candle","price_sale":45000}"#).unwrap();
    assert_eq!(product.price_old, None);
    assert!(product.photos.is_empty());
  }
}
