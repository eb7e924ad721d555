// core/src/cart.rs

//! The Cart Manager: the authoritative list of line items for a session.
//!
//! The store is the source of truth. Every operation reads the persisted
//! list, applies its change and writes the whole list back, so the stored
//! representation and what callers see never diverge. Store failures never
//! reach the caller: a failed read yields an empty cart and a failed write is
//! logged and dropped (the next read reflects the last successful write).

use std::sync::Arc;
use tracing::{event, instrument, Level};

use crate::badge::{BadgeSink, BadgeView};
use crate::error::CartResult;
use crate::model::{CartLineItem, CatalogProduct};
use crate::store::KeyValueStore;

/// The fixed key the cart is persisted under.
pub const CART_KEY: &str = "giftess_cart";

pub struct CartManager {
  store: Arc<dyn KeyValueStore>,
  sinks: Vec<Box<dyn BadgeSink>>,
}

impl std::fmt::Debug for CartManager {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartManager")
      .field("sinks", &self.sinks.len())
      .finish_non_exhaustive()
  }
}

impl CartManager {
  pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
    Self {
      store,
      sinks: Vec::new(),
    }
  }

  /// Registers a badge sink. Sinks are refreshed in registration order.
  pub fn with_badge(mut self, sink: impl BadgeSink + 'static) -> Self {
    self.sinks.push(Box::new(sink));
    self
  }

  pub fn add_badge(&mut self, sink: impl BadgeSink + 'static) {
    self.sinks.push(Box::new(sink));
  }

  /// Current snapshot, in insertion order.
  pub fn get(&self) -> Vec<CartLineItem> {
    match self.load() {
      Ok(items) => items,
      Err(e) => {
        event!(Level::ERROR, error = %e, "Failed to read cart; treating it as empty.");
        Vec::new()
      }
    }
  }

  /// Replaces the whole cart. Zero-quantity entries are dropped and repeated
  /// product ids are merged into the first occurrence.
  #[instrument(level = "debug", skip_all, fields(items = items.len()))]
  pub fn set(&self, items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    self.commit(normalize(items))
  }

  /// Adds `quantity` of `product`, merging into an existing line item.
  #[instrument(level = "debug", skip(self, product), fields(product_id = %product.id))]
  pub fn add(&self, product: &CatalogProduct, quantity: u32) -> Vec<CartLineItem> {
    if quantity == 0 {
      event!(Level::DEBUG, "Ignoring add with zero quantity.");
      return self.get();
    }

    let mut items = self.get();
    match items.iter_mut().find(|item| item.product_id == product.id) {
      Some(existing) => {
        existing.quantity = existing.quantity.saturating_add(quantity);
        event!(Level::DEBUG, quantity = existing.quantity, "Merged into existing line item.");
      }
      None => {
        items.push(CartLineItem::from_product(product, quantity));
        event!(Level::DEBUG, quantity, "Appended new line item.");
      }
    }
    self.commit(items)
  }

  /// `add(product, 1)`.
  pub fn add_one(&self, product: &CatalogProduct) -> Vec<CartLineItem> {
    self.add(product, 1)
  }

  #[instrument(level = "debug", skip(self))]
  pub fn remove(&self, product_id: &str) -> Vec<CartLineItem> {
    let mut items = self.get();
    let before = items.len();
    items.retain(|item| item.product_id != product_id);
    if items.len() == before {
      event!(Level::DEBUG, "Product not in cart; nothing removed.");
    }
    self.commit(items)
  }

  /// Sets the quantity of a line item. Anything below 1 removes the item.
  #[instrument(level = "debug", skip(self))]
  pub fn update_quantity(&self, product_id: &str, new_quantity: i64) -> Vec<CartLineItem> {
    if new_quantity < 1 {
      return self.remove(product_id);
    }

    let mut items = self.get();
    let Some(item) = items.iter_mut().find(|item| item.product_id == product_id) else {
      event!(Level::DEBUG, "Product not in cart; quantity unchanged.");
      return items;
    };
    item.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX).max(1);
    self.commit(items)
  }

  #[instrument(level = "debug", skip(self))]
  pub fn clear(&self) -> Vec<CartLineItem> {
    self.commit(Vec::new())
  }

  /// Sum of all quantities.
  pub fn count(&self) -> u64 {
    count_of(&self.get())
  }

  /// Sum of `unit_price * quantity`, in minor currency units.
  pub fn total(&self) -> u64 {
    total_of(&self.get())
  }

  pub fn is_empty(&self) -> bool {
    self.get().is_empty()
  }

  /// Pushes the current count to every badge sink.
  pub fn refresh_badges(&self) {
    self.notify(count_of(&self.get()));
  }

  // Rows that no longer deserialize are dropped one by one; the rest of the
  // cart survives. A payload that is not a JSON array at all is an error.
  fn load(&self) -> CartResult<Vec<CartLineItem>> {
    let Some(raw) = self.store.read(CART_KEY)? else {
      return Ok(Vec::new());
    };
    let rows: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
    let items = rows
      .into_iter()
      .enumerate()
      .filter_map(|(index, row)| match serde_json::from_value::<CartLineItem>(row) {
        Ok(item) => Some(item),
        Err(e) => {
          event!(Level::WARN, index, error = %e, "Dropping unreadable cart row.");
          None
        }
      })
      .collect();
    Ok(normalize(items))
  }

  fn save(&self, items: &[CartLineItem]) -> CartResult<()> {
    let raw = serde_json::to_string(items)?;
    self.store.write(CART_KEY, &raw)
  }

  // Persists `items` and refreshes badges. On a failed write the caller gets
  // whatever the store still holds, never the unsaved list.
  fn commit(&self, items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let snapshot = match self.save(&items) {
      Ok(()) => items,
      Err(e) => {
        event!(Level::WARN, error = %e, "Failed to persist cart; keeping last saved state.");
        self.get()
      }
    };
    self.notify(count_of(&snapshot));
    snapshot
  }

  fn notify(&self, count: u64) {
    let view = BadgeView::from_count(count);
    for sink in &self.sinks {
      sink.refresh(&view);
    }
  }
}

/// Drops zero-quantity entries and merges repeated product ids into their
/// first occurrence, keeping insertion order.
pub fn normalize(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
  let mut normalized: Vec<CartLineItem> = Vec::with_capacity(items.len());
  for item in items.into_iter().filter(|item| item.quantity > 0) {
    match normalized.iter_mut().find(|existing| existing.product_id == item.product_id) {
      Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
      None => normalized.push(item),
    }
  }
  normalized
}

pub fn count_of(items: &[CartLineItem]) -> u64 {
  items.iter().map(|item| u64::from(item.quantity)).sum()
}

pub fn total_of(items: &[CartLineItem]) -> u64 {
  items
    .iter()
    .fold(0u64, |acc, item| acc.saturating_add(item.line_total()))
}
