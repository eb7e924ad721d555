// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use giftess_cart::{BadgeView, CartError, CartLineItem, CartManager, CatalogProduct, KeyValueStore, MemoryStore};
use parking_lot::Mutex;
use std::sync::{
  atomic::{AtomicBool, AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Catalog Fixtures ---
pub fn product(id: &str, price: u64) -> CatalogProduct {
  CatalogProduct::new(id, format!("Product {id}"), price).with_photo(format!("https://cdn.example/{id}.jpg"))
}

pub fn line_item(id: &str, price: u64, quantity: u32) -> CartLineItem {
  CartLineItem {
    product_id: id.to_string(),
    name: format!("Product {id}"),
    unit_price: price,
    photo_url: None,
    quantity,
  }
}

pub fn memory_cart() -> (Arc<MemoryStore>, CartManager) {
  let store = Arc::new(MemoryStore::new());
  let cart = CartManager::new(store.clone());
  (store, cart)
}

// --- Recording Badge Sink ---
#[derive(Clone, Default)]
pub struct RecordingBadge {
  views: Arc<Mutex<Vec<BadgeView>>>,
}

impl RecordingBadge {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn views(&self) -> Vec<BadgeView> {
    self.views.lock().clone()
  }

  pub fn counts(&self) -> Vec<u64> {
    self.views.lock().iter().map(|v| v.count).collect()
  }

  pub fn last(&self) -> Option<BadgeView> {
    self.views.lock().last().copied()
  }
}

impl giftess_cart::BadgeSink for RecordingBadge {
  fn refresh(&self, view: &BadgeView) {
    tracing::debug!(target: "test_badges", count = view.count, "badge refreshed");
    self.views.lock().push(*view);
  }
}

// --- Store Whose Failures Can Be Switched On ---
#[derive(Default)]
pub struct FlakyStore {
  inner: MemoryStore,
  pub fail_reads: AtomicBool,
  pub fail_writes: AtomicBool,
  pub writes_attempted: AtomicUsize,
}

impl FlakyStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set_fail_reads(&self, fail: bool) {
    self.fail_reads.store(fail, Ordering::SeqCst);
  }

  pub fn set_fail_writes(&self, fail: bool) {
    self.fail_writes.store(fail, Ordering::SeqCst);
  }

  pub fn raw(&self, key: &str) -> Option<String> {
    self.inner.read(key).unwrap()
  }
}

impl KeyValueStore for FlakyStore {
  fn read(&self, key: &str) -> Result<Option<String>, CartError> {
    if self.fail_reads.load(Ordering::SeqCst) {
      tracing::warn!(target: "test_store", key, "failing read");
      return Err(CartError::storage(key, anyhow::anyhow!("storage unavailable")));
    }
    self.inner.read(key)
  }

  fn write(&self, key: &str, value: &str) -> Result<(), CartError> {
    self.writes_attempted.fetch_add(1, Ordering::SeqCst);
    if self.fail_writes.load(Ordering::SeqCst) {
      tracing::warn!(target: "test_store", key, "failing write");
      return Err(CartError::storage(key, anyhow::anyhow!("quota exceeded")));
    }
    self.inner.write(key, value)
  }

  fn remove(&self, key: &str) -> Result<(), CartError> {
    self.inner.remove(key)
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Global refresh counter, for sinks that must be 'static fn-like ---
pub static BADGE_REFRESH_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn counting_badge(view: &BadgeView) {
  let _ = view;
  BADGE_REFRESH_COUNTER.fetch_add(1, Ordering::SeqCst);
}

pub fn reset_counters() {
  BADGE_REFRESH_COUNTER.store(0, Ordering::SeqCst);
}
