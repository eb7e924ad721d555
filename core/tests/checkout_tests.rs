// tests/checkout_tests.rs
mod common;

use common::*;
use giftess_cart::{format_inr, CheckoutSummary, StoreSettings};

fn settings(fee: u64, free_min: u64, tax: Option<f64>) -> StoreSettings {
  StoreSettings {
    shipping_fee: fee,
    free_shipping_min: free_min,
    tax_enabled: tax.is_some(),
    tax_percent: tax.unwrap_or(0.0),
    ..StoreSettings::default()
  }
}

#[test]
fn test_checkout_below_threshold() {
  setup_tracing();
  let (_store, cart) = memory_cart();
  cart.add(&product("A", 100), 2);
  cart.add(&product("B", 250), 1);

  let summary = CheckoutSummary::for_cart(&cart, &settings(100, 999, None));
  assert_eq!(summary.subtotal, 450);
  assert_eq!(summary.shipping, 100);
  assert_eq!(summary.tax, 0);
  assert_eq!(summary.total, 550);
}

#[test]
fn test_checkout_at_threshold_ships_free() {
  setup_tracing();
  let (_store, cart) = memory_cart();
  cart.add(&product("A", 333), 3);

  let summary = CheckoutSummary::for_cart(&cart, &settings(100, 999, None));
  assert_eq!(summary.subtotal, 999);
  assert!(summary.ships_free());
  assert_eq!(summary.total, 999);
}

#[test]
fn test_checkout_with_tax() {
  setup_tracing();
  let (_store, cart) = memory_cart();
  cart.add(&product("A", 1499), 1);

  // 5% of 1499 = 74.95 -> 75
  let summary = CheckoutSummary::for_cart(&cart, &settings(100, 999, Some(5.0)));
  assert_eq!(summary.shipping, 0);
  assert_eq!(summary.tax, 75);
  assert_eq!(summary.total, 1574);
  assert_eq!(format_inr(summary.total), "₹1,574");
}

#[test]
fn test_checkout_tracks_cart_changes() {
  setup_tracing();
  let (_store, cart) = memory_cart();
  let s = settings(100, 999, None);
  cart.add(&product("A", 500), 2);
  assert_eq!(CheckoutSummary::for_cart(&cart, &s).shipping, 0);

  cart.update_quantity("A", 1);
  assert_eq!(CheckoutSummary::for_cart(&cart, &s).shipping, 100);

  cart.clear();
  let empty = CheckoutSummary::for_cart(&cart, &s);
  assert_eq!(empty.subtotal, 0);
  assert_eq!(empty.total, 100);
}
