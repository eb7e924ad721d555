// core/src/checkout.rs

//! Checkout summary: shipping threshold and optional tax on top of the cart
//! subtotal. Shipping fee, threshold and tax rate come from [`StoreSettings`],
//! not from cart state.

use serde::{Deserialize, Serialize};

use crate::cart::CartManager;
use crate::settings::StoreSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
  pub subtotal: u64,
  pub shipping: u64,
  pub tax: u64,
  pub total: u64,
}

impl CheckoutSummary {
  pub fn compute(subtotal: u64, settings: &StoreSettings) -> Self {
    // Threshold is inclusive.
    let shipping = if subtotal >= settings.free_shipping_min {
      0
    } else {
      settings.shipping_fee
    };
    let tax = if settings.tax_enabled {
      tax_on(subtotal, settings.tax_percent)
    } else {
      0
    };
    Self {
      subtotal,
      shipping,
      tax,
      total: subtotal.saturating_add(shipping).saturating_add(tax),
    }
  }

  pub fn for_cart(cart: &CartManager, settings: &StoreSettings) -> Self {
    Self::compute(cart.total(), settings)
  }

  pub fn ships_free(&self) -> bool {
    self.shipping == 0
  }
}

/// `round(subtotal * percent / 100)`, rounding halves up.
///
/// The rate is taken to two decimal places and the rest is integer math, so
/// e.g. 2.5% of 50 is exactly 1.25 and rounds to 1.
pub fn tax_on(subtotal: u64, percent: f64) -> u64 {
  if !percent.is_finite() || percent <= 0.0 {
    return 0;
  }
  // `as` saturates for rates beyond u128; the arithmetic below saturates too.
  let hundredths = (percent * 100.0).round() as u128;
  let tax = u128::from(subtotal)
    .checked_mul(hundredths)
    .and_then(|scaled| scaled.checked_add(5_000))
    .map(|scaled| scaled / 10_000)
    .unwrap_or(u128::MAX);
  u64::try_from(tax).unwrap_or(u64::MAX)
}
