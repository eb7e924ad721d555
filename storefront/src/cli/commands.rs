// storefront/src/cli/commands.rs

use giftess_cart::{discount_percent, format_inr, CartLineItem, CartManager, CatalogProduct, CheckoutSummary, StoreSettings};
use serde_json::json;
use std::fmt::Write as _;
use tracing::{info, instrument};

use crate::cli::Command;
use crate::errors::{AppError, Result};

/// Runs one cart command and returns what should be printed.
#[instrument(name = "command::run", skip_all)]
pub fn run(command: Command, cart: &CartManager, settings: &StoreSettings) -> Result<String> {
  match command {
    Command::Add { id, name, price, qty, photo, old_price } => {
      if id.trim().is_empty() {
        return Err(AppError::Validation("Product id must not be empty.".to_string()));
      }
      let mut product = CatalogProduct::new(id, name, price);
      if let Some(url) = photo {
        product = product.with_photo(url);
      }
      if let Some(old) = old_price {
        product = product.with_old_price(old);
      }
      let items = cart.add(&product, qty);
      info!(product_id = %product.id, qty, "Added to cart.");

      let discount = discount_percent(product.price_sale, product.price_old);
      let headline = if discount > 0 {
        format!("{} added to cart! ({}% off)", product.name, discount)
      } else {
        format!("{} added to cart!", product.name)
      };
      Ok(format!("{}\n{}", headline, render_cart(&items, settings)))
    }
    Command::Remove { id } => {
      let items = cart.remove(&id);
      Ok(format!("Item removed from cart\n{}", render_cart(&items, settings)))
    }
    Command::Update { id, qty } => {
      let items = cart.update_quantity(&id, qty);
      Ok(render_cart(&items, settings))
    }
    Command::Clear => {
      cart.clear();
      Ok("Cart cleared".to_string())
    }
    Command::Show { json } => {
      let items = cart.get();
      if json {
        render_json(&items, settings)
      } else {
        Ok(render_cart(&items, settings))
      }
    }
  }
}

pub fn render_cart(items: &[CartLineItem], settings: &StoreSettings) -> String {
  if items.is_empty() {
    return "Your cart is empty".to_string();
  }

  let mut out = String::new();
  for item in items {
    let _ = writeln!(
      out,
      "{:<12} {:<24} {:>10} x {:<4} {:>12}",
      item.product_id,
      item.name,
      format_inr(item.unit_price),
      item.quantity,
      format_inr(item.line_total())
    );
  }

  let summary = CheckoutSummary::compute(giftess_cart::cart::total_of(items), settings);
  let shipping = if summary.ships_free() {
    "FREE".to_string()
  } else {
    format_inr(summary.shipping)
  };
  let _ = writeln!(out, "Subtotal: {}", format_inr(summary.subtotal));
  let _ = writeln!(out, "Shipping: {}", shipping);
  if settings.tax_enabled {
    let _ = writeln!(out, "Tax: {}", format_inr(summary.tax));
  }
  let _ = write!(out, "Total: {}", format_inr(summary.total));
  if !settings.wa_number.is_empty() {
    let _ = write!(out, "\nOrder on WhatsApp: +{}", settings.wa_number);
  }
  out
}

fn render_json(items: &[CartLineItem], settings: &StoreSettings) -> Result<String> {
  let summary = CheckoutSummary::compute(giftess_cart::cart::total_of(items), settings);
  let doc = json!({
    "items": items,
    "count": giftess_cart::cart::count_of(items),
    "summary": summary,
  });
  serde_json::to_string_pretty(&doc).map_err(|e| AppError::Internal(format!("Rendering cart as JSON: {}", e)))
}
