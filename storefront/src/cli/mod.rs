// storefront/src/cli/mod.rs

pub mod commands;

use clap::{Parser, Subcommand};

/// Giftess cart, from the command line.
#[derive(Debug, Parser)]
#[command(name = "giftess", version, about)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Add a product to the cart (merges with an existing line item).
  Add {
    id: String,
    name: String,
    /// Unit price in whole rupees.
    price: u64,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    qty: u32,
    #[arg(long)]
    photo: Option<String>,
    /// Pre-sale price in whole rupees, used to show the discount.
    #[arg(long)]
    old_price: Option<u64>,
  },
  /// Remove a product from the cart.
  Remove { id: String },
  /// Set a line item's quantity; anything below 1 removes it.
  Update {
    id: String,
    #[arg(allow_negative_numbers = true)]
    qty: i64,
  },
  /// Empty the cart.
  Clear,
  /// Print line items and the checkout summary.
  Show {
    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
  },
}
