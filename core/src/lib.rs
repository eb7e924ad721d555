// src/lib.rs

//! giftess-cart: the client-side shopping cart behind the Giftess storefront.
//!
//! The cart keeps one line item per product, persists the whole list through
//! a [`KeyValueStore`] under a single fixed key, and tells any registered
//! [`BadgeSink`]s about the new item count after every change.
//!
//!  - Adding a product already in the cart merges quantities.
//!  - Quantities below 1 remove the line item.
//!  - Store failures degrade to an empty cart instead of erroring.
//!  - [`CheckoutSummary`] derives shipping, tax and total from the subtotal
//!    and the store's [`StoreSettings`].

pub mod badge;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod model;
pub mod money;
pub mod settings;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::badge::{BadgeSink, BadgeView, TracingBadge};
pub use crate::cart::{CartManager, CART_KEY};
pub use crate::checkout::CheckoutSummary;
pub use crate::error::{CartError, CartResult};
pub use crate::model::{CartLineItem, CatalogProduct};
pub use crate::money::{discount_percent, format_inr};
pub use crate::settings::{load_store_settings, SettingsSource, StaticSettings, StoreSettings};
pub use crate::store::{FileStore, KeyValueStore, MemoryStore};

/*
    Typical wiring:
    1. Open a store (`FileStore::open(dir)` or `MemoryStore::new()`) and wrap it in an `Arc`.
    2. Build `CartManager::new(store)` and attach badge sinks with `.with_badge(...)`.
    3. Drive it from UI events: `add`, `remove`, `update_quantity`, `clear`.
    4. Load `StoreSettings` once with `load_store_settings(&source).await`.
    5. Render from `cart.get()` and `CheckoutSummary::for_cart(&cart, &settings)`.
*/
