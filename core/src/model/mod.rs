// core/src/model/mod.rs

//! Catalog records the cart copies from, and the line items it persists.

pub mod line_item;
pub mod product;

pub use line_item::CartLineItem;
pub use product::CatalogProduct;
