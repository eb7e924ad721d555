// core/src/badge.rs

//! Badge refresh: the change notification the cart pushes after each mutation.
//!
//! The cart knows nothing about rendering. Anything that displays the item
//! count registers a [`BadgeSink`] and receives a [`BadgeView`] whenever the
//! cart changes.

/// What a count badge should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeView {
  pub count: u64,
  /// Badges are hidden while the cart is empty.
  pub visible: bool,
}

impl BadgeView {
  pub fn from_count(count: u64) -> Self {
    Self {
      count,
      visible: count > 0,
    }
  }
}

pub trait BadgeSink: Send + Sync {
  fn refresh(&self, view: &BadgeView);
}

impl<F> BadgeSink for F
where
  F: Fn(&BadgeView) + Send + Sync,
{
  fn refresh(&self, view: &BadgeView) {
    self(view)
  }
}

/// Logs every refresh; useful for headless front ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBadge;

impl BadgeSink for TracingBadge {
  fn refresh(&self, view: &BadgeView) {
    tracing::info!(count = view.count, visible = view.visible, "Cart badge refreshed.");
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use parking_lot::Mutex;
  use std::sync::Arc;

  #[test]
  fn empty_cart_hides_badge() {
    assert_eq!(BadgeView::from_count(0), BadgeView { count: 0, visible: false });
    assert!(BadgeView::from_count(3).visible);
  }

  #[test]
  fn closures_are_sinks() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    let sink = move |view: &BadgeView| seen_clone.lock().push(view.count);
    sink.refresh(&BadgeView::from_count(4));
    assert_eq!(*seen.lock(), vec![4]);
  }
}
