// core/src/money.rs

/// Formats an amount as Indian rupees with lakh/crore digit grouping,
/// e.g. `123456` becomes `₹1,23,456`.
pub fn format_inr(amount: u64) -> String {
  let digits = amount.to_string();
  if digits.len() <= 3 {
    return format!("₹{digits}");
  }

  let (head, last_three) = digits.split_at(digits.len() - 3);
  // The remaining head is grouped in pairs from the right.
  let mut groups: Vec<&str> = Vec::new();
  let mut end = head.len();
  while end > 0 {
    let start = end.saturating_sub(2);
    groups.push(&head[start..end]);
    end = start;
  }
  groups.reverse();
  format!("₹{},{}", groups.join(","), last_three)
}

/// Percentage saved versus the old price, rounded to the nearest whole
/// percent. Zero when there is no old price or it is not above the sale price.
pub fn discount_percent(price_sale: u64, price_old: Option<u64>) -> u64 {
  match price_old {
    Some(old) if old > price_sale => {
      let saved = u128::from(old - price_sale) * 100;
      let old = u128::from(old);
      // Half-up rounding of saved / old.
      ((saved * 2 + old) / (old * 2)) as u64
    }
    _ => 0,
  }
}
