//! Currency rendering for messages shown to requesters and auditors.

/// Render an amount as Brazilian reais: `R$ 15.000,00`, `-R$ 0,05`.
pub fn format_brl(value: f64) -> String {
  let cents = (value * 100.0).round() as i64;
  let sign = if cents < 0 { "-" } else { "" };
  let cents = cents.unsigned_abs();
  let whole = (cents / 100).to_string();
  let frac = cents % 100;

  let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
  for (i, ch) in whole.chars().enumerate() {
    if i > 0 && (whole.len() - i) % 3 == 0 {
      grouped.push('.');
    }
    grouped.push(ch);
  }

  format!("{}R$ {},{:02}", sign, grouped, frac)
}
