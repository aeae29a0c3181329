//! Display formatting for prices and floor areas.

/// Format a price in złoty with non-breaking-space thousands grouping,
/// e.g. `492540` → `"492 540 zł"`.
#[must_use]
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    grouped.push_str("\u{a0}zł");
    grouped
}

/// Format a floor area in square meters, e.g. `45.5` → `"45.5 m²"`.
#[must_use]
pub fn format_area(area: f64) -> String {
    format!("{area} m²")
}
