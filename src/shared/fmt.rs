//! Number formatting for human-readable display.
//!
//! Amounts are whole won, so there is no fractional part to deal with.

/// Adds thousands separators: `31800` → `"31,800"`.
pub fn format_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();

    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an amount with the won suffix: `31800` → `"31,800원"`.
pub fn display_won(amount: i64) -> String {
    format!("{}원", format_thousands(amount))
}
