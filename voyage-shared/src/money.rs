/// Render an amount in minor units for display, e.g. `65900` in `usd` as `$659.00`.
///
/// Only two-decimal currencies are supported; unknown codes are shown as an upper-case suffix.
pub fn format_minor_units(amount: i64, currency: &str) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    let units = group_thousands(abs / 100);
    let cents = abs % 100;

    match currency.to_ascii_lowercase().as_str() {
        "usd" | "cad" | "aud" => format!("{}${}.{:02}", sign, units, cents),
        "eur" => format!("{}€{}.{:02}", sign, units, cents),
        "gbp" => format!("{}£{}.{:02}", sign, units, cents),
        other => format!("{}{}.{:02} {}", sign, units, cents, other.to_ascii_uppercase()),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
