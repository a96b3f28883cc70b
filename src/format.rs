fn format_with_commas(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `1234.5` becomes `S/ 1,234.50`.
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{}S/ {}.{:02}",
        sign,
        format_with_commas(cents / 100),
        cents % 100
    )
}

pub fn format_period(year: i32, month: u32) -> String {
    format!("{year}-{month:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_get_separators_and_cents() {
        assert_eq!(format_amount(0.0), "S/ 0.00");
        assert_eq!(format_amount(1234.5), "S/ 1,234.50");
        assert_eq!(format_amount(1_000_000.0), "S/ 1,000,000.00");
        assert_eq!(format_amount(-12.5), "-S/ 12.50");
        assert_eq!(format_amount(999.999), "S/ 1,000.00");
    }

    #[test]
    fn periods_are_zero_padded() {
        assert_eq!(format_period(2024, 6), "2024-06");
    }
}
