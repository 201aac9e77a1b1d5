/// "1000000" -> "1,000,000"
pub fn group_digits(value: u64) -> String {
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

/// USD amount with grouped thousands and 2 decimals ($1,247.83).
pub fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let abs = value.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;
    // 0.999 rounds up into the next whole dollar
    let (whole, cents) = if cents == 100 { (whole + 1, 0) } else { (whole, cents) };
    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_digits(whole), cents)
}

/// Unit price with "Trader Precision".
/// - Large (>=1000): 2 decimals ($95,123.50)
/// - Medium (1-1000): 2 decimals ($12.48)
/// - Small (<1): enough decimals to see sub-penny prices ($0.00000231)
pub fn format_price(price: f64) -> String {
    let abs_price = price.abs();

    if abs_price == 0.0 {
        "$0.00".to_string()
    } else if abs_price >= 1000.0 {
        format_usd(price)
    } else if abs_price >= 1.0 {
        format!("${:.2}", price)
    } else if abs_price >= 0.01 {
        format!("${:.4}", price)
    } else {
        // Sub-penny / meme coins: 8 decimals needed to see movement
        format!("${:.8}", price)
    }
}

/// Signed percent badge text: "+12.5%", "-3.2%", "+0%".
pub fn format_change(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{}%", pct)
    } else {
        format!("{}%", pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(750_000), "750,000");
        assert_eq!(group_digits(2_000_000), "2,000,000");
    }

    #[test]
    fn formats_usd_amounts() {
        assert_eq!(format_usd(1247.83), "$1,247.83");
        assert_eq!(format_usd(50_000.0), "$50,000.00");
        assert_eq!(format_usd(0.999), "$1.00");
        assert_eq!(format_usd(-12.5), "-$12.50");
    }

    #[test]
    fn formats_prices_by_magnitude() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(2.5), "$2.50");
        assert_eq!(format_price(0.05), "$0.0500");
        assert_eq!(format_price(0.0021), "$0.00210000");
    }

    #[test]
    fn formats_signed_change() {
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(-3.2), "-3.2%");
        assert_eq!(format_change(0.0), "+0%"); // zero renders as a gain, matching the badge
    }
}
