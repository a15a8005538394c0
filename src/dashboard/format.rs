//! Display formatting for dashboard figures.

/// Format a whole-rupee amount with Indian digit grouping: the last three
/// digits form one group, every pair after that gets its own separator
/// (₹1,02,00,000).
pub fn format_inr(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::new();
    let head_len = if digits.len() > 3 {
        let head = &digits[..digits.len() - 3];
        // Group the head in pairs from the right.
        let first = head.len() % 2;
        if first == 1 {
            grouped.push_str(&head[..1]);
        }
        for (i, chunk) in head.as_bytes()[first..].chunks(2).enumerate() {
            if i > 0 || first == 1 {
                grouped.push(',');
            }
            grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
        }
        grouped.push(',');
        digits.len() - 3
    } else {
        0
    };
    grouped.push_str(&digits[head_len..]);

    let sign = if negative { "-" } else { "" };
    format!("{sign}₹{grouped}")
}

/// Format `value` as a share of `total`, with one decimal place.
///
/// A zero total renders as 0.0% rather than dividing by zero.
pub fn format_percentage(value: u32, total: u32) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    let percentage = (value as f64 / total as f64) * 100.0;
    format!("{percentage:.1}%")
}
