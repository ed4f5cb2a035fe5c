//! Rupee display formatting.

/// Render an amount with Indian digit grouping, e.g. `₹12,34,567`.
///
/// Groups of two after the final group of three, matching `en-IN` locale
/// output with no fraction digits.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::new();
    let head_bytes = head.as_bytes();
    let mut index = head_bytes.len() % 2;
    if index == 1 {
        grouped.push(head_bytes[0] as char);
    }
    while index < head_bytes.len() {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        grouped.push(head_bytes[index] as char);
        grouped.push(head_bytes[index + 1] as char);
        index += 2;
    }
    format!("₹{grouped},{tail}")
}
