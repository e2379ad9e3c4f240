//! Formatting utilities used for letter content and CLI outputs.

/// Group an amount with Indian digit grouping: the last three digits form
/// one group, every group above that has two digits.
/// 1200000 -> "12,00,000"
pub fn group_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail.to_string()];

    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right.to_string());
        rest = left;
    }
    groups.push(rest.to_string());

    groups.reverse();
    groups.join(",")
}

/// Salary as it appears in the letter's detail line.
pub fn format_salary(amount: i64) -> String {
    format!("₹{} per annum", group_inr(amount))
}

/// Split a "Label: value" detail line on its first delimiter.
/// Only the first ": " splits; any further occurrence stays inside the
/// value half. A line without the delimiter yields an empty value.
pub fn split_detail(line: &str) -> (&str, &str) {
    match line.split_once(": ") {
        Some((label, value)) => (label, value),
        None => (line, ""),
    }
}

/// Substitute the placeholder for fields the admin left empty.
pub fn or_tbd(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { "TBD" } else { trimmed }
}
