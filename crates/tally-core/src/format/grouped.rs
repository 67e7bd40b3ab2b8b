/// Separator used when no locale preference is configured (en-US style).
pub const DEFAULT_SEPARATOR: char = ',';

/// Format an integer with thousands separators, e.g. `1234567` -> `"1,234,567"`.
pub fn format_grouped(n: i64) -> String {
    format_grouped_with(n, DEFAULT_SEPARATOR)
}

/// Format an integer with the given thousands separator.
///
/// The sign is kept in front of the grouped magnitude.
pub fn format_grouped_with(n: i64, separator: char) -> String {
    // unsigned_abs keeps i64::MIN representable
    let digits = n.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        result.push('-');
    }

    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}
