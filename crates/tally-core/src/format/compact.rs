use super::grouped::{format_grouped_with, DEFAULT_SEPARATOR};

const THOUSAND: i64 = 1_000;
const MILLION: i64 = 1_000_000;

/// Abbreviate an amount with a K or M suffix.
///
/// Values of at least one thousand keep a single decimal digit, truncated
/// rather than rounded, and a trailing `.0` is dropped: `1500` -> `"1.5K"`,
/// `10000` -> `"10K"`, `2500000` -> `"2.5M"`. Anything below one thousand,
/// negatives included, falls back to grouped formatting.
pub fn format_compact(n: i64) -> String {
    format_compact_with(n, DEFAULT_SEPARATOR)
}

/// Same as [`format_compact`], using `separator` for the grouped fallback.
pub fn format_compact_with(n: i64, separator: char) -> String {
    if n >= MILLION {
        scaled(n, MILLION, 'M')
    } else if n >= THOUSAND {
        scaled(n, THOUSAND, 'K')
    } else {
        format_grouped_with(n, separator)
    }
}

// n is positive and at least `unit` here
fn scaled(n: i64, unit: i64, suffix: char) -> String {
    let tenths = n / (unit / 10);
    let whole = tenths / 10;
    let fraction = tenths % 10;

    if fraction == 0 {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{fraction}{suffix}")
    }
}
