//! Number formatting utilities shared by every display component.
//!
//! Both formatters are total over `i64`: any integer, including `i64::MIN`,
//! produces a string.

mod compact;
mod grouped;

pub use compact::{format_compact, format_compact_with};
pub use grouped::{format_grouped, format_grouped_with, DEFAULT_SEPARATOR};

/// Format an amount either compactly (K/M suffixes) or with digit grouping.
pub fn format_amount(amount: i64, compact: bool, separator: char) -> String {
    if compact {
        format_compact_with(amount, separator)
    } else {
        format_grouped_with(amount, separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_dispatches_on_compact() {
        assert_eq!(format_amount(1500, false, ','), "1,500");
        assert_eq!(format_amount(1500, true, ','), "1.5K");
    }

    #[test]
    fn test_format_amount_uses_separator_for_small_compact_values() {
        assert_eq!(format_amount(-12_345, true, '.'), "-12.345");
        assert_eq!(format_amount(999, true, '.'), "999");
    }
}
