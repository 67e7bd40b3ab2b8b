use tally_core::*;

fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect()
}

#[test]
fn test_grouping_keeps_digits_and_sign() {
    for n in [0i64, 7, -7, 999, 1000, -1000, 65_536, -4_294_967_296, i64::MAX, i64::MIN] {
        let grouped = format_grouped(n);
        assert_eq!(digits_only(&grouped), n.to_string(), "value {n}");

        // every group after the first holds exactly three digits
        let magnitude = grouped.trim_start_matches('-');
        let groups: Vec<&str> = magnitude.split(',').collect();
        assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        assert!(groups[1..].iter().all(|g| g.len() == 3));
    }
}

#[test]
fn test_compact_thousands_range() {
    for n in (1000..1_000_000).step_by(7919) {
        let tenths = n / 100;
        let expected = if tenths % 10 == 0 {
            format!("{}K", tenths / 10)
        } else {
            format!("{}.{}K", tenths / 10, tenths % 10)
        };
        assert_eq!(format_compact(n), expected, "value {n}");
    }
}

#[test]
fn test_compact_millions_range() {
    for n in (1_000_000i64..50_000_000).step_by(1_234_567) {
        let text = format_compact(n);
        assert!(text.ends_with('M'), "value {n} -> {text}");
        assert!(!text.contains(".0M"), "value {n} -> {text}");
    }
}

#[test]
fn test_compact_below_thousand_is_plain() {
    for n in -1500..1000 {
        assert_eq!(format_compact(n), format_grouped(n));
    }
}

#[test]
fn test_loading_never_shows_amount_or_icon() {
    for amount in [0, 5, 1500, 2_500_000, -42] {
        for compact in [false, true] {
            for size in DisplaySize::ALL {
                let mode = DisplayMode::new().loading(true).compact(compact).size(size);
                let rendered = render_value(Some(amount), &mode);
                let visible = rendered.to_string();

                assert_eq!(visible, PLACEHOLDER);
                assert!(rendered.text.is_none());
                assert!(rendered.icon.is_none());
                assert!(!visible.contains(DEFAULT_ICON));
            }
        }
    }
}

#[test]
fn test_description_always_has_grouped_amount() {
    for amount in [0, 999, 1000, 1500, 123_456_789, -77_000] {
        for mode in [
            DisplayMode::new(),
            DisplayMode::new().compact(true),
            DisplayMode::new().loading(true),
            DisplayMode::new().label("Gems").size(DisplaySize::Small),
        ] {
            let rendered = render_value(Some(amount), &mode);
            assert!(
                rendered
                    .accessibility
                    .description
                    .contains(&format_grouped(amount)),
                "amount {amount} mode {mode:?}"
            );
        }
    }
}

#[test]
fn test_progress_ratio_in_unit_range() {
    for (current, required) in [(0, 0), (0, 10), (10, 10), (11, 10), (-5, 10), (7, -3)] {
        let rendered = render_progress(
            ProgressValue::new(Some(current), Some(required)),
            &DisplayMode::new(),
        );
        assert!((0.0..=1.0).contains(&rendered.ratio));
        assert!(rendered.percent <= 100);
    }
}
