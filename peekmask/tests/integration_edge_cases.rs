//! Edge-case coverage for `MaskConfig` string handling.
//!
//! These tests focus on behavior across Unicode scalar values (including
//! multi-byte characters and combining marks) and on boundary cases such as
//! empty inputs, visible windows that meet, and ratios at the threshold.

use peekmask::MaskConfig;

fn scalar_count(value: &str) -> usize {
    value.chars().count()
}

mod empty_and_short_strings {
    use super::*;

    #[test]
    fn returns_empty_for_any_config() {
        for config in [
            MaskConfig::default(),
            MaskConfig::new('#', 0, 0, 0.0),
            MaskConfig::new('#', usize::MAX, 0, 1.0),
        ] {
            assert_eq!(config.apply_to(""), "");
        }
    }

    #[test]
    fn handles_single_character() {
        assert_eq!(MaskConfig::new('*', 0, 0, 0.3).apply_to("x"), "*");
        assert_eq!(MaskConfig::new('*', 1, 0, 0.3).apply_to("x"), "*");
    }

    #[test]
    fn masks_everything_when_windows_exactly_cover_value() {
        let config = MaskConfig::new('*', 2, 2, 0.0);
        assert_eq!(config.apply_to("abcd"), "****");
    }

    #[test]
    fn masks_single_middle_character_without_ratio() {
        let config = MaskConfig::new('*', 2, 2, 0.0);
        assert_eq!(config.apply_to("abcde"), "ab*de");
    }
}

mod ratio_threshold {
    use super::*;

    #[test]
    fn ratio_equal_to_minimum_keeps_partial_mask() {
        // 2 of 4 masked: exactly 0.5
        let config = MaskConfig::new('*', 1, 1, 0.5);
        assert_eq!(config.apply_to("abcd"), "a**d");
    }

    #[test]
    fn ratio_just_below_minimum_masks_everything() {
        // 1 of 3 masked: 0.333.. < 0.34
        let config = MaskConfig::new('*', 1, 1, 0.34);
        assert_eq!(config.apply_to("abc"), "***");
    }

    #[test]
    fn full_ratio_only_allows_no_visible_characters() {
        let config = MaskConfig::new('*', 0, 0, 1.0);
        assert_eq!(config.apply_to("abcdef"), "******");

        let config = MaskConfig::new('*', 0, 1, 1.0);
        assert_eq!(config.apply_to("abcdef"), "******");
    }
}

mod unicode {
    use super::*;

    #[test]
    fn handles_japanese_text() {
        let config = MaskConfig::new('*', 2, 2, 0.3);
        assert_eq!(config.apply_to("こんにちは世界です"), "こん*****です");
    }

    #[test]
    fn handles_emoji() {
        let emoji = "😀😁😂😃😄😅😆😇";
        let config = MaskConfig::new('*', 2, 2, 0.3);
        let result = config.apply_to(emoji);

        assert_eq!(result, "😀😁****😆😇");
        assert_eq!(scalar_count(&result), 8);
    }

    #[test]
    fn handles_mixed_scripts() {
        let config = MaskConfig::new('X', 3, 3, 0.2);
        assert_eq!(config.apply_to("abc123あいう"), "abcXXXあいう");
    }

    #[test]
    fn handles_multibyte_mask_char() {
        let config = MaskConfig::new('🔒', 1, 1, 0.3);
        let result = config.apply_to("secret");
        assert_eq!(result, "s🔒🔒🔒🔒t");
        assert_eq!(scalar_count(&result), 6);
    }

    #[test]
    fn counts_combining_marks_as_scalar_values() {
        // "e\u{0301}" is two scalar values
        let combining = "cafe\u{0301}s";
        let config = MaskConfig::new('*', 1, 1, 0.0);
        assert_eq!(config.apply_to(combining), "c****s");
    }

    #[test]
    fn handles_zero_width_characters() {
        let zwj_string = "test\u{200D}data";
        let config = MaskConfig::new('*', 4, 4, 0.0);
        assert_eq!(config.apply_to(zwj_string), "test*data");
    }

    #[test]
    fn keeps_visible_windows_verbatim() {
        let input = "Ünïcødé-ñame-ẞtring";
        let config = MaskConfig::new('*', 3, 4, 0.3);
        let result = config.apply_to(input);

        let input_chars: Vec<char> = input.chars().collect();
        let result_chars: Vec<char> = result.chars().collect();
        assert_eq!(result_chars.len(), input_chars.len());
        assert_eq!(result_chars[..3], input_chars[..3]);
        assert_eq!(
            result_chars[result_chars.len() - 4..],
            input_chars[input_chars.len() - 4..]
        );
        assert!(
            result_chars[3..result_chars.len() - 4]
                .iter()
                .all(|&ch| ch == '*')
        );
    }
}

mod length_preservation {
    use super::*;

    #[test]
    fn output_length_matches_input_for_all_rules() {
        let inputs = ["", "a", "ab", "abc", "1234567890", "日本語テキスト", "😀😁😂"];
        let configs = [
            MaskConfig::default(),
            MaskConfig::new('■', 0, 0, 0.0),
            MaskConfig::new('#', 1, 1, 0.9),
            MaskConfig::new('🔒', 5, 5, 0.3),
        ];

        for input in inputs {
            for config in configs {
                let result = config.apply_to(input);
                assert_eq!(
                    scalar_count(&result),
                    scalar_count(input),
                    "input {input:?} with {config:?}"
                );
            }
        }
    }

    #[test]
    fn handles_very_long_strings() {
        let long_string = "x".repeat(100_000);
        let config = MaskConfig::new('*', 0, 10, 0.3);
        let result = config.apply_to(&long_string);

        assert_eq!(result.len(), 100_000);
        assert!(result.starts_with(&"*".repeat(99_990)));
        assert!(result.ends_with("xxxxxxxxxx"));
    }
}

mod special_cases {
    use super::*;

    #[test]
    fn handles_whitespace_only() {
        let config = MaskConfig::new('*', 2, 0, 0.3);
        assert_eq!(config.apply_to("     "), "  ***");
    }

    #[test]
    fn handles_null_bytes() {
        let config = MaskConfig::new('*', 4, 0, 0.3);
        assert_eq!(config.apply_to("test\0data"), "test*****");
    }

    #[test]
    fn input_already_made_of_mask_chars() {
        let config = MaskConfig::default();
        assert_eq!(config.apply_to("********"), "********");
    }
}
