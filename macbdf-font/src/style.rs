//! Macintosh style bitmask to descriptive name.

/// Bold face flag.
pub const BOLD: u16 = 1 << 0;
/// Italic face flag.
pub const ITALIC: u16 = 1 << 1;
/// Underlined face flag.
pub const UNDERLINED: u16 = 1 << 2;
/// Outlined face flag.
pub const OUTLINED: u16 = 1 << 3;
/// Shadowed face flag.
pub const SHADOWED: u16 = 1 << 4;
/// Condensed face flag.
pub const CONDENSED: u16 = 1 << 5;
/// Extended face flag.
pub const EXTENDED: u16 = 1 << 6;

/// Flag-to-token mapping, in the fixed concatenation order.
const TOKENS: [(u16, &str); 7] = [
    (BOLD, "Bold"),
    (ITALIC, "Italic"),
    (UNDERLINED, "Underlined"),
    (OUTLINED, "Outlined"),
    (SHADOWED, "Shadowed"),
    (CONDENSED, "Condensed"),
    (EXTENDED, "Extended"),
];

/// Descriptive name for a style bitmask.
///
/// Tokens concatenate without separators in a fixed precedence (Bold
/// before Italic before Underlined, and so on), so a given mask always
/// maps to the same string. Bits outside the seven known flags are
/// ignored; a plain face yields the empty string.
#[must_use]
pub fn style_name(style: u16) -> String {
    let mut name = String::new();
    for (flag, token) in TOKENS {
        if style & flag != 0 {
            name.push_str(token);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_face_is_empty() {
        assert_eq!(style_name(0), "");
    }

    #[test]
    fn single_flags() {
        assert_eq!(style_name(BOLD), "Bold");
        assert_eq!(style_name(ITALIC), "Italic");
        assert_eq!(style_name(EXTENDED), "Extended");
    }

    #[test]
    fn order_is_fixed_regardless_of_mask_value() {
        assert_eq!(style_name(BOLD | ITALIC), "BoldItalic");
        assert_eq!(style_name(ITALIC | BOLD), "BoldItalic");
        assert_eq!(style_name(SHADOWED | UNDERLINED), "UnderlinedShadowed");
    }

    #[test]
    fn all_flags_concatenate_in_precedence_order() {
        assert_eq!(
            style_name(0x7F),
            "BoldItalicUnderlinedOutlinedShadowedCondensedExtended"
        );
    }

    #[test]
    fn unknown_bits_are_ignored() {
        assert_eq!(style_name(0x8000 | BOLD), "Bold");
        assert_eq!(style_name(0xFF80), "");
    }
}
