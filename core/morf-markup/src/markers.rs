use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

/// Stress, palatalization and similar annotations.
pub const PHONETIC_MARKERS: &[char] = &['~', '?', ']', '<'];

/// Compound component boundaries. `_` doubles as the token separator.
pub const COMPOUND_MARKERS: &[char] = &['+', '=', '_'];

/// Separates hyphenated groups of compound tokens. Never stripped from roots.
pub const HYPHEN: char = '-';

pub const UNDERSCORE: char = '_';

fn char_class(markers: &[char]) -> String {
    let escaped: String = markers
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    format!("[{}]", escaped)
}

lazy_static! {
    static ref PHONETIC_RE: Regex =
        Regex::new(&char_class(PHONETIC_MARKERS)).expect("phonetic marker class is a valid regex");
    static ref COMPOUND_RE: Regex =
        Regex::new(&char_class(COMPOUND_MARKERS)).expect("compound marker class is a valid regex");
    static ref ALL_RE: Regex = {
        let all: Vec<char> = PHONETIC_MARKERS.iter().chain(COMPOUND_MARKERS).copied().collect();
        Regex::new(&char_class(&all)).expect("marker class is a valid regex")
    };
}

fn is_marker_char(c: char) -> bool {
    PHONETIC_MARKERS.contains(&c) || COMPOUND_MARKERS.contains(&c) || c == HYPHEN || c == UNDERSCORE
}

/// True when `s` is a single marker or structural separator on its own.
pub fn is_marker(s: &str) -> bool {
    let mut chars = s.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_marker_char(c))
}

/// True when `s` is non-empty and made of nothing but markers and
/// separators, e.g. `-`, `--` or `<+`.
///
/// Such roots are passed through untouched: stripping or splitting them
/// would leave nothing.
pub fn is_markup_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_marker_char)
}

fn strip_with<'a>(re: &Regex, s: &'a str) -> Cow<'a, str> {
    if is_markup_only(s) {
        return Cow::Borrowed(s);
    }
    re.replace_all(s, "")
}

/// Removes phonetic markers, leaving compound structure intact.
pub fn strip_phonetic(s: &str) -> Cow<'_, str> {
    strip_with(&PHONETIC_RE, s)
}

/// Removes compound markers (`+`, `=`, `_`). Hyphens are kept.
pub fn strip_compound(s: &str) -> Cow<'_, str> {
    strip_with(&COMPOUND_RE, s)
}

/// [`strip_phonetic`] without the markup-only pass-through.
pub fn remove_phonetic(s: &str) -> Cow<'_, str> {
    PHONETIC_RE.replace_all(s, "")
}

/// [`strip_compound`] without the markup-only pass-through.
pub fn remove_compound(s: &str) -> Cow<'_, str> {
    COMPOUND_RE.replace_all(s, "")
}

/// Removes both marker kinds with no pass-through; used on tokens that are
/// already split out of a larger root.
pub(crate) fn remove_markers(s: &str) -> Cow<'_, str> {
    ALL_RE.replace_all(s, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_sets_are_disjoint() {
        for c in PHONETIC_MARKERS {
            assert!(!COMPOUND_MARKERS.contains(c), "{:?} is in both sets", c);
        }
        assert!(!PHONETIC_MARKERS.contains(&HYPHEN));
        assert!(!COMPOUND_MARKERS.contains(&HYPHEN));
    }

    #[test]
    fn test_lone_markers_pass_through() {
        for m in ["~", "?", "]", "<", "+", "=", "_", "-"] {
            assert!(is_marker(m));
            assert_eq!(strip_phonetic(m), m);
            assert_eq!(strip_compound(m), m);
        }
        assert!(!is_marker(""));
        assert!(!is_marker("__"));
        assert!(!is_marker("a"));
    }

    #[test]
    fn test_markup_only_roots_pass_through() {
        for m in ["--", "__", "<+", "-?-", "_"] {
            assert!(is_markup_only(m));
            assert_eq!(strip_phonetic(m), m);
            assert_eq!(strip_compound(m), m);
        }
        assert!(!is_markup_only(""));
        assert!(!is_markup_only("<a"));
        assert_eq!(remove_phonetic("<+"), "+");
        assert_eq!(remove_compound("<+"), "<");
    }

    #[test]
    fn test_strips_are_independent() {
        let root = "lennuki_k<an]dja";
        assert_eq!(strip_phonetic(root), "lennuki_kandja");
        assert_eq!(strip_compound(root), "lennukik<an]dja");
        assert_eq!(remove_markers(root), "lennukikandja");
    }

    #[test]
    fn test_hyphen_survives_compound_strip() {
        assert_eq!(strip_compound("Rock_n-roll"), "Rockn-roll");
    }

    #[test]
    fn test_plain_input_is_borrowed() {
        assert!(matches!(strip_phonetic("maja"), Cow::Borrowed("maja")));
    }
}
