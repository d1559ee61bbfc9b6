//! Text cleanup applied to both the reference sentence and the
//! transcription before any comparison.

/// Arabic combining marks in the ranges U+0610–U+061A and U+064B–U+065F.
///
/// Removing them leaves the consonantal skeleton intact, so a learner is
/// not penalized for a model that does or does not emit tashkeel.
pub fn is_diacritic(c: char) -> bool {
    matches!(c as u32, 0x0610..=0x061A | 0x064B..=0x065F)
}

/// Normalizes raw text for comparison: drops literal `"` characters,
/// turns the two-character escape `\n` left over from upstream
/// serialization into a space, collapses whitespace runs to a single
/// space and trims the ends.
///
/// Diacritic stripping, when requested, happens before everything else;
/// the two operations touch disjoint character classes, and stripping
/// first keeps the function idempotent even for degenerate inputs where
/// a diacritic sits inside an escape sequence.
pub fn normalize(text: &str, strip_diacritics: bool) -> String {
    let stripped;
    let text = if strip_diacritics {
        stripped = text.chars().filter(|c| !is_diacritic(*c)).collect::<String>();
        stripped.as_str()
    } else {
        text
    };

    let unquoted = text.replace('"', "");
    let unescaped = unquoted.replace("\\n", " ");

    let mut out = String::with_capacity(unescaped.len());
    let mut pending_space = false;
    for c in unescaped.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_quotes_escapes_and_extra_whitespace() {
        assert_eq!(normalize("\"hello   world\\n\"", false), "hello world");
    }

    #[test]
    fn collapses_real_newlines_and_tabs() {
        assert_eq!(normalize("  a\n\tb \r\n c  ", false), "a b c");
    }

    #[test]
    fn strips_fatha_from_arabic_word() {
        assert_eq!(normalize("مَحمود", true), "محمود");
    }

    #[test]
    fn keeps_diacritics_unless_asked() {
        assert_eq!(normalize("مَحمود", false), "مَحمود");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize("", false), "");
        assert_eq!(normalize("   ", true), "");
    }

    #[test]
    fn is_idempotent() {
        for (text, strip) in [
            ("\"hello   world\\n\"", false),
            ("  مَحمود  والد\t\"زيد\"  ", true),
            ("a\\nb\\nc", false),
            ("", true),
        ] {
            let once = normalize(text, strip);
            assert_eq!(normalize(&once, strip), once);
        }
    }

    #[test]
    fn diacritic_table_bounds() {
        assert!(is_diacritic('\u{0610}'));
        assert!(is_diacritic('\u{061A}'));
        assert!(is_diacritic('\u{064B}'));
        assert!(is_diacritic('\u{064E}'));
        assert!(is_diacritic('\u{065F}'));
        assert!(!is_diacritic('\u{0620}'));
        assert!(!is_diacritic('م'));
        assert!(!is_diacritic('a'));
    }
}
