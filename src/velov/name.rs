/// Separator between the station number and its name in the Vélo'v feed.
const SEPARATOR: &str = " - ";

/// Turns `"10039 - BOUVIER"` into `"Bouvier"`.
///
/// Everything up to the first `" - "` is dropped, then the rest is title-cased.
pub fn format_name(name: &str) -> String {
    let name = match name.split_once(SEPARATOR) {
        Some((_, rest)) => rest,
        None => name,
    };
    title_case(name)
}

/// Upper-cases the first letter of every word and lower-cases the rest.
///
/// Apostrophes and dots between letters do not start a new word, so
/// `"L'ÎLE BARBE"` becomes `"L'île Barbe"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_word && is_combining_mark(c) {
            out.push(c);
        } else if c.is_alphanumeric() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            let joins_word = matches!(c, '\'' | '’' | '.')
                && in_word
                && chars.peek().is_some_and(|next| next.is_alphabetic());
            in_word = joins_word;
            out.push(c);
        }
    }
    out
}

/// Non-spacing combining marks, e.g. the U+0301 acute of a decomposed `É`.
/// They belong to the letter before them.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_name_drops_number_prefix() {
        assert_eq!(format_name("10039 - BOUVIER"), "Bouvier");
        assert_eq!(format_name("Part-Dieu - Villette"), "Villette");
    }

    #[test]
    fn test_format_name_splits_on_first_separator_only() {
        assert_eq!(
            format_name("2010 - CONFLUENCE - DARSE"),
            "Confluence - Darse"
        );
    }

    #[test]
    fn test_format_name_without_separator_is_only_title_cased() {
        assert_eq!(format_name("GARE PART-DIEU"), "Gare Part-Dieu");
        assert_eq!(format_name("Part-Dieu"), "Part-Dieu");
    }

    #[test]
    fn test_title_case_handles_accents_and_apostrophes() {
        assert_eq!(title_case("ÉGLISE SAINT-GEORGES"), "Église Saint-Georges");
        assert_eq!(title_case("L'ÎLE BARBE"), "L'île Barbe");
        assert_eq!(title_case("place d’arsonval"), "Place D’arsonval");
    }

    #[test]
    fn test_title_case_keeps_combining_marks_in_the_word() {
        assert_eq!(title_case("E\u{301}COLE"), "E\u{301}cole");
        assert_eq!(
            format_name("8002 - PLACE DE L'E\u{301}GLISE"),
            "Place De L'e\u{301}glise"
        );
    }

    #[test]
    fn test_title_case_keeps_digits_in_words() {
        assert_eq!(title_case("CITÉ INTERNATIONALE / 3E"), "Cité Internationale / 3e");
        assert_eq!(title_case(""), "");
    }
}
