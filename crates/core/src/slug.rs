//! URL slug generation for named catalog entries and enterprises.

/// Turn a display name into a lowercase, hyphen-separated ASCII slug.
///
/// Accented Latin letters are folded to their base letter; any other
/// non-alphanumeric run collapses into a single `-`. Leading and trailing
/// separators are trimmed.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        let folded = fold_accent(ch);
        if folded.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(folded);
        } else {
            pending_dash = true;
        }
    }

    slug
}

fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Software Engineering"), "software-engineering");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(slugify("  Data -- & Analytics  "), "data-analytics");
    }

    #[test]
    fn folds_accents() {
        assert_eq!(slugify("Construção Civil"), "construcao-civil");
    }

    #[test]
    fn only_symbols_yields_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
