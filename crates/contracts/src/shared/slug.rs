/// Converts free text into a URL slug.
///
/// Lower-cases and trims the input, drops everything except ASCII word
/// characters, whitespace and hyphens, then folds every run of whitespace
/// and hyphens into a single `-`.
///
/// Example: "Hello, World!" -> "hello-world"
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_separator = false;

    for ch in lowered.trim().chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            slug.push(ch);
            in_separator = false;
        } else if ch.is_whitespace() || ch == '-' {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Summer   Sale 2024 "), "summer-sale-2024");
        assert_eq!(slugify("Men's T-Shirt"), "mens-t-shirt");
    }

    #[test]
    fn test_slugify_collapses_hyphens() {
        assert_eq!(slugify("Already-slugged--name"), "already-slugged-name");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("a -!- b"), "a-b");
    }

    #[test]
    fn test_slugify_strips_join_symbols() {
        assert_eq!(slugify("shoe+sock - 2 in 1 combo"), "shoesock-2-in-1-combo");
        assert_eq!(slugify("under_score"), "under_score");
        assert_eq!(slugify(""), "");
    }
}
