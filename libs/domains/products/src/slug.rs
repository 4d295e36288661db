//! Slug derivation.
//!
//! A slug is a pure function of the product name at creation time:
//! lowercased, with every run of non-alphanumeric characters collapsed
//! into a single separator, truncated to [`MAX_SLUG_LEN`] characters.
//! Slugs are never recomputed once a product exists; renaming a product
//! leaves it reachable at its original slug.

/// Maximum slug length in bytes after truncation.
pub const MAX_SLUG_LEN: usize = 120;

const SEPARATOR: char = '-';

/// Derive a slug from a product name.
///
/// ```
/// use domain_products::slug::slugify;
///
/// assert_eq!(slugify("Product 3"), "product-3");
/// assert_eq!(slugify("  Hello,  World!  "), "hello-world");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_separator = true;
        }
    }

    if slug.len() > MAX_SLUG_LEN {
        let mut cut = MAX_SLUG_LEN;
        while !slug.is_char_boundary(cut) {
            cut -= 1;
        }
        slug.truncate(cut);
        while slug.ends_with(SEPARATOR) {
            slug.pop();
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slugify("Product 3"), "product-3");
        assert_eq!(slugify("Product 3 updated"), "product-3-updated");
    }

    #[test]
    fn collapses_non_alphanumeric_runs() {
        assert_eq!(slugify("Hello,  World!"), "hello-world");
        assert_eq!(slugify("a --- b"), "a-b");
    }

    #[test]
    fn trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  padded name  "), "padded-name");
        assert_eq!(slugify("!!bang!!"), "bang");
    }

    #[test]
    fn truncates_to_max_length() {
        let name = "x".repeat(500);
        let slug = slugify(&name);
        assert_eq!(slug.len(), MAX_SLUG_LEN);
    }

    #[test]
    fn truncation_never_leaves_a_dangling_separator() {
        // 120 chars land exactly on a word boundary for this input
        let name = ["word"; 60].join(" ");
        let slug = slugify(&name);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with(SEPARATOR));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(slugify("Same Name"), slugify("Same Name"));
    }

    #[test]
    fn empty_name_yields_empty_slug() {
        // validation rejects empty names before slugging ever happens
        assert_eq!(slugify(""), "");
    }
}
