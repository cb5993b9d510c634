/// Turn a page title into a URL path segment.
///
/// Rules:
/// - Convert to lowercase and trim surrounding whitespace
/// - Replace each whitespace run with a single hyphen
/// - Keep only ASCII letters, digits, `_` and `-`
/// - Collapse consecutive hyphens
///
/// Distinct titles may share a slug.
///
/// # Examples
///
/// ```
/// use docport_core::slugify;
///
/// assert_eq!(slugify("  Hello, World!! "), "hello-world");
/// assert_eq!(slugify("C++ & Rust"), "c-rust");
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("snake_case stays"), "snake_case-stays");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for c in lowered.trim().chars() {
        let c = if c.is_whitespace() { '-' } else { c };

        if c == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        }
    }

    slug
}

/// Slugify a markdown heading to create an anchor ID.
///
/// Unlike [`slugify`], Unicode letters and digits survive and every
/// whitespace character becomes its own hyphen.
///
/// # Examples
///
/// ```
/// use docport_core::slugify_heading;
///
/// assert_eq!(slugify_heading("My Cool Header"), "my-cool-header");
/// assert_eq!(slugify_heading("Hello (World)!"), "hello-world");
/// assert_eq!(slugify_heading("A  B"), "a--b");
/// assert_eq!(slugify_heading("Café Setup"), "café-setup");
/// assert_eq!(slugify_heading("!!!"), "");
/// ```
pub fn slugify_heading(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter_map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else if c.is_whitespace() {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

/// Readable fallback title for a project slug: "my-api_docs" -> "my api docs"
pub fn humanize_slug(slug: &str) -> String {
    slug.replace(['-', '_'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Hello, World!! "), "hello-world");
        assert_eq!(slugify("C++ & Rust"), "c-rust");
        assert_eq!(slugify("Intro"), "intro");
        assert_eq!(slugify("a - b"), "a-b");
        assert_eq!(slugify("Tabs\tand\n\nnewlines"), "tabs-and-newlines");
        assert_eq!(slugify("Café"), "caf"); // non-ASCII letters are dropped
        assert_eq!(slugify("v2.0 Release"), "v20-release");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_keeps_edge_hyphens() {
        // Only whitespace is trimmed; a leading symbol leaves its hyphen behind.
        assert_eq!(slugify("& More"), "-more");
        assert_eq!(slugify("-Dash-"), "-dash-");
    }

    #[test]
    fn test_slugify_is_not_injective() {
        assert_eq!(slugify("Setup"), slugify("setup!"));
    }

    #[test]
    fn test_slugify_heading() {
        assert_eq!(slugify_heading("My Header"), "my-header");
        assert_eq!(slugify_heading("你好 World"), "你好-world");
        assert_eq!(slugify_heading("-Hello-"), "hello");
        assert_eq!(slugify_heading("  Hello  "), "hello");
    }

    #[test]
    fn test_humanize_slug() {
        assert_eq!(humanize_slug("my-api_docs"), "my api docs");
        assert_eq!(humanize_slug("plain"), "plain");
    }
}
