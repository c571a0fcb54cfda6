//! Publishing is a metadata flip plus URL formatting: no deployment happens.
//! The slug rules match what the publish dialog shows the user, so this module
//! is not server-gated: both sides of the boundary share it.

/// Reduce a user-chosen site name to a URL-safe slug: lowercase, whitespace
/// runs become single hyphens, everything outside `[a-z0-9-]` is dropped.
pub fn slugify(site_name: &str) -> String {
    let mut slug = String::with_capacity(site_name.len());
    let mut last_was_hyphen = false;
    for ch in site_name.trim().to_lowercase().chars() {
        if ch.is_whitespace() {
            if !last_was_hyphen && !slug.is_empty() {
                slug.push('-');
                last_was_hyphen = true;
            }
        } else if ch.is_ascii_alphanumeric() || ch == '-' {
            last_was_hyphen = ch == '-';
            slug.push(ch);
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Format the published URL for a slug. Placeholder for a future deployment
/// integration: the site is never actually hosted there.
pub fn published_url(slug: &str) -> String {
    format!("https://{}.vercel.app", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("My Cosmic Portfolio"), "my-cosmic-portfolio");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_strips_unsafe_characters() {
        assert_eq!(slugify("Jane's Site! (v2)"), "janes-site-v2");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_published_url_formatting() {
        assert_eq!(
            published_url("my-portfolio"),
            "https://my-portfolio.vercel.app"
        );
    }
}
