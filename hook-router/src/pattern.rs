//! Route pattern matching
//!
//! A route pattern is a path with zero or more `{name}` placeholders, such
//! as `product/{id}`. Each placeholder matches one non-empty path segment;
//! everything else is literal text. Captures are positional.

use crate::{RouterError, RouterResult};
use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder regex is valid"));

/// Segment matcher substituted for each placeholder
const SEGMENT: &str = "([^/]+)";

/// Strip the leading `/` host rewrite rules never see.
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Normalize a declared pattern: no leading `/` and at most one trailing
/// `/` dropped, so `about`, `/about` and `about/` are the same route.
pub fn normalize_pattern(pattern: &str) -> &str {
    let pattern = normalize_path(pattern);
    pattern.strip_suffix('/').unwrap_or(pattern)
}

/// Convert a route pattern into an anchored regular expression.
///
/// Placeholders become `([^/]+)`, all other text is escaped, and one
/// trailing `/` is optional:
///
/// ```rust,ignore
/// assert_eq!(to_match_expression("product/{id}"), "^product/([^/]+)/?$");
/// ```
///
/// Unbalanced braces are not placeholders and stay literal.
pub fn to_match_expression(pattern: &str) -> String {
    let pattern = normalize_pattern(pattern);
    let mut expression = String::with_capacity(pattern.len() + 16);
    expression.push('^');

    let mut last = 0;
    for placeholder in PLACEHOLDER.find_iter(pattern) {
        expression.push_str(&regex::escape(&pattern[last..placeholder.start()]));
        expression.push_str(SEGMENT);
        last = placeholder.end();
    }
    expression.push_str(&regex::escape(&pattern[last..]));

    expression.push_str("/?$");
    expression
}

/// Placeholder names of a pattern, left to right.
pub fn placeholder_names(pattern: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(pattern)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    expression: Regex,
    names: Vec<String>,
}

impl RoutePattern {
    /// Compile a pattern.
    pub fn compile(pattern: &str) -> RouterResult<Self> {
        let expression = Regex::new(&to_match_expression(pattern))
            .map_err(|e| RouterError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self {
            source: pattern.to_string(),
            expression,
            names: placeholder_names(pattern),
        })
    }

    /// The pattern as declared
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled expression, as handed to host rewrite rules
    pub fn expression(&self) -> &str {
        self.expression.as_str()
    }

    /// Placeholder names, left to right
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Match a concrete path, returning positional captures.
    pub fn captures(&self, path: &str) -> Option<Vec<String>> {
        let caps = self.expression.captures(normalize_path(path))?;
        Some(
            caps.iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().to_string())
                .collect(),
        )
    }

    /// Whether a path matches at all.
    pub fn is_match(&self, path: &str) -> bool {
        self.expression.is_match(normalize_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captures(pattern: &str, path: &str) -> Option<Vec<String>> {
        RoutePattern::compile(pattern).unwrap().captures(path)
    }

    #[test]
    fn test_expression_for_single_placeholder() {
        assert_eq!(to_match_expression("product/{id}"), "^product/([^/]+)/?$");
    }

    #[test]
    fn test_expression_escapes_literals() {
        assert_eq!(to_match_expression("feed.xml"), r"^feed\.xml/?$");
    }

    #[test]
    fn test_trailing_slash_on_pattern_is_optional() {
        assert_eq!(to_match_expression("about/"), "^about/?$");
        assert_eq!(to_match_expression("/product/{id}/"), "^product/([^/]+)/?$");
        assert_eq!(captures("about/", "about"), Some(vec![]));
        assert_eq!(captures("about/", "/about/"), Some(vec![]));
        assert_eq!(captures("about/", "about//"), None);
    }

    #[test]
    fn test_single_capture() {
        assert_eq!(captures("product/{id}", "product/42"), Some(vec!["42".into()]));
    }

    #[test]
    fn test_captures_are_positional() {
        assert_eq!(
            captures("a/{x}/b/{y}", "a/1/b/2"),
            Some(vec!["1".into(), "2".into()])
        );
    }

    #[test]
    fn test_literal_pattern_matches_exactly() {
        assert_eq!(captures("about", "about"), Some(vec![]));
        assert_eq!(captures("about", "about/"), Some(vec![]));
        assert_eq!(captures("about", "about-us"), None);
        assert_eq!(captures("about", "x/about"), None);
    }

    #[test]
    fn test_placeholder_does_not_cross_segments() {
        assert_eq!(captures("product/{id}", "product/4/2"), None);
        assert_eq!(captures("product/{id}", "product/"), None);
    }

    #[test]
    fn test_unbalanced_braces_are_literal() {
        assert_eq!(captures("odd/{id", "odd/{id"), Some(vec![]));
        assert_eq!(captures("odd/{id", "odd/42"), None);
        assert_eq!(captures("odd/id}", "odd/id}"), Some(vec![]));
    }

    #[test]
    fn test_leading_slash_is_ignored() {
        assert_eq!(captures("/product/{id}", "product/7"), Some(vec!["7".into()]));
        assert_eq!(captures("product/{id}", "/product/7"), Some(vec!["7".into()]));
    }

    #[test]
    fn test_placeholder_names() {
        assert_eq!(placeholder_names("a/{x}/b/{y_2}"), vec!["x", "y_2"]);
        assert!(placeholder_names("a/{x-y}").is_empty());
    }
}
