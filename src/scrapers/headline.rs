//! Headline-candidate matching strategies.
//!
//! News sites mark up headlines inconsistently, so candidate selection is a
//! heuristic over tag kind and class attribute rather than per-site selectors.
//! The heuristic is a swappable [`HeadlineMatcher`] strategy; the default,
//! [`ClassHintMatcher`], accepts any candidate whose class attribute contains
//! one of a small set of hint substrings.

/// Tag kinds considered as headline candidates.
pub const CANDIDATE_TAGS: [&str; 4] = ["h1", "h2", "h3", "a"];

/// Decides whether a document node plausibly represents an article headline.
pub trait HeadlineMatcher {
    /// Whether an element with this tag kind and class attribute is a
    /// headline candidate.
    fn is_candidate(&self, tag: &str, class_attr: Option<&str>) -> bool;
}

/// Matches candidates whose class attribute contains any hint substring,
/// case-insensitively, over the full attribute string.
#[derive(Debug, Clone)]
pub struct ClassHintMatcher {
    hints: Vec<String>,
}

impl ClassHintMatcher {
    /// Build a matcher from hint substrings. Hints are lowercased once here
    /// so matching only lowercases the class attribute.
    pub fn new<I, S>(hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hints: hints
                .into_iter()
                .map(|h| h.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Default for ClassHintMatcher {
    fn default() -> Self {
        Self::new(["headline", "title", "story", "article"])
    }
}

impl HeadlineMatcher for ClassHintMatcher {
    fn is_candidate(&self, tag: &str, class_attr: Option<&str>) -> bool {
        if !CANDIDATE_TAGS.contains(&tag) {
            return false;
        }
        let Some(class_attr) = class_attr else {
            return false;
        };
        let class_attr = class_attr.to_lowercase();
        self.hints.iter().any(|hint| class_attr.contains(hint))
    }
}
