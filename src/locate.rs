//! Heading locator: picks result-heading elements out of a tree walk.
//!
//! Result pages sometimes render a heading twice, once for sighted users and
//! once marked `aria-hidden`. Whether that duplicate exists depends on the
//! markup snapshot, so exclusion is a policy chosen by the caller.

use std::fmt;
use std::sync::Arc;

use crate::dom::{ArenaDom, ArenaNodeId, Attribute, Descendants, descendants, find_attr};

/// Tag used for result headings by default.
pub const DEFAULT_HEADING_TAG: &str = "h3";

/// Attribute marking accessibility-only duplicates.
pub const ARIA_HIDDEN: &str = "aria-hidden";

/// What to do with headings carrying a non-empty `aria-hidden` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AriaHidden {
    /// Skip them. Any non-empty value counts, `"false"` included.
    #[default]
    Exclude,
    /// Treat them like any other heading.
    Include,
}

type AttrFilter = Arc<dyn Fn(&[Attribute]) -> bool + Send + Sync>;

/// Selects result headings: elements with a given tag that pass the
/// accessibility policy and an optional attribute predicate.
#[derive(Clone)]
pub struct HeadingLocator {
    tag: String,
    aria_hidden: AriaHidden,
    filter: Option<AttrFilter>,
}

impl HeadingLocator {
    /// Match every element named `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            aria_hidden: AriaHidden::Include,
            filter: None,
        }
    }

    /// Set the accessibility-duplicate policy.
    pub fn with_aria_hidden(mut self, policy: AriaHidden) -> Self {
        self.aria_hidden = policy;
        self
    }

    /// Require headings to also satisfy `filter` over their attributes.
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&[Attribute]) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn aria_hidden(&self) -> AriaHidden {
        self.aria_hidden
    }

    /// Check a single node against the locator.
    pub fn matches(&self, dom: &ArenaDom, id: ArenaNodeId) -> bool {
        if !dom.is_element_named(id, &self.tag) {
            return false;
        }
        let attrs = dom.attrs(id);
        if self.aria_hidden == AriaHidden::Exclude
            && find_attr(attrs, ARIA_HIDDEN).is_some_and(|v| !v.is_empty())
        {
            return false;
        }
        self.filter.as_ref().is_none_or(|f| f(attrs))
    }

    /// Lazily yield matching headings below `root`, in document order.
    pub fn locate<'a>(&'a self, dom: &'a ArenaDom, root: ArenaNodeId) -> Headings<'a> {
        Headings {
            locator: self,
            dom,
            walk: descendants(dom, root),
        }
    }
}

impl Default for HeadingLocator {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_TAG).with_aria_hidden(AriaHidden::Exclude)
    }
}

impl fmt::Debug for HeadingLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadingLocator")
            .field("tag", &self.tag)
            .field("aria_hidden", &self.aria_hidden)
            .field("filter", &self.filter.is_some())
            .finish()
    }
}

/// Iterator returned by [`HeadingLocator::locate`].
pub struct Headings<'a> {
    locator: &'a HeadingLocator,
    dom: &'a ArenaDom,
    walk: Descendants<'a>,
}

impl Iterator for Headings<'_> {
    type Item = ArenaNodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let (locator, dom) = (self.locator, self.dom);
        self.walk.find(|&id| locator.matches(dom, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    const MARKUP: &str = r#"
        <h3>one</h3>
        <h3 aria-hidden="true">one (hidden copy)</h3>
        <h2>not a result</h2>
        <div><h3 class="ad">sponsored</h3></div>
        <h3 aria-hidden="">two</h3>
    "#;

    fn titles(dom: &ArenaDom, locator: &HeadingLocator) -> Vec<String> {
        locator
            .locate(dom, dom.document())
            .map(|h| {
                dom.first_child(h)
                    .and_then(|t| dom.text_content(t))
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_default_excludes_aria_hidden() {
        let parsed = parse_html(MARKUP);
        let locator = HeadingLocator::default();
        assert_eq!(locator.tag(), "h3");
        assert_eq!(locator.aria_hidden(), AriaHidden::Exclude);
        assert_eq!(titles(&parsed.dom, &locator), ["one", "sponsored", "two"]);
    }

    #[test]
    fn test_include_aria_hidden() {
        let parsed = parse_html(MARKUP);
        let locator = HeadingLocator::default().with_aria_hidden(AriaHidden::Include);
        assert_eq!(
            titles(&parsed.dom, &locator),
            ["one", "one (hidden copy)", "sponsored", "two"]
        );
    }

    #[test]
    fn test_custom_filter_and_tag() {
        let parsed = parse_html(MARKUP);
        let no_ads = HeadingLocator::default()
            .with_filter(|attrs| find_attr(attrs, "class").is_none_or(|c| !c.contains("ad")));
        assert_eq!(titles(&parsed.dom, &no_ads), ["one", "two"]);

        let h2 = HeadingLocator::new("h2");
        assert_eq!(titles(&parsed.dom, &h2), ["not a result"]);
    }

    #[test]
    fn test_no_headings() {
        let parsed = parse_html("<p>nothing here</p>");
        let locator = HeadingLocator::default();
        assert_eq!(locator.locate(&parsed.dom, parsed.dom.document()).count(), 0);
    }
}
