//! Per-page table of contents.
//!
//! The document parser hands every page an ordered tree of heading tokens;
//! this module maps that tree onto anchor links the page renderer walks to
//! produce in-page navigation.

use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

/// A single heading emitted by the document parser.
///
/// The parser owns this schema: each heading carries its display title, the
/// anchor id it was assigned, its heading level and any nested sub-headings,
/// all in document order. Anchor ids are unique within a page by the parser's
/// contract and are not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingToken {
    pub title: String,
    pub id: String,
    pub level: u32,
    #[serde(default)]
    pub children: Vec<HeadingToken>,
}

/// A single entry in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnchorLink {
    /// The text of the entry.
    pub title: String,
    /// The anchor id the entry points at.
    pub id: String,
    /// The heading level of the entry.
    pub level: u32,
    /// Whether the entry is highlighted as the current navigational context.
    pub active: bool,
    /// Nested entries, in document order.
    pub children: Vec<AnchorLink>,
}

impl AnchorLink {
    fn from_token(token: &HeadingToken) -> Self {
        AnchorLink {
            title: token.title.clone(),
            id: token.id.clone(),
            level: token.level,
            active: false,
            children: token.children.iter().map(AnchorLink::from_token).collect(),
        }
    }

    /// The hash fragment of a URL pointing at this entry.
    pub fn url(&self) -> String {
        format!("#{}", self.id)
    }

    fn indent_print(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(f, "{}{} - {}", "    ".repeat(depth), self.title, self.url())?;
        for child in &self.children {
            child.indent_print(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for AnchorLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.indent_print(f, 0)
    }
}

/// The table of contents for a single page.
///
/// An ordered, read-only view over the page's top-level entries; nested
/// entries are reached through [`AnchorLink::children`]. The `Display`
/// rendering is a diagnostic outline, not final markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    items: Vec<AnchorLink>,
}

impl TableOfContents {
    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the top-level entries in document order.
    pub fn iter(&self) -> slice::Iter<'_, AnchorLink> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a TableOfContents {
    type Item = &'a AnchorLink;
    type IntoIter = slice::Iter<'a, AnchorLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for TableOfContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

/// Build the table of contents for a page from its heading tokens.
///
/// The token tree is mapped one-to-one onto anchor links, preserving order
/// and nesting at every depth. The first top-level entry is always marked
/// active.
pub fn build_toc(tokens: &[HeadingToken]) -> TableOfContents {
    let mut items: Vec<AnchorLink> = tokens.iter().map(AnchorLink::from_token).collect();
    if let Some(first) = items.first_mut() {
        first.active = true;
    }
    TableOfContents { items }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(title: &str, id: &str, level: u32, children: Vec<HeadingToken>) -> HeadingToken {
        HeadingToken {
            title: title.to_string(),
            id: id.to_string(),
            level,
            children,
        }
    }

    fn sample_tokens() -> Vec<HeadingToken> {
        vec![
            token(
                "Intro",
                "intro",
                1,
                vec![
                    token("Sub", "intro-sub", 2, vec![]),
                    token(
                        "Details",
                        "intro-details",
                        2,
                        vec![token("Fine print", "intro-fine-print", 3, vec![])],
                    ),
                ],
            ),
            token("Usage", "usage", 1, vec![]),
            token("Reference", "reference", 1, vec![]),
        ]
    }

    fn assert_mirrors(link: &AnchorLink, source: &HeadingToken) {
        assert_eq!(link.children.len(), source.children.len());
        for (child_link, child_token) in link.children.iter().zip(&source.children) {
            assert_eq!(child_link.title, child_token.title);
            assert_mirrors(child_link, child_token);
        }
    }

    fn count_active(link: &AnchorLink) -> usize {
        let nested: usize = link.children.iter().map(count_active).sum();
        nested + usize::from(link.active)
    }

    #[test]
    fn test_empty_input() {
        let toc = build_toc(&[]);

        assert_eq!(toc.len(), 0);
        assert!(toc.is_empty());
        assert_eq!(toc.iter().count(), 0);
        assert_eq!(toc.to_string(), "");
    }

    #[test]
    fn test_top_level_count_and_order() {
        let tokens = sample_tokens();
        let toc = build_toc(&tokens);

        assert_eq!(toc.len(), tokens.len());
        let titles: Vec<&str> = toc.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro", "Usage", "Reference"]);
    }

    #[test]
    fn test_tree_shape_is_preserved() {
        let tokens = sample_tokens();
        let toc = build_toc(&tokens);

        for (link, source) in toc.iter().zip(&tokens) {
            assert_mirrors(link, source);
        }
    }

    #[test]
    fn test_first_top_level_entry_is_active() {
        let toc = build_toc(&sample_tokens());

        assert!(toc.iter().next().unwrap().active);
    }

    #[test]
    fn test_no_other_entry_is_active() {
        let toc = build_toc(&sample_tokens());

        let total: usize = toc.iter().map(count_active).sum();
        assert_eq!(total, 1);
        for item in toc.iter().skip(1) {
            assert!(!item.active);
        }
    }

    #[test]
    fn test_field_fidelity_and_url() {
        let tokens = vec![token("Usage", "usage", 2, vec![])];
        let toc = build_toc(&tokens);
        let link = toc.iter().next().unwrap();

        assert_eq!(link.title, "Usage");
        assert_eq!(link.id, "usage");
        assert_eq!(link.level, 2);
        assert_eq!(link.url(), "#usage");
    }

    #[test]
    fn test_indented_outline_rendering() {
        let tokens = vec![token(
            "Intro",
            "intro",
            1,
            vec![token("Sub", "intro-sub", 2, vec![])],
        )];
        let toc = build_toc(&tokens);

        assert_eq!(toc.to_string(), "Intro - #intro\n    Sub - #intro-sub\n");
    }

    #[test]
    fn test_rendering_concatenates_top_level_entries() {
        let toc = build_toc(&[
            token("One", "one", 1, vec![]),
            token("Two", "two", 1, vec![]),
        ]);

        assert_eq!(toc.to_string(), "One - #one\nTwo - #two\n");
    }

    #[test]
    fn test_building_twice_is_deterministic() {
        let tokens = sample_tokens();

        assert_eq!(build_toc(&tokens), build_toc(&tokens));
    }

    #[test]
    fn test_token_children_default_when_absent() {
        let tokens: Vec<HeadingToken> =
            serde_json::from_str(r#"[{"title": "Intro", "id": "intro", "level": 1}]"#).unwrap();

        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].children.is_empty());
    }

    #[test]
    fn test_malformed_token_is_rejected_at_the_boundary() {
        let result: Result<Vec<HeadingToken>, _> =
            serde_json::from_str(r#"[{"title": "Intro", "level": 1}]"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_iteration_covers_top_level_only() {
        let toc = build_toc(&sample_tokens());

        // Nested entries are reachable through children, never flattened
        // into the top-level iteration.
        assert_eq!(toc.iter().count(), 3);
        assert_eq!((&toc).into_iter().count(), 3);
    }
}
