//! Definition kinds and their URL segments.
//!
//! [`DefinitionType`] is the closed set of documented constructs. Every
//! variant has exactly one canonical string, which doubles as its URL
//! segment (`/reference/{segment}/...`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string names no known definition kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid definition type: {0}")]
pub struct InvalidDefinitionType(pub String);

/// Kind of a documented definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionType {
    Class,
    Interface,
    Trait,
    Enum,
    Typedef,
    Function,
    /// Member of a class-like definition. Never a page root on its own.
    Method,
}

impl DefinitionType {
    /// Every known kind.
    pub const ALL: [Self; 7] = [
        Self::Class,
        Self::Interface,
        Self::Trait,
        Self::Enum,
        Self::Typedef,
        Self::Function,
        Self::Method,
    ];

    /// Kinds that own a top-level index and a page, in navigation order.
    pub const PAGE_KINDS: [Self; 6] = [
        Self::Class,
        Self::Interface,
        Self::Trait,
        Self::Enum,
        Self::Typedef,
        Self::Function,
    ];

    /// Parse a kind from its canonical string.
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse(text: &str) -> Result<Self, InvalidDefinitionType> {
        Self::from_url_segment(text).ok_or_else(|| InvalidDefinitionType(text.to_owned()))
    }

    /// URL segment (and canonical string) for this kind.
    #[must_use]
    pub fn url_segment(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Trait => "trait",
            Self::Enum => "enum",
            Self::Typedef => "typedef",
            Self::Function => "function",
            Self::Method => "method",
        }
    }

    /// Inverse of [`url_segment`](Self::url_segment).
    #[must_use]
    pub fn from_url_segment(segment: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.url_segment() == segment)
    }

    /// Human-readable label used in breadcrumbs and navigation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "Class",
            Self::Interface => "Interface",
            Self::Trait => "Trait",
            Self::Enum => "Enum",
            Self::Typedef => "Typedef",
            Self::Function => "Function",
            Self::Method => "Method",
        }
    }

    /// Whether definitions of this kind can own methods.
    #[must_use]
    pub fn is_class_like(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Interface | Self::Trait | Self::Enum
        )
    }

    /// Whether this kind has its own index and pages.
    #[must_use]
    pub fn is_page_kind(self) -> bool {
        self != Self::Method
    }
}

impl FromStr for DefinitionType {
    type Err = InvalidDefinitionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DefinitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url_segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!(DefinitionType::parse("class"), Ok(DefinitionType::Class));
        assert_eq!(
            DefinitionType::parse("function"),
            Ok(DefinitionType::Function)
        );
        assert_eq!(DefinitionType::parse("method"), Ok(DefinitionType::Method));
    }

    #[test]
    fn test_parse_unknown_kind_returns_error() {
        let err = DefinitionType::parse("bogus").unwrap_err();

        assert_eq!(err, InvalidDefinitionType("bogus".to_owned()));
        assert_eq!(err.to_string(), "Invalid definition type: bogus");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(DefinitionType::parse("Class").is_err());
        assert!(DefinitionType::parse("").is_err());
    }

    #[test]
    fn test_url_segment_is_bijective() {
        for kind in DefinitionType::ALL {
            assert_eq!(
                DefinitionType::from_url_segment(kind.url_segment()),
                Some(kind)
            );
        }
        let mut segments: Vec<_> = DefinitionType::ALL
            .iter()
            .map(|k| k.url_segment())
            .collect();
        segments.sort_unstable();
        segments.dedup();
        assert_eq!(segments.len(), DefinitionType::ALL.len());
    }

    #[test]
    fn test_method_is_not_a_page_kind() {
        assert!(!DefinitionType::Method.is_page_kind());
        assert!(!DefinitionType::PAGE_KINDS.contains(&DefinitionType::Method));
        assert!(!DefinitionType::Method.is_class_like());
    }

    #[test]
    fn test_class_like_kinds() {
        assert!(DefinitionType::Class.is_class_like());
        assert!(DefinitionType::Enum.is_class_like());
        assert!(!DefinitionType::Function.is_class_like());
        assert!(!DefinitionType::Typedef.is_class_like());
    }

    #[test]
    fn test_serde_uses_url_segment() {
        let json = serde_json::to_string(&DefinitionType::Interface).unwrap();
        assert_eq!(json, "\"interface\"");

        let kind: DefinitionType = serde_json::from_str("\"trait\"").unwrap();
        assert_eq!(kind, DefinitionType::Trait);
    }
}
