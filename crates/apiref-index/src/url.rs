//! Canonical URL paths for reference pages.
//!
//! Every [`IndexEntry`](crate::IndexEntry) stores a URL path that must equal
//! what these functions produce for its kind and name; the index checks this
//! on load. Paths always carry a trailing slash:
//!
//! - `/reference/` - reference root
//! - `/reference/{kind}/` - kind index
//! - `/reference/{kind}/{name}/` - definition page
//! - `/reference/{kind}/{class}/{method}/` - method page

use crate::definition_type::{DefinitionType, InvalidDefinitionType};

/// URL path of the reference root.
pub const REFERENCE_ROOT: &str = "/reference/";

/// Components of a parsed reference page path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePath {
    /// Kind from the first segment.
    pub kind: DefinitionType,
    /// Definition name.
    pub name: String,
    /// Method name for method pages.
    pub method: Option<String>,
}

/// URL path of a kind's index page.
#[must_use]
pub fn path_for_kind(kind: DefinitionType) -> String {
    format!("{REFERENCE_ROOT}{}/", kind.url_segment())
}

/// URL path of a function page.
#[must_use]
pub fn path_for_function(name: &str) -> String {
    format!("{REFERENCE_ROOT}function/{name}/")
}

/// URL path of a class, interface, trait or enum page.
pub fn path_for_class_like(
    name: &str,
    kind: DefinitionType,
) -> Result<String, InvalidDefinitionType> {
    if !kind.is_class_like() {
        return Err(InvalidDefinitionType(kind.url_segment().to_owned()));
    }
    Ok(format!("{REFERENCE_ROOT}{}/{name}/", kind.url_segment()))
}

/// URL path of a method page under its class-like parent.
pub fn path_for_method(
    class_kind: DefinitionType,
    class_name: &str,
    method: &str,
) -> Result<String, InvalidDefinitionType> {
    let class_path = path_for_class_like(class_name, class_kind)?;
    Ok(format!("{class_path}{method}/"))
}

/// URL path of any page root kind.
///
/// Fails for [`DefinitionType::Method`], which has no page of its own.
pub fn path_for(kind: DefinitionType, name: &str) -> Result<String, InvalidDefinitionType> {
    match kind {
        DefinitionType::Function => Ok(path_for_function(name)),
        DefinitionType::Typedef => Ok(format!("{REFERENCE_ROOT}typedef/{name}/")),
        DefinitionType::Method => Err(InvalidDefinitionType(kind.url_segment().to_owned())),
        _ => path_for_class_like(name, kind),
    }
}

/// Parse a reference page path back into its components.
///
/// Accepts paths with or without the trailing slash. Returns `None` for
/// anything that is not a definition or method page.
#[must_use]
pub fn parse_reference_path(path: &str) -> Option<ReferencePath> {
    let rest = path.strip_prefix(REFERENCE_ROOT)?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let mut segments = rest.split('/');

    let kind = DefinitionType::from_url_segment(segments.next()?)?;
    if !kind.is_page_kind() {
        return None;
    }
    let name = segments.next().filter(|s| !s.is_empty())?;
    let method = match segments.next() {
        Some(m) if !m.is_empty() && kind.is_class_like() => Some(m.to_owned()),
        Some(_) => return None,
        None => None,
    };
    if segments.next().is_some() {
        return None;
    }

    Some(ReferencePath {
        kind,
        name: name.to_owned(),
        method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_function() {
        assert_eq!(path_for_function("strlen"), "/reference/function/strlen/");
    }

    #[test]
    fn test_path_for_class_like() {
        assert_eq!(
            path_for_class_like("HH.Vector", DefinitionType::Class).unwrap(),
            "/reference/class/HH.Vector/"
        );
        assert_eq!(
            path_for_class_like("Countable", DefinitionType::Interface).unwrap(),
            "/reference/interface/Countable/"
        );
    }

    #[test]
    fn test_path_for_class_like_rejects_function() {
        let err = path_for_class_like("strlen", DefinitionType::Function).unwrap_err();
        assert_eq!(err, InvalidDefinitionType("function".to_owned()));
    }

    #[test]
    fn test_path_for_method() {
        assert_eq!(
            path_for_method(DefinitionType::Class, "MyClass", "myMethod").unwrap(),
            "/reference/class/MyClass/myMethod/"
        );
    }

    #[test]
    fn test_path_for_method_kind_fails() {
        assert!(path_for(DefinitionType::Method, "x").is_err());
    }

    #[test]
    fn test_path_for_kind() {
        assert_eq!(path_for_kind(DefinitionType::Trait), "/reference/trait/");
    }

    #[test]
    fn test_parse_round_trips_for_every_page_kind() {
        for kind in DefinitionType::PAGE_KINDS {
            let path = path_for(kind, "HH.Thing").unwrap();
            let parsed = parse_reference_path(&path).unwrap();

            assert_eq!(parsed.kind, kind);
            assert_eq!(parsed.name, "HH.Thing");
            assert_eq!(parsed.method, None);
        }
    }

    #[test]
    fn test_parse_method_path() {
        let path = path_for_method(DefinitionType::Trait, "T", "m").unwrap();
        let parsed = parse_reference_path(&path).unwrap();

        assert_eq!(parsed.kind, DefinitionType::Trait);
        assert_eq!(parsed.name, "T");
        assert_eq!(parsed.method.as_deref(), Some("m"));
    }

    #[test]
    fn test_parse_rejects_non_reference_paths() {
        assert!(parse_reference_path("/guide/").is_none());
        assert!(parse_reference_path("/reference/").is_none());
        assert!(parse_reference_path("/reference/class/").is_none());
        assert!(parse_reference_path("/reference/bogus/Foo/").is_none());
        assert!(parse_reference_path("/reference/method/foo/").is_none());
        assert!(parse_reference_path("/reference/function/strlen/extra/").is_none());
        assert!(parse_reference_path("/reference/class/A/b/c/").is_none());
    }
}
