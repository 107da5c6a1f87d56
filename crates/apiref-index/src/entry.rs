//! Index entries and their persisted records.
//!
//! The build pipeline writes [`EntryRecord`]s; the index turns them into
//! validated [`IndexEntry`]s tagged with their kind.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::definition_type::DefinitionType;
use crate::source::IndexError;
use crate::url;

/// Persisted record of one definition, as written by the build pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    pub name: String,
    pub url_path: String,
    pub html_path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodRecord>,
}

/// Persisted record of one method of a class-like definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodRecord {
    pub name: String,
    pub class_name: String,
    pub class_type: DefinitionType,
    pub url_path: String,
    pub html_path: String,
}

/// Documentation record for one definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    /// Kind of the index this entry lives in.
    pub kind: DefinitionType,
    /// Definition name, unique within its kind.
    pub name: String,
    /// Canonical URL path.
    pub url_path: String,
    /// Opaque reference to pre-rendered content.
    pub html_path: String,
    /// Methods in ingestion order. Empty for kinds without methods.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodIndexEntry>,
}

/// Documentation record for one method, scoped under its parent entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodIndexEntry {
    /// Method name, unique within the parent.
    pub name: String,
    pub class_name: String,
    pub class_kind: DefinitionType,
    pub url_path: String,
    pub html_path: String,
}

impl IndexEntry {
    /// Validate a persisted record and tag it with its kind.
    ///
    /// Checks that stored URL paths match the canonical ones and that
    /// method names are unique within the entry.
    pub fn from_record(kind: DefinitionType, record: EntryRecord) -> Result<Self, IndexError> {
        let expected = url::path_for(kind, &record.name)
            .map_err(|_| IndexError::NotAPageKind(kind))?;
        if record.url_path != expected {
            return Err(IndexError::UrlMismatch {
                name: record.name,
                stored: record.url_path,
                expected,
            });
        }

        if !record.methods.is_empty() && !kind.is_class_like() {
            return Err(IndexError::UnexpectedMethods {
                kind,
                name: record.name,
            });
        }

        let mut seen = HashSet::new();
        let mut methods = Vec::with_capacity(record.methods.len());
        for method in record.methods {
            if method.class_name != record.name || method.class_type != kind {
                return Err(IndexError::ForeignMethod {
                    method: method.name,
                    owner: format!("{} {}", method.class_type, method.class_name),
                    parent: format!("{kind} {}", record.name),
                });
            }
            if !seen.insert(method.name.clone()) {
                return Err(IndexError::DuplicateMethod {
                    parent: record.name,
                    method: method.name,
                });
            }
            let expected = url::path_for_method(kind, &record.name, &method.name)
                .map_err(|_| IndexError::NotAPageKind(kind))?;
            if method.url_path != expected {
                return Err(IndexError::UrlMismatch {
                    name: format!("{}::{}", record.name, method.name),
                    stored: method.url_path,
                    expected,
                });
            }
            methods.push(MethodIndexEntry {
                name: method.name,
                class_name: method.class_name,
                class_kind: method.class_type,
                url_path: method.url_path,
                html_path: method.html_path,
            });
        }

        Ok(Self {
            kind,
            name: record.name,
            url_path: record.url_path,
            html_path: record.html_path,
            methods,
        })
    }

    /// Find a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodIndexEntry> {
        self.methods.iter().find(|m| m.name == name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn class_record(name: &str) -> EntryRecord {
        EntryRecord {
            name: name.to_owned(),
            url_path: format!("/reference/class/{name}/"),
            html_path: format!("class.{name}.html"),
            methods: Vec::new(),
        }
    }

    fn method_record(class: &str, name: &str) -> MethodRecord {
        MethodRecord {
            name: name.to_owned(),
            class_name: class.to_owned(),
            class_type: DefinitionType::Class,
            url_path: format!("/reference/class/{class}/{name}/"),
            html_path: format!("class.{class}.{name}.html"),
        }
    }

    #[test]
    fn test_record_json_uses_camel_case() {
        let json = r#"{
            "name": "MyClass",
            "urlPath": "/reference/class/MyClass/",
            "htmlPath": "class.MyClass.html",
            "methods": [{
                "name": "myMethod",
                "className": "MyClass",
                "classType": "class",
                "urlPath": "/reference/class/MyClass/myMethod/",
                "htmlPath": "class.MyClass.myMethod.html"
            }]
        }"#;

        let record: EntryRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.name, "MyClass");
        assert_eq!(record.methods.len(), 1);
        assert_eq!(record.methods[0].class_type, DefinitionType::Class);
    }

    #[test]
    fn test_record_methods_default_to_empty() {
        let json = r#"{"name": "strlen", "urlPath": "/reference/function/strlen/", "htmlPath": "f.html"}"#;

        let record: EntryRecord = serde_json::from_str(json).unwrap();

        assert!(record.methods.is_empty());
    }

    #[test]
    fn test_from_record_builds_entry() {
        let mut record = class_record("MyClass");
        record.methods.push(method_record("MyClass", "myMethod"));

        let entry = IndexEntry::from_record(DefinitionType::Class, record).unwrap();

        assert_eq!(entry.kind, DefinitionType::Class);
        assert_eq!(entry.url_path, "/reference/class/MyClass/");
        assert_eq!(
            entry.method("myMethod").unwrap().url_path,
            "/reference/class/MyClass/myMethod/"
        );
        assert!(entry.method("other").is_none());
    }

    #[test]
    fn test_from_record_rejects_url_mismatch() {
        let mut record = class_record("MyClass");
        record.url_path = "/reference/class/Other/".to_owned();

        let err = IndexEntry::from_record(DefinitionType::Class, record).unwrap_err();

        assert!(matches!(err, IndexError::UrlMismatch { .. }), "{err:?}");
    }

    #[test]
    fn test_from_record_rejects_url_of_other_kind() {
        let record = class_record("MyClass");

        let err = IndexEntry::from_record(DefinitionType::Interface, record).unwrap_err();

        assert!(matches!(err, IndexError::UrlMismatch { .. }), "{err:?}");
    }

    #[test]
    fn test_from_record_rejects_duplicate_method() {
        let mut record = class_record("MyClass");
        record.methods.push(method_record("MyClass", "m"));
        record.methods.push(method_record("MyClass", "m"));

        let err = IndexEntry::from_record(DefinitionType::Class, record).unwrap_err();

        assert!(matches!(err, IndexError::DuplicateMethod { .. }), "{err:?}");
    }

    #[test]
    fn test_from_record_rejects_foreign_method() {
        let mut record = class_record("MyClass");
        record.methods.push(method_record("Other", "m"));

        let err = IndexEntry::from_record(DefinitionType::Class, record).unwrap_err();

        assert!(matches!(err, IndexError::ForeignMethod { .. }), "{err:?}");
    }

    #[test]
    fn test_from_record_rejects_methods_on_function() {
        let record = EntryRecord {
            name: "strlen".to_owned(),
            url_path: "/reference/function/strlen/".to_owned(),
            html_path: "function.strlen.html".to_owned(),
            methods: vec![method_record("strlen", "m")],
        };

        let err = IndexEntry::from_record(DefinitionType::Function, record).unwrap_err();

        assert!(matches!(err, IndexError::UnexpectedMethods { .. }), "{err:?}");
    }
}
