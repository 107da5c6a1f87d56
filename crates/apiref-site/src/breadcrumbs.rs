//! Breadcrumb trails for reference pages.
//!
//! A trail runs from the site root down to the page being viewed:
//!
//! ```text
//! Hack (/) > Reference (/reference/) > Class (/reference/class/) > MyClass
//! Hack (/) > Reference (/reference/) > Class (/reference/class/) > MyClass (linked) > myMethod
//! ```
//!
//! Every item except the last carries a URL. The last item never does.

use apiref_index::{DefinitionType, IndexEntry, MethodIndexEntry, url};
use serde::Serialize;

/// Label of the reference root crumb.
pub const REFERENCE_LABEL: &str = "Reference";

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display label.
    pub label: String,
    /// Link target path. `None` for the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl BreadcrumbItem {
    fn linked(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
        }
    }

    fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
        }
    }
}

/// Build the trail for a definition page or one of its method pages.
///
/// The root entry is linked only when a method is present, since it is
/// then an ancestor rather than the page itself.
#[must_use]
pub fn build_breadcrumbs(
    site_name: &str,
    kind: DefinitionType,
    root: &IndexEntry,
    method: Option<&MethodIndexEntry>,
) -> Vec<BreadcrumbItem> {
    let mut trail = vec![
        BreadcrumbItem::linked(site_name, "/"),
        BreadcrumbItem::linked(REFERENCE_LABEL, url::REFERENCE_ROOT),
        BreadcrumbItem::linked(kind.label(), url::path_for_kind(kind)),
    ];

    match method {
        Some(method) => {
            trail.push(BreadcrumbItem::linked(&root.name, &root.url_path));
            trail.push(BreadcrumbItem::current(&method.name));
        }
        None => trail.push(BreadcrumbItem::current(&root.name)),
    }

    trail
}
