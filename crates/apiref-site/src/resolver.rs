//! Page resolution.
//!
//! Turns a [`PageRequest`] into a [`Resolution`] in fixed order:
//!
//! ```text
//! START -> TYPE_RESOLVED -> RENAME_CHECKED -> ENTRY_RESOLVED -> METHOD_RESOLVED | SKIP -> READY
//!   |            |                |                 |                  |
//! BAD_REQUEST  BAD_REQUEST     REDIRECT          NOT_FOUND          NOT_FOUND
//! ```
//!
//! Rename hits redirect before the index is touched, so a legacy name never
//! renders a page of its own.

use apiref_index::{DefinitionType, IndexError, InvalidDefinitionType, url};
use serde::{Deserialize, Serialize};

use crate::breadcrumbs::{BreadcrumbItem, build_breadcrumbs};
use crate::nav::active_nav_path;
use crate::page_kind::page_kind;
use crate::reference::Reference;

/// Request parameters as extracted by the router.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// Definition kind (`type` parameter).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Definition name.
    pub name: Option<String>,
    /// Method name, for member pages.
    pub method: Option<String>,
}

impl PageRequest {
    /// Request for a definition page.
    #[must_use]
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            name: Some(name.into()),
            method: None,
        }
    }

    /// Focus a member of the definition.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

/// Data handed to the rendering collaborator for a resolved page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageModel {
    /// Page title.
    pub title: String,
    pub kind: DefinitionType,
    /// Root definition name.
    pub name: String,
    /// Method name for member pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Canonical URL path of the page.
    pub url_path: String,
    pub breadcrumbs: Vec<BreadcrumbItem>,
    /// Labels of the sidebar chain to highlight.
    pub active_nav_path: Vec<String>,
    /// Reference to the pre-rendered content fragment.
    pub content_ref: String,
}

/// Successful outcome of resolving a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Resolution {
    /// Permanent redirect to the canonical page.
    Redirect { location: String },
    /// Page ready for rendering.
    Page(PageModel),
}

/// Name or member missing from the index, or content missing from the store.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("No {kind} named {name}")]
    Entry { kind: DefinitionType, name: String },
    #[error("No method {method} in {kind} {name}")]
    Method {
        kind: DefinitionType,
        name: String,
        method: String,
    },
    #[error("Content not found: {0}")]
    Content(String),
}

/// Error returned when a request cannot be resolved to a page or redirect.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Required parameter absent or empty.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    /// `type` names no page kind.
    #[error(transparent)]
    InvalidDefinitionType(#[from] InvalidDefinitionType),
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Index artifacts could not be loaded.
    #[error("Index error: {0}")]
    Index(#[from] IndexError),
}

impl ResolveError {
    /// Whether the request itself is malformed.
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_) | Self::InvalidDefinitionType(_)
        )
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

fn required<'a>(value: Option<&'a str>, param: &'static str) -> Result<&'a str, ResolveError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ResolveError::MissingParameter(param))
}

/// Resolve a request against the reference context.
pub(crate) fn resolve(
    reference: &Reference,
    request: &PageRequest,
) -> Result<Resolution, ResolveError> {
    // START
    let type_param = required(request.kind.as_deref(), "type")?;
    let name = required(request.name.as_deref(), "name")?;

    // TYPE_RESOLVED
    let kind = DefinitionType::parse(type_param)?;
    let hooks =
        page_kind(kind).ok_or_else(|| InvalidDefinitionType(type_param.to_owned()))?;
    tracing::debug!(kind = %kind, name, "Definition type resolved");

    // RENAME_CHECKED
    if let Some(canonical) = (hooks.rename)(name) {
        let location = url::path_for(kind, canonical)?;
        tracing::debug!(kind = %kind, name, canonical, "Renamed definition, redirecting");
        return Ok(Resolution::Redirect { location });
    }

    // ENTRY_RESOLVED
    let root = reference
        .index()
        .lookup(kind, name)?
        .ok_or_else(|| NotFoundError::Entry {
            kind,
            name: name.to_owned(),
        })?;

    // METHOD_RESOLVED or SKIP
    let method_param = request.method.as_deref().filter(|m| !m.is_empty());
    let method = match (hooks.sub_entry, method_param) {
        (Some(sub_entry), Some(method_name)) => {
            let method = sub_entry(root, method_name).ok_or_else(|| NotFoundError::Method {
                kind,
                name: name.to_owned(),
                method: method_name.to_owned(),
            })?;
            tracing::debug!(kind = %kind, name, method = method_name, "Method resolved");
            Some(method)
        }
        _ => None,
    };

    // READY
    let content_ref = (hooks.content_ref)(root, method);
    if !reference.content().exists(content_ref) {
        tracing::warn!(kind = %kind, name, content_ref, "Pre-rendered content missing");
        return Err(NotFoundError::Content(content_ref.to_owned()).into());
    }

    let active_nav_path = active_nav_path(kind, root, method);
    debug_assert!(
        reference
            .built_navigation()
            .is_none_or(|nav| nav.contains_path(&active_nav_path)),
        "active nav path missing from navigation tree"
    );

    let (title, url_path) = match method {
        Some(method) => (
            format!("{}::{}", root.name, method.name),
            method.url_path.clone(),
        ),
        None => (root.name.clone(), root.url_path.clone()),
    };

    Ok(Resolution::Page(PageModel {
        title,
        kind,
        name: root.name.clone(),
        method: method.map(|m| m.name.clone()),
        url_path,
        breadcrumbs: build_breadcrumbs(reference.site_name(), kind, root, method),
        active_nav_path,
        content_ref: content_ref.to_owned(),
    }))
}
