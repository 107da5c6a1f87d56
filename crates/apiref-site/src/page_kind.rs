//! Per-kind page behavior.
//!
//! Each page kind is a record of the few hooks resolution needs, dispatched
//! by [`DefinitionType`]:
//! - `sub_entry`: how to find a member page below an entry, if the kind has any
//! - `content_ref`: which pre-rendered fragment the page shows
//! - `rename`: legacy-name lookup applied before any index access

use apiref_index::{DefinitionType, IndexEntry, MethodIndexEntry, renamed_api};

/// Finds a member of an entry by name.
pub type SubEntryFn = for<'a> fn(&'a IndexEntry, &str) -> Option<&'a MethodIndexEntry>;

/// Picks the content reference for a page.
pub type ContentRefFn = for<'a> fn(&'a IndexEntry, Option<&'a MethodIndexEntry>) -> &'a str;

/// Maps a legacy name to its canonical name.
pub type RenameFn = fn(&str) -> Option<&'static str>;

/// Behavior hooks for one page kind.
#[derive(Clone, Copy)]
pub struct PageKind {
    pub kind: DefinitionType,
    /// `None` for kinds without member pages; the method parameter is ignored.
    pub sub_entry: Option<SubEntryFn>,
    pub content_ref: ContentRefFn,
    pub rename: RenameFn,
}

fn method_of<'a>(entry: &'a IndexEntry, name: &str) -> Option<&'a MethodIndexEntry> {
    entry.method(name)
}

fn entry_content<'a>(entry: &'a IndexEntry, _method: Option<&'a MethodIndexEntry>) -> &'a str {
    &entry.html_path
}

fn member_or_entry_content<'a>(
    entry: &'a IndexEntry,
    method: Option<&'a MethodIndexEntry>,
) -> &'a str {
    method.map_or(entry.html_path.as_str(), |m| m.html_path.as_str())
}

const fn class_like(kind: DefinitionType) -> PageKind {
    PageKind {
        kind,
        sub_entry: Some(method_of),
        content_ref: member_or_entry_content,
        rename: renamed_api,
    }
}

const fn standalone(kind: DefinitionType) -> PageKind {
    PageKind {
        kind,
        sub_entry: None,
        content_ref: entry_content,
        rename: renamed_api,
    }
}

static PAGE_KINDS: [PageKind; 6] = [
    class_like(DefinitionType::Class),
    class_like(DefinitionType::Interface),
    class_like(DefinitionType::Trait),
    class_like(DefinitionType::Enum),
    standalone(DefinitionType::Typedef),
    standalone(DefinitionType::Function),
];

/// Hooks for `kind`, or `None` if the kind has no pages of its own.
#[must_use]
pub fn page_kind(kind: DefinitionType) -> Option<&'static PageKind> {
    PAGE_KINDS.iter().find(|pk| pk.kind == kind)
}
