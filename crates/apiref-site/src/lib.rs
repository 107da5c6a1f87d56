//! Page resolution and navigation for apiref.
//!
//! This crate provides:
//! - [`Reference`]: shared read-only context that resolves page requests
//! - Breadcrumb trails and the sidebar navigation tree for resolved pages
//! - [`ContentStore`]: access to pre-rendered content fragments
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use apiref_index::FsIndexSource;
//! use apiref_site::{FsContentStore, PageRequest, Reference, ReferenceConfig, Resolution};
//!
//! let source = Arc::new(FsIndexSource::new(PathBuf::from("build/index")));
//! let content = Arc::new(FsContentStore::new(PathBuf::from("build/html")));
//! let reference = Arc::new(Reference::new(source, content, ReferenceConfig::default()));
//!
//! match reference.resolve(&PageRequest::new("function", "strlen"))? {
//!     Resolution::Redirect { location } => println!("-> {location}"),
//!     Resolution::Page(page) => println!("{:?}", page.breadcrumbs),
//! }
//! # Ok(())
//! # }
//! ```

mod breadcrumbs;
mod content;
mod nav;
mod page_kind;
mod reference;
mod resolver;

pub use breadcrumbs::{BreadcrumbItem, build_breadcrumbs};
pub use content::{ContentError, ContentStore, FsContentStore, MemoryContentStore};
pub use nav::{NavNode, active_nav_path};
pub use page_kind::{PageKind, page_kind};
pub use reference::{Reference, ReferenceConfig};
pub use resolver::{NotFoundError, PageModel, PageRequest, Resolution, ResolveError};
