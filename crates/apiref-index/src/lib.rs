//! Definition kinds, canonical URLs and the build-artifact index for apiref.
//!
//! This crate provides:
//! - [`DefinitionType`]: the closed set of documented kinds and their URL segments
//! - [`url`]: canonical URL paths for reference pages, and their inverse
//! - [`renamed_api`]: legacy name table for permanent redirects
//! - [`ApiIndex`]: per-kind name lookup, loaded once from an [`IndexSource`]
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use apiref_index::{ApiIndex, DefinitionType, FsIndexSource};
//!
//! let source = Arc::new(FsIndexSource::new(PathBuf::from("build/index")));
//! let index = ApiIndex::new(source);
//!
//! let entry = index.lookup(DefinitionType::Function, "strlen")?;
//! # Ok(())
//! # }
//! ```

mod definition_type;
mod entry;
mod fs;
mod index;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod renames;
mod source;
pub mod url;

pub use definition_type::{DefinitionType, InvalidDefinitionType};
pub use entry::{EntryRecord, IndexEntry, MethodIndexEntry, MethodRecord};
pub use fs::FsIndexSource;
pub use index::{ApiIndex, KindIndex};
#[cfg(feature = "mock")]
pub use mock::MockIndexSource;
pub use renames::{renamed_api, renamed_apis};
pub use source::{IndexError, IndexSource};
