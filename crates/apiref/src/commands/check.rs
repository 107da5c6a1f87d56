//! `apiref check` command implementation.

use apiref_config::CliSettings;
use apiref_index::{DefinitionType, IndexError, renamed_apis};
use apiref_site::Reference;
use clap::Args;

use super::{CommonArgs, open_reference};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(CliSettings::default())?;
        let reference = open_reference(&config);

        let definitions = reference.warm_up()?;
        let nav_nodes = reference.navigation()?.descendant_count();
        output.info(&format!(
            "Loaded {definitions} definitions ({nav_nodes} navigation nodes)"
        ));

        for (legacy, canonical) in unindexed_renames(&reference)? {
            output.warning(&format!("Rename target not indexed: {legacy} -> {canonical}"));
        }

        let missing = missing_content(&reference)?;
        for content_ref in &missing {
            output.warning(&format!("Missing content: {content_ref}"));
        }
        if !missing.is_empty() {
            return Err(CliError::Validation(format!(
                "{} content fragment(s) missing",
                missing.len()
            )));
        }

        output.success("All content fragments present");
        Ok(())
    }
}

/// Content references of every page whose fragment is absent.
fn missing_content(reference: &Reference) -> Result<Vec<String>, IndexError> {
    let content = reference.content();
    let mut missing = Vec::new();

    for kind in DefinitionType::PAGE_KINDS {
        for entry in reference.index().index_for(kind)?.entries() {
            let refs = std::iter::once(&entry.html_path)
                .chain(entry.methods.iter().map(|m| &m.html_path));
            missing.extend(
                refs.filter(|content_ref| !content.exists(content_ref))
                    .cloned(),
            );
        }
    }

    Ok(missing)
}

/// Legacy names whose canonical target is absent from every page kind.
///
/// Redirects for these lead to pages that resolve as not found.
fn unindexed_renames(
    reference: &Reference,
) -> Result<Vec<(&'static str, &'static str)>, IndexError> {
    let mut unindexed = Vec::new();
    for &(legacy, canonical) in renamed_apis() {
        let mut indexed = false;
        for kind in DefinitionType::PAGE_KINDS {
            if reference.index().lookup(kind, canonical)?.is_some() {
                indexed = true;
                break;
            }
        }
        if !indexed {
            unindexed.push((legacy, canonical));
        }
    }
    Ok(unindexed)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use apiref_index::MockIndexSource;
    use apiref_site::{MemoryContentStore, ReferenceConfig};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_missing_content_lists_entries_and_methods() {
        let source = MockIndexSource::new()
            .with_entry(DefinitionType::Class, "MyClass")
            .with_method(DefinitionType::Class, "MyClass", "myMethod")
            .with_entry(DefinitionType::Function, "strlen");
        let content = MemoryContentStore::new().with_fragment("class.MyClass.html", "<p/>");
        let reference = Reference::new(
            Arc::new(source),
            Arc::new(content),
            ReferenceConfig::default(),
        );

        let missing = missing_content(&reference).unwrap();

        assert_eq!(
            missing,
            vec!["class.MyClass.myMethod.html", "function.strlen.html"]
        );
    }

    #[test]
    fn test_missing_content_empty_when_complete() {
        let source = MockIndexSource::new().with_entry(DefinitionType::Typedef, "T");
        let content = MemoryContentStore::new().with_fragment("typedef.T.html", "<p/>");
        let reference = Reference::new(
            Arc::new(source),
            Arc::new(content),
            ReferenceConfig::default(),
        );

        assert!(missing_content(&reference).unwrap().is_empty());
    }

    #[test]
    fn test_unindexed_renames() {
        let source = MockIndexSource::new()
            .with_entry(DefinitionType::Class, "HH.Vector")
            .with_entry(DefinitionType::Interface, "HH.Map");
        let reference = Reference::new(
            Arc::new(source),
            Arc::new(MemoryContentStore::new()),
            ReferenceConfig::default(),
        );

        let unindexed = unindexed_renames(&reference).unwrap();

        assert!(!unindexed.contains(&("Vector", "HH.Vector")));
        assert!(!unindexed.contains(&("Map", "HH.Map")));
        assert!(unindexed.contains(&("Set", "HH.Set")));
        assert_eq!(unindexed.len(), renamed_apis().len() - 2);
    }
}
