//! `apiref resolve` command implementation.

use apiref_config::CliSettings;
use apiref_site::PageRequest;
use clap::Args;

use super::{CommonArgs, open_reference};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Definition kind (class, interface, trait, enum, typedef, function).
    #[arg(short = 't', long = "type")]
    kind: String,

    /// Definition name.
    #[arg(short, long)]
    name: String,

    /// Method name, for member pages.
    #[arg(short, long)]
    method: Option<String>,
}

impl ResolveArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(CliSettings::default())?;
        let reference = open_reference(&config);

        let request = PageRequest {
            kind: Some(self.kind),
            name: Some(self.name),
            method: self.method,
        };
        tracing::debug!(?request, "Resolving request");
        let resolution = reference.resolve(&request)?;

        output.result(&serde_json::to_string_pretty(&resolution)?);
        Ok(())
    }
}
