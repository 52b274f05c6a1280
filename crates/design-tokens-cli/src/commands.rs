//! Subcommand handlers.

use anyhow::{Context, Result};
use design_tokens::{
    validate_build, AliasMap, OutputMode, ReportRenderer, SchemaContract, TokenDocument,
    TokenTables, Validator,
};
use log::info;

use crate::cli::{Cli, Command};

/// What a command printed and whether the build may proceed.
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub ok: bool,
}

pub fn run(cli: &Cli) -> Result<Outcome> {
    match cli.action() {
        Command::Validate => validate(cli),
        Command::Aliases => aliases(cli),
    }
}

fn load_document(cli: &Cli) -> Result<Option<TokenDocument>> {
    let Some(path) = &cli.tokens else {
        return Ok(None);
    };
    info!("loading token document {}", path.display());
    let document = TokenDocument::from_path(path)
        .with_context(|| format!("cannot load tokens from {}", path.display()))?;
    Ok(Some(document))
}

fn contract(cli: &Cli) -> SchemaContract {
    let contract = SchemaContract::new(&cli.schema, &cli.schema_version);
    match &cli.pinned {
        Some(reference) => contract.with_pinned_reference(reference.as_str()),
        None => contract,
    }
}

fn validate(cli: &Cli) -> Result<Outcome> {
    let document = load_document(cli)?;
    let errors = validate_build(&contract(cli), document.as_ref(), &Validator::default());

    let renderer = ReportRenderer::new(OutputMode::from(cli.output))?;
    let output = renderer.render(&errors)?;
    Ok(Outcome {
        output,
        ok: errors.is_empty(),
    })
}

fn aliases(cli: &Cli) -> Result<Outcome> {
    let document = load_document(cli)?;
    let tables = match &document {
        Some(document) => &document.tables,
        None => TokenTables::canonical(),
    };

    let output = serde_json::to_string_pretty(&AliasMap::build(tables))
        .context("cannot serialize alias map")?;
    Ok(Outcome { output, ok: true })
}
