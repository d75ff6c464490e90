//! Serve command: MCP server on stdio.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use legible_core::{AnalysisOptions, LexiconSet};

use crate::server::ReadabilityServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
///
/// stdout carries the protocol, so nothing else may print to it.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    lexicon: Arc<LexiconSet>,
    options: AnalysisOptions,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    info!(
        lexicon = lexicon.origin(),
        words = lexicon.len(),
        "starting MCP server on stdio"
    );

    let server = ReadabilityServer::new(lexicon, options, max_input_bytes);
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;

    info!("MCP server stopped");
    Ok(())
}
