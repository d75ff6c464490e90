//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the readability engine to AI assistants over stdio. The server is
//! a presentation layer: each `#[tool]` method delegates to `legible_core`
//! and serializes the result.
//!
//! One [`LexiconSet`] is built at startup and shared by every request.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use legible_core::{AnalysisOptions, LexiconSet, count_syllables, readability, syllables};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The plain text to analyze.
    pub text: String,
}

/// Parameters for the `check_grade` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckGradeParams {
    /// The plain text to analyze.
    pub text: String,
    /// Maximum acceptable text-standard grade.
    pub max_grade: Option<u32>,
}

/// Parameters for the `count_syllables` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountSyllablesParams {
    /// Words to count.
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SyllableCount<'a> {
    word: &'a str,
    syllables: usize,
    complex: bool,
}

/// MCP server exposing readability analysis.
#[derive(Clone)]
pub struct ReadabilityServer {
    lexicon: Arc<LexiconSet>,
    options: AnalysisOptions,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

#[tool_router]
impl ReadabilityServer {
    /// Create a server sharing `lexicon` across requests.
    ///
    /// Texts longer than `max_input_bytes` are rejected.
    pub fn new(
        lexicon: Arc<LexiconSet>,
        options: AnalysisOptions,
        max_input_bytes: Option<usize>,
    ) -> Self {
        Self {
            lexicon,
            options,
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    fn check_size(&self, bytes: usize) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if bytes > max => Err(McpError::invalid_params(
                format!("input too large: {bytes} bytes (limit: {max} bytes)"),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "lexicon": self.lexicon.origin(),
            "lexicon_size": self.lexicon.len(),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}\nlexicon: {} ({} words)",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
                self.lexicon.origin(),
                self.lexicon.len(),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Full readability report.
    #[tool(
        description = "Compute readability metrics for plain text: Flesch reading ease, Flesch-Kincaid, ARI, SMOG, Coleman-Liau, Dale-Chall, Linsear Write, Gunning Fog, consensus grade, word/sentence/syllable counts and reading time."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", "executing MCP tool");
        self.check_size(params.text.len())?;

        let report = readability::analyze_with(&params.text, &self.lexicon, &self.options);
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_text",
            words = report.word_count,
            grade = ?report.text_standard_grade,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Consensus grade with an optional gate.
    #[tool(
        description = "Check the consensus US grade level of plain text. Returns the report plus whether it exceeds max_grade."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", text_len = params.text.len()))]
    fn check_grade(
        &self,
        Parameters(params): Parameters<CheckGradeParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_grade", max_grade = ?params.max_grade, "executing MCP tool");
        self.check_size(params.text.len())?;

        let check = readability::check_readability(
            &params.text,
            &self.lexicon,
            &self.options,
            params.max_grade,
        );
        let json = to_json(&check)?;

        tracing::info!(
            tool = "check_grade",
            over_max = check.over_max,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Per-word syllable estimates.
    #[tool(description = "Estimate syllables for each word and flag complex (3+ syllable) words.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", words = params.words.len()))]
    fn count_syllables(
        &self,
        Parameters(params): Parameters<CountSyllablesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.check_size(params.words.iter().map(String::len).sum())?;
        let counts: Vec<SyllableCount<'_>> = params
            .words
            .iter()
            .map(|word| {
                let count = count_syllables(word);
                SyllableCount {
                    word: word.as_str(),
                    syllables: count,
                    complex: syllables::is_complex(word, count),
                }
            })
            .collect();
        let json = to_json(&counts)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_handler]
impl ServerHandler for ReadabilityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Pass plain text (no markup) to analyze_text or check_grade for readability scores.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
