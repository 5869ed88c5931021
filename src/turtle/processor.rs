//! File processing API for turtle scripts
//!
//! This module provides an extensible API for processing turtle scripts at
//! different stages (token, ast) into different formats (simple, json, tag, treeviz).
//!
//! ## Example Usage
//!
//! ```rust
//! let spec = ProcessingSpec::from_string("ast-treeviz")?;
//! let output = process_source("repeat 4 { move 10 }", &spec, &OutputConfig::default())?;
//! ```

use crate::turtle::config::OutputConfig;
use crate::turtle::formats::{serialize_ast_tag, to_json, to_treeviz_str};
use crate::turtle::lexer::{tokenize, Token, TokenKind};
use crate::turtle::parser::{parse, Diagnostics, ParseError};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Tag,
    Treeviz,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Tag | OutputFormat::Treeviz) => {
                Err(ProcessingError::InvalidFormatType(format!(
                    "'{}' only works with the ast stage",
                    format_str
                )))
            }
            (ProcessingStage::Ast, OutputFormat::Simple) => Err(ProcessingError::InvalidFormatType(
                "'simple' only works with the token stage".to_string(),
            )),
            _ => Ok(ProcessingSpec { stage, format }),
        }
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Tag,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Treeviz,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
        ]
    }

    /// The format string this spec was parsed from
    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
        };
        format!("{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Tokenizing or parsing failed; the rendered diagnostics are kept
    #[error("{rendered}")]
    Failed {
        diagnostics: Diagnostics,
        rendered: String,
    },
}

impl ProcessingError {
    fn failed(diagnostics: Diagnostics, source: &str) -> Self {
        let rendered = diagnostics.render(source);
        ProcessingError::Failed {
            diagnostics,
            rendered,
        }
    }
}

/// Process a turtle script held in memory
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    config: &OutputConfig,
) -> Result<String, ProcessingError> {
    debug!(spec = %spec.name(), bytes = source.len(), "processing source");

    match spec.stage {
        ProcessingStage::Token => {
            let stream = tokenize(source);
            if stream.has_failed() {
                let mut diagnostics = Diagnostics::default();
                diagnostics.extend(stream.errors().iter().cloned().map(ParseError::from));
                return Err(ProcessingError::failed(diagnostics, source));
            }
            format_tokens(stream.tokens(), source, spec.format)
        }
        ProcessingStage::Ast => {
            let root = parse(source).map_err(|d| ProcessingError::failed(d, source))?;
            match spec.format {
                OutputFormat::Tag => Ok(serialize_ast_tag(&root, source, &config.indent)),
                OutputFormat::Treeviz => Ok(to_treeviz_str(&root, source, config.label_width)),
                OutputFormat::Json => Ok(to_json(&root)?),
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
                    "'simple' only works with the token stage".to_string(),
                )),
            }
        }
    }
}

/// Process a turtle script file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    config: &OutputConfig,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    info!(path = %file_path.display(), spec = %spec.name(), "processing file");
    let content = fs::read_to_string(file_path)?;
    process_source(&content, spec, config)
}

#[derive(Serialize)]
struct TokenView<'a> {
    kind: TokenKind,
    span: &'a logos::Span,
    text: &'a str,
}

/// Format tokens according to the specified format
fn format_tokens(
    tokens: &[Token],
    source: &str,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                let text = token.text(source);
                match token.kind {
                    TokenKind::Number | TokenKind::Identifier => {
                        result.push_str(&format!("<{}:{}>", token.kind.tag(), text))
                    }
                    kind => result.push_str(&format!("<{}>", kind.tag())),
                }
                if token.kind.is_whitespace() && text.contains('\n') {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let views: Vec<TokenView> = tokens
                .iter()
                .map(|token| TokenView {
                    kind: token.kind,
                    span: &token.span,
                    text: token.text(source),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&views)?)
        }
        OutputFormat::Tag | OutputFormat::Treeviz => Err(ProcessingError::InvalidFormatType(
            "tree formats only work with the ast stage".to_string(),
        )),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}
