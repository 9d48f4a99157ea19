//! Processing API for marklet sources
//!
//! This module selects what to produce from a source: a stage (token, ast or
//! html) and a format for that stage. Format strings are written
//! `<stage>-<format>`, for example `token-simple`, `ast-treeviz` or
//! `html-fragment`.

use crate::ast::Document;
use crate::formats::{serialize_ast_tag, to_treeviz_str};
use crate::lexer::Token;
use crate::pipeline::Pipeline;
use std::fs;
use std::path::Path;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
    Html,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Tag,
    Treeviz,
    Fragment,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

/// Errors that can occur during processing
#[derive(Debug, thiserror::Error)]
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
    Serialization(String),
}

impl ProcessingStage {
    pub fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
            ProcessingStage::Html => "html",
        }
    }
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Fragment => "fragment",
        }
    }
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let Some((stage, format)) = format_str.split_once('-') else {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        };

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            "html" => ProcessingStage::Html,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "treeviz" => OutputFormat::Treeviz,
            "fragment" => OutputFormat::Fragment,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "Format '{}' not supported for {} stage",
                format.name(),
                stage.name()
            )));
        }

        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        [
            (ProcessingStage::Token, OutputFormat::Simple),
            (ProcessingStage::Token, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Tag),
            (ProcessingStage::Ast, OutputFormat::Treeviz),
            (ProcessingStage::Ast, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Yaml),
            (ProcessingStage::Html, OutputFormat::Fragment),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }

    pub fn format_string(&self) -> String {
        format!("{}-{}", self.stage.name(), self.format.name())
    }
}

/// Process source text according to the given specification
pub fn process_str(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    process_with(&mut Pipeline::new(), source, spec)
}

/// Process source text through an existing pipeline (and its trace hook)
pub fn process_with(
    pipeline: &mut Pipeline<'_>,
    source: &str,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = pipeline.tokenize(source);
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Ast => {
            let doc = pipeline.document(source);
            format_document(&doc, spec.format)
        }
        ProcessingStage::Html => Ok(pipeline.run(source)),
    }
}

/// Process a file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path)?;
    process_str(&content, spec)
}

/// Format tokens according to the specified format
pub fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                if token.is_newline() {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{} format does not apply to tokens",
            other.name()
        ))),
    }
}

/// Format a parsed document according to the specified format
pub fn format_document(doc: &Document, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Tag => Ok(serialize_ast_tag(doc)),
        OutputFormat::Treeviz => Ok(to_treeviz_str(doc)),
        OutputFormat::Json => serde_json::to_string_pretty(doc)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(doc).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{} format does not apply to the ast",
            other.name()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::format_string)
        .collect()
}
