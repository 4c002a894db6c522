/*!
# Error System for jsdoc-bridge

Typed errors for the two halves of the crate:

- [`BridgeError`]: fatal failures while turning a parsed tree into the
  standardized AST. A build either succeeds completely or yields exactly
  one of these.
- [`ResolveError`]: surfaced only when a caller asks for module *text*;
  plain resolution reports "not found" as `None`.
- [`LookupError`]: low level failures inside a single lookup attempt.
  The resolver logs and swallows them, callers never see them unless they
  drive [`crate::resolver::ModuleLocator`] directly.
*/

use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of characters of source text quoted in an error message.
const FRAGMENT_LIMIT: usize = 80;

/// Failure while building the standardized AST
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("failed to load JavaScript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("parser returned no tree for {source_name}")]
    ParseAborted { source_name: String },

    #[error("{source_name}:{line}:{column}: syntax error near `{fragment}`")]
    SyntaxError {
        source_name: String,
        line: usize,
        column: usize,
        fragment: String,
    },

    #[error("unrecognized node type {kind} with source: {fragment}")]
    UnrecognizedNodeKind { kind: String, fragment: String },

    #[error("unsupported syntax `{kind}` with source: {fragment}")]
    UnsupportedSyntax { kind: String, fragment: String },

    #[error("unrecognized keyword literal `{token}` with source: {fragment}")]
    UnrecognizedKeyword { token: String, fragment: String },

    #[error("unrecognized operator `{operator}` in {kind}")]
    UnrecognizedOperator { operator: String, kind: &'static str },

    #[error("malformed {kind}: missing {field} in: {fragment}")]
    MalformedNode {
        kind: &'static str,
        field: &'static str,
        fragment: String,
    },

    #[error("node type {kind} cannot appear here: {fragment}")]
    UnexpectedNode { kind: String, fragment: String },
}

impl BridgeError {
    pub fn unsupported(kind: impl Into<String>, source: &str) -> Self {
        Self::UnsupportedSyntax {
            kind: kind.into(),
            fragment: fragment(source),
        }
    }

    pub fn unexpected(kind: impl Into<String>, source: &str) -> Self {
        Self::UnexpectedNode {
            kind: kind.into(),
            fragment: fragment(source),
        }
    }

    pub fn malformed(kind: &'static str, field: &'static str, source: &str) -> Self {
        Self::MalformedNode {
            kind,
            field,
            fragment: fragment(source),
        }
    }
}

/// Failure surfaced by [`crate::resolver::ModuleResolver::load`]
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("module not found: {0}")]
    NotFound(String),

    #[error("failed to read module {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure inside a single module lookup attempt
#[derive(Error, Debug)]
pub enum LookupError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid package descriptor: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid module URI: {0}")]
    Uri(#[from] url::ParseError),

    #[error("not a local file location: {0}")]
    NotLocal(String),
}

/// Single-line, length-limited excerpt of source text for error messages.
pub fn fragment(source: &str) -> String {
    let mut excerpt: String = source
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(FRAGMENT_LIMIT + 1)
        .collect();
    if excerpt.chars().count() > FRAGMENT_LIMIT {
        excerpt = excerpt.chars().take(FRAGMENT_LIMIT).collect();
        excerpt.push_str("...");
    }
    excerpt
}
