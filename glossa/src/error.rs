use crate::ast::Span;
use std::fmt;
use std::sync::Arc;

/// Detailed error information with source location
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub message: String,
    pub span: Span,
    pub source_id: String,
    pub source_text: Arc<str>,
    pub suggestion: Option<String>,
}

/// Error types for the Glossa system with source location tracking
#[derive(Debug, Clone)]
pub enum GlossaError {
    /// Malformed rule text
    Syntax(Box<ErrorDetails>),

    /// A symbol is not a recognized IPA grapheme or is missing from the inventory
    InvalidSymbol(Box<ErrorDetails>),

    /// A grammatical tag is not part of the recognized vocabulary
    UnknownTag(Box<ErrorDetails>),

    /// A role appears twice in a word-order rule
    DuplicateRole(Box<ErrorDetails>),

    /// An environment spec claims more than one context element for one edge
    AmbiguousEnvironment(Box<ErrorDetails>),

    /// A rule replacement conflicts with in-flight evolution state
    Conflict(String),

    /// A rule replacement would orphan references held by other rules
    StaleReference(String),

    /// Removing an inventory symbol that is still referenced
    SymbolInUse { symbol: String, referenced_by: String },

    /// A revert target that is not in the generation history
    GenerationNotFound(String),

    /// A configured limit was exceeded
    LimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
        suggestion: String,
    },

    /// Engine error without specific source location
    Engine(String),
}

impl GlossaError {
    /// Create a syntax error with source information
    pub fn syntax(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::Syntax(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create an invalid-symbol error with source information
    pub fn invalid_symbol(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::InvalidSymbol(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create an invalid-symbol error with a closest-symbol suggestion
    pub fn invalid_symbol_with_suggestion(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::InvalidSymbol(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// Create an unknown-tag error with source information
    pub fn unknown_tag(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::UnknownTag(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(suggestion.into()),
        }))
    }

    /// Create a duplicate-role error with source information
    pub fn duplicate_role(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::DuplicateRole(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: None,
        }))
    }

    /// Create an ambiguous-environment error with source information
    pub fn ambiguous_environment(
        message: impl Into<String>,
        span: Span,
        source_id: impl Into<String>,
        source_text: Arc<str>,
    ) -> Self {
        Self::AmbiguousEnvironment(Box::new(ErrorDetails {
            message: message.into(),
            span,
            source_id: source_id.into(),
            source_text,
            suggestion: Some(
                "Each side of '_' takes at most one of '#', 'V', 'C', or a symbol".to_string(),
            ),
        }))
    }
}

fn write_located(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    details: &ErrorDetails,
) -> fmt::Result {
    write!(f, "{}: {}", kind, details.message)?;
    if let Some(suggestion) = &details.suggestion {
        write!(f, " (suggestion: {})", suggestion)?;
    }
    write!(
        f,
        " at {}:{}:{}",
        details.source_id, details.span.line, details.span.col
    )
}

impl fmt::Display for GlossaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlossaError::Syntax(details) => write_located(f, "Syntax error", details),
            GlossaError::InvalidSymbol(details) => write_located(f, "Invalid symbol", details),
            GlossaError::UnknownTag(details) => write_located(f, "Unknown tag", details),
            GlossaError::DuplicateRole(details) => write_located(f, "Duplicate role", details),
            GlossaError::AmbiguousEnvironment(details) => {
                write_located(f, "Ambiguous environment", details)
            }
            GlossaError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            GlossaError::StaleReference(msg) => write!(f, "Stale reference: {}", msg),
            GlossaError::SymbolInUse {
                symbol,
                referenced_by,
            } => write!(
                f,
                "Symbol in use: '{}' is still referenced by {}",
                symbol, referenced_by
            ),
            GlossaError::GenerationNotFound(label) => {
                write!(f, "Generation not found: '{}'", label)
            }
            GlossaError::LimitExceeded {
                limit_name,
                limit_value,
                actual_value,
                suggestion,
            } => write!(
                f,
                "Limit exceeded: {} (limit {}, actual {}). {}",
                limit_name, limit_value, actual_value, suggestion
            ),
            GlossaError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for GlossaError {}

impl From<std::fmt::Error> for GlossaError {
    fn from(err: std::fmt::Error) -> Self {
        GlossaError::Engine(format!("Format error: {}", err))
    }
}
