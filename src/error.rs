//! Error handling types for the converter
//!
//! This module provides custom error types that give detailed information
//! about conversion failures, grouped by the stage that produced them.

use std::{error::Error, fmt};

/// Main error type for conversion operations
#[derive(Debug)]
pub struct ConvertError {
    /// The specific kind of error
    kind: ConvertErrorKind,
    /// Source error that caused this error
    source: Option<Box<dyn Error>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Top-level error categories
#[derive(Debug, Clone)]
pub enum ConvertErrorKind {
    Config(ConfigError),
    Xml(XmlError),
    Identifier(IdentifierError),
    Format(FormatError),
    IO(IOError),
}

/// Configuration errors
///
/// These fail the run immediately; the converter never substitutes a
/// sentinel value for a missing setting.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// The instance namespace is unset or empty
    MissingInstanceNamespace,
    /// The instance namespace is not a valid IRI
    InvalidInstanceNamespace(String),
    /// The options document could not be parsed
    InvalidOptions(String),
}

/// Input document errors
#[derive(Debug, Clone)]
pub enum XmlError {
    /// The source text is not well-formed XML
    Malformed(String),
}

/// Identifier minting errors
#[derive(Debug, Clone)]
pub enum IdentifierError {
    /// A generated identifier is not a valid IRI
    InvalidIri(String),
}

/// Output formatting errors
#[derive(Debug, Clone)]
pub enum FormatError {
    /// The requested output format is not recognized
    UnknownFormat(String),
}

/// IO operation errors
#[derive(Debug, Clone)]
pub enum IOError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file
    ReadError(String),
    /// Error writing to a file
    WriteError(String),
}

impl ConvertError {
    pub fn new(kind: ConvertErrorKind) -> Self {
        Self {
            kind,
            source: None,
            context: None,
        }
    }

    pub fn kind(&self) -> &ConvertErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_error = match &self.kind {
            ConvertErrorKind::Config(err) => err.to_string(),
            ConvertErrorKind::Xml(err) => err.to_string(),
            ConvertErrorKind::Identifier(err) => err.to_string(),
            ConvertErrorKind::Format(err) => err.to_string(),
            ConvertErrorKind::IO(err) => err.to_string(),
        };

        write!(f, "{}", base_error)?;

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInstanceNamespace => {
                write!(f, "Instance namespace is not configured")
            }
            Self::InvalidInstanceNamespace(ns) => {
                write!(f, "Instance namespace is not a valid IRI: '{}'", ns)
            }
            Self::InvalidOptions(msg) => write!(f, "Invalid options document: {}", msg),
        }
    }
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(msg) => write!(f, "Malformed XML input: {}", msg),
        }
    }
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIri(iri) => {
                write!(f, "Generated identifier is not a valid IRI: '{}'", iri)
            }
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormat(name) => write!(f, "Unknown output format: '{}'", name),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(Box::as_ref)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
