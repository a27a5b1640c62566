use std::{fmt, str::FromStr};

use crate::error::{ConvertError, ConvertErrorKind, FormatError};

/// Output serializations the converter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Turtle,
    NTriples,
}

impl OutputFormat {
    /// File extension used for derived output file names.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Turtle => write!(f, "turtle"),
            Self::NTriples => write!(f, "ntriples"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "turtle" | "ttl" => Ok(Self::Turtle),
            "ntriples" | "nt" | "n-triples" => Ok(Self::NTriples),
            other => Err(ConvertError::new(ConvertErrorKind::Format(
                FormatError::UnknownFormat(other.to_string()),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("turtle".parse::<OutputFormat>().ok(), Some(OutputFormat::Turtle));
        assert_eq!("TTL".parse::<OutputFormat>().ok(), Some(OutputFormat::Turtle));
        assert_eq!("nt".parse::<OutputFormat>().ok(), Some(OutputFormat::NTriples));
    }

    #[test]
    fn rejects_unknown_format() {
        assert!("rdfxml".parse::<OutputFormat>().is_err());
    }
}
