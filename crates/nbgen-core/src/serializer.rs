//! JSON serialization for notebook documents
//!
//! Thin wrapper over `serde_json` with formatting options. The emitted-file
//! contract is pretty output with 2-space indentation.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer as JsonSer};

use crate::document::NotebookDocument;

/// Options for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonOptions {
    /// Pretty-print with indentation (default: true)
    pub pretty: bool,
    /// Indentation string when pretty=true (default: 2 spaces)
    pub indent: String,
}

impl Default for JsonOptions {
    #[inline]
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

/// JSON serializer for notebook documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonSerializer {
    options: JsonOptions,
}

impl JsonSerializer {
    /// Create a new JSON serializer with default options (pretty-printed)
    #[inline]
    #[must_use = "creates serializer with default options"]
    pub fn new() -> Self {
        Self {
            options: JsonOptions::default(),
        }
    }

    /// Create a new JSON serializer with custom options
    #[inline]
    #[must_use = "creates serializer with custom options"]
    pub const fn with_options(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Serialize a notebook document to JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[must_use = "this function returns serialized JSON that should be used"]
    pub fn serialize(&self, document: &NotebookDocument) -> Result<String, serde_json::Error> {
        if self.options.pretty {
            let formatter = PrettyFormatter::with_indent(self.options.indent.as_bytes());
            let mut buf = Vec::new();
            let mut ser = JsonSer::with_formatter(&mut buf, formatter);
            document.serialize(&mut ser)?;
            String::from_utf8(buf).map_err(serde_json::Error::custom)
        } else {
            serde_json::to_string(document)
        }
    }

    /// Serialize a notebook document to compact JSON (no pretty-printing)
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[must_use = "this function returns serialized JSON that should be used"]
    pub fn serialize_compact(document: &NotebookDocument) -> Result<String, serde_json::Error> {
        serde_json::to_string(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exact byte contract of the Python starter file.
    const PYTHON_STARTER_JSON: &str = r#"{
  "cells": [
    {
      "cell_type": "code",
      "execution_count": null,
      "metadata": {},
      "outputs": [],
      "source": [
        "print('Hello, world!')"
      ]
    }
  ],
  "metadata": {
    "kernelspec": {
      "display_name": "Python 3",
      "language": "python",
      "name": "python3"
    },
    "language_info": {
      "name": "python"
    }
  },
  "nbformat": 4,
  "nbformat_minor": 2
}"#;

    #[test]
    fn test_pretty_output_matches_byte_contract() {
        let doc = NotebookDocument::python_starter();
        let json = JsonSerializer::new().serialize(&doc).unwrap();
        assert_eq!(json, PYTHON_STARTER_JSON);
    }

    #[test]
    fn test_pretty_output_round_trips() {
        let doc = NotebookDocument::javascript_starter();
        let json = JsonSerializer::new().serialize(&doc).unwrap();
        let parsed: NotebookDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_custom_indent() {
        let doc = NotebookDocument::python_starter();
        let serializer = JsonSerializer::with_options(JsonOptions {
            pretty: true,
            indent: "    ".to_string(),
        });
        let json = serializer.serialize(&doc).unwrap();

        assert!(json.contains("\n    \"cells\""));
        assert!(!json.contains("\n  \"cells\""));
    }

    #[test]
    fn test_compact_output() {
        let doc = NotebookDocument::python_starter();
        let json = JsonSerializer::serialize_compact(&doc).unwrap();

        assert!(!json.contains('\n'));
        let parsed: NotebookDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_non_pretty_options_produce_compact_output() {
        let doc = NotebookDocument::python_starter();
        let serializer = JsonSerializer::with_options(JsonOptions {
            pretty: false,
            indent: "  ".to_string(),
        });
        let json = serializer.serialize(&doc).unwrap();
        assert_eq!(json, JsonSerializer::serialize_compact(&doc).unwrap());
    }

    #[test]
    fn test_json_serializer_default() {
        assert_eq!(JsonSerializer::default(), JsonSerializer::new());
    }
}
