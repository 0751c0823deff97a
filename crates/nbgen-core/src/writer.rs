//! Notebook file emission

use std::fs;
use std::path::Path;

use crate::document::NotebookDocument;
use crate::error::Result;
use crate::serializer::JsonSerializer;

/// Writes notebook documents to disk.
///
/// Serializes with the emitted-file contract (pretty JSON, 2-space
/// indentation) and truncates any prior content at the target path. One
/// write per call; repeated writes of the same document are byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NotebookWriter {
    serializer: JsonSerializer,
}

impl NotebookWriter {
    /// Create a writer with the default serializer (pretty, 2-space indent)
    #[inline]
    #[must_use = "creates writer with default serializer"]
    pub fn new() -> Self {
        Self {
            serializer: JsonSerializer::new(),
        }
    }

    /// Create a writer with a custom serializer
    #[inline]
    #[must_use = "creates writer with custom serializer"]
    pub const fn with_serializer(serializer: JsonSerializer) -> Self {
        Self { serializer }
    }

    /// Serialize `document` and write it to `path`, overwriting prior content.
    ///
    /// The caller is responsible for the parent directory existing.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not writable (permission denied,
    /// missing parent directory, disk full) or if serialization fails.
    /// Nothing is caught or retried.
    pub fn write<P: AsRef<Path>>(&self, document: &NotebookDocument, path: P) -> Result<()> {
        let json = self.serializer.serialize(document)?;
        fs::write(path, json)?;
        Ok(())
    }
}
