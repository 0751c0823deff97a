//! Notebook document model
//!
//! Plain serde data structures for the Jupyter notebook file format
//! (nbformat 4.x), together with the fixed starter documents this crate
//! emits. Field declaration order is the serialized field order, so these
//! structs define the on-disk layout as well as the in-memory one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Major notebook format version emitted by every starter document.
pub const NBFORMAT: u32 = 4;

/// A complete notebook document, the root value written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookDocument {
    /// Ordered cells; starter documents always contain exactly one.
    pub cells: Vec<Cell>,
    /// Notebook-level metadata (kernel and language identification).
    pub metadata: NotebookMetadata,
    /// Major format version.
    pub nbformat: u32,
    /// Minor format version.
    pub nbformat_minor: u32,
}

/// One unit of content within a notebook document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Kind of cell; generated documents only ever contain code cells.
    pub cell_type: CellType,
    /// Execution counter assigned by a kernel. Serialized as `null`, never
    /// omitted, for a document that has never been run.
    pub execution_count: Option<i32>,
    /// Per-cell options. Reserved by the format, always empty here.
    pub metadata: Map<String, Value>,
    /// Captured outputs from execution; always empty here.
    pub outputs: Vec<Value>,
    /// Source text, one entry per line of code.
    pub source: Vec<String>,
}

/// Kind of notebook cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    /// Executable code cell
    #[default]
    Code,
    /// Markdown documentation cell
    Markdown,
    /// Raw text cell (no formatting)
    Raw,
}

/// Notebook-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotebookMetadata {
    /// Which kernel the document expects to execute its cells.
    pub kernelspec: KernelSpec,
    /// Language identification for tooling.
    pub language_info: LanguageInfo,
}

/// Kernel identification metadata
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KernelSpec {
    /// Human-readable kernel name (e.g., "Python 3")
    pub display_name: String,
    /// Language identifier (e.g., "python")
    pub language: String,
    /// Kernel identifier (e.g., "python3")
    pub name: String,
}

/// Language identification metadata
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Source file extension including the dot; omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
    /// MIME type of the source language; omitted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    /// Language identifier (e.g., "python")
    pub name: String,
}

impl Cell {
    /// Create a never-executed code cell from source lines.
    #[must_use]
    pub fn code<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cell_type: CellType::Code,
            execution_count: None,
            metadata: Map::new(),
            outputs: Vec::new(),
            source: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl NotebookDocument {
    /// The fixed Python starter document.
    ///
    /// One code cell containing `print('Hello, world!')`, the Python 3
    /// kernelspec, and format version 4.2.
    #[must_use]
    pub fn python_starter() -> Self {
        Self {
            cells: vec![Cell::code(["print('Hello, world!')"])],
            metadata: NotebookMetadata {
                kernelspec: KernelSpec {
                    display_name: "Python 3".to_string(),
                    language: "python".to_string(),
                    name: "python3".to_string(),
                },
                language_info: LanguageInfo {
                    file_extension: None,
                    mimetype: None,
                    name: "python".to_string(),
                },
            },
            nbformat: NBFORMAT,
            nbformat_minor: 2,
        }
    }

    /// The fixed JavaScript (Node.js) starter document.
    ///
    /// One code cell containing `console.log("Hello, world!");`, the
    /// IJavaScript kernelspec, and format version 4.4.
    #[must_use]
    pub fn javascript_starter() -> Self {
        Self {
            cells: vec![Cell::code(["console.log(\"Hello, world!\");"])],
            metadata: NotebookMetadata {
                kernelspec: KernelSpec {
                    display_name: "JavaScript (Node.js)".to_string(),
                    language: "javascript".to_string(),
                    name: "javascript".to_string(),
                },
                language_info: LanguageInfo {
                    file_extension: Some(".js".to_string()),
                    mimetype: Some("application/javascript".to_string()),
                    name: "javascript".to_string(),
                },
            },
            nbformat: NBFORMAT,
            nbformat_minor: 4,
        }
    }
}
