//! # nbgen-core
//!
//! Notebook document model and JSON emission for nbgen.
//!
//! This crate builds minimal, valid single-cell Jupyter notebook documents
//! (nbformat 4.x) and writes them to disk:
//! - Fixed starter documents for the Python 3 and JavaScript (Node.js) kernels
//! - Byte-stable pretty JSON serialization (2-space indentation)
//! - Single-write file emission with overwrite semantics
//!
//! ## Example
//!
//! ```no_run
//! use nbgen_core::{NotebookDocument, NotebookWriter};
//!
//! let document = NotebookDocument::python_starter();
//! NotebookWriter::new().write(&document, "python-demo.ipynb")?;
//! # Ok::<(), nbgen_core::NotebookError>(())
//! ```

/// Notebook document model
pub mod document;
/// Error types for notebook emission
pub mod error;
/// JSON serialization
pub mod serializer;
/// Notebook file emission
pub mod writer;

pub use document::{
    Cell, CellType, KernelSpec, LanguageInfo, NotebookDocument, NotebookMetadata, NBFORMAT,
};
pub use error::{NotebookError, Result};
pub use serializer::{JsonOptions, JsonSerializer};
pub use writer::NotebookWriter;
