//! # nbgen-demos
//!
//! Standalone demonstration routines shipped alongside nbgen. Nothing here
//! is used by the notebook generator; each module is a closed, self-contained
//! computation with fixed literal input:
//! - [`fibonacci`] - iterative Fibonacci numbers
//! - [`filters`] - even-number filtering over a fixed list
//! - [`delayed`] - a cancellable deferred-message timer
//!
//! The `language-demo` binary drives all three.

/// Cancellable deferred-message timer
pub mod delayed;
/// Iterative Fibonacci numbers
pub mod fibonacci;
/// List filtering
pub mod filters;
