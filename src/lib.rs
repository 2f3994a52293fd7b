//! # fsnorm
//!
//! Walks directory trees and renames entries whose names carry non-canonical
//! or filesystem-hostile Unicode.
//!
//! fsnorm owns the normalization rules (Unicode form, unnamed-code-point
//! stripping, reserved-character substitution), the sequential walk engine
//! with its restart-on-structure-change loop, the error type, and the builder
//! API. Output is pluggable through the [`Reporter`] trait; the shipped CLI is
//! a thin wrapper over the same builder.
//!
//! # Quick Start
//!
//! ```rust
//! use fsnorm::NormalForm;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("draft?.txt"), b"").unwrap();
//!
//! let results = fsnorm::run()
//!     .root(dir.path())
//!     .form(NormalForm::Nfkc)
//!     .apply(true)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(results.changes, 1);
//! assert!(dir.path().join("draft？.txt").exists());
//! ```
//!
//! Without `.apply(true)` the same run is a dry run: every candidate is
//! reported, nothing on disk changes.
//!
//! # The Normalizer on its own
//!
//! The name mapping is a pure function and is usable without touching the
//! filesystem:
//!
//! ```rust
//! use fsnorm::{NormalForm, Normalizer};
//!
//! let n = Normalizer::new(NormalForm::Nfkc);
//! assert_eq!(n.normalize("a<b>c"), "a＜b＞c");
//! assert!(!n.is_normalization_required("a＜b＞c"));
//! ```
//!
//! # Custom Reporters
//!
//! Implement [`Reporter`] to route reports somewhere other than stdout:
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::path::Path;
//! use fsnorm::{Entry, Reporter};
//!
//! struct Collecting(RefCell<Vec<String>>);
//!
//! impl Reporter for Collecting {
//!     fn renaming(&self, entry: &Entry, new_name: &str) {
//!         self.0.borrow_mut().push(format!("{} -> {}", entry.name, new_name));
//!     }
//!
//!     fn collision(&self, _entry: &Entry, _target: &Path) {}
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod engine;
mod entry;
mod error;
mod normalizer;
mod report;
mod results;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::RunBuilder;
pub use entry::{Entry, EntryKind};
pub use error::FsNormError;
pub use normalizer::{NormalForm, Normalizer};
pub use report::{escape_bytes, ConsoleReporter, Reporter, SilentReporter};
pub use results::{Results, ScanStats};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`RunBuilder`] to configure and execute a normalization run.
///
/// # Example
///
/// ```rust
/// // At least one root is required; run() validates before touching disk.
/// let err = fsnorm::run().run().unwrap_err();
/// assert!(matches!(err, fsnorm::FsNormError::NoRoots));
/// ```
pub fn run() -> RunBuilder {
    RunBuilder::default()
}
