use std::path::PathBuf;

use crate::engine::{run, EngineOptions};
use crate::error::FsNormError;
use crate::normalizer::{NormalForm, Normalizer};
use crate::report::{ConsoleReporter, Reporter};
use crate::results::Results;

// ---------------------------------------------------------------------------
// RunBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a normalization run.
///
/// Created via [`fsnorm::run()`](crate::run). Configure with chained builder
/// methods, then call [`run()`](RunBuilder::run) to execute.
///
/// Dry run is the default: nothing is renamed until
/// [`apply(true)`](RunBuilder::apply) is set.
///
/// # Example
///
/// ```rust,ignore
/// let results = fsnorm::run()
///     .root("/srv/media")
///     .root("/srv/inbox")
///     .form(NormalForm::Nfkc)
///     .apply(true)
///     .run()?;
/// ```
#[derive(Default)]
pub struct RunBuilder {
    roots: Vec<PathBuf>,
    apply: bool,
    form: Option<NormalForm>,
    reporter: Option<Box<dyn Reporter>>,
}

impl RunBuilder {
    // ── Roots ─────────────────────────────────────────────────────────────

    /// Add one root directory to scan.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Add several root directories at once.
    pub fn roots<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(paths.into_iter().map(Into::into));
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Perform renames on disk. Off by default: a run only reports what it
    /// would do until this is enabled.
    pub fn apply(mut self, yes: bool) -> Self {
        self.apply = yes;
        self
    }

    /// Override the Unicode normalization form.
    ///
    /// Defaults to [`NormalForm::for_host()`], which matches the host
    /// filesystem's storage convention.
    pub fn form(mut self, form: NormalForm) -> Self {
        self.form = Some(form);
        self
    }

    /// Set a custom reporter.
    ///
    /// Defaults to [`ConsoleReporter`]. Pass
    /// [`SilentReporter`](crate::SilentReporter) for quiet runs, or any
    /// [`Reporter`] implementation to capture reports programmatically.
    pub fn reporter(mut self, r: impl Reporter + 'static) -> Self {
        self.reporter = Some(Box::new(r));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the run and return results.
    ///
    /// Blocks until every root has completed a pass with no directory
    /// renames (dry runs finish in a single pass per root).
    ///
    /// # Errors
    ///
    /// Returns `Err` when no root was supplied, a root is missing or not a
    /// directory, or any filesystem operation fails mid-walk. A failure in
    /// one root aborts the whole run; later roots are not processed.
    pub fn run(self) -> Result<Results, FsNormError> {
        if self.roots.is_empty() {
            return Err(FsNormError::NoRoots);
        }

        let form = self.form.unwrap_or_else(NormalForm::for_host);
        let reporter = self.reporter.unwrap_or_else(|| Box::new(ConsoleReporter));

        let opts = EngineOptions {
            normalizer: Normalizer::new(form),
            apply: self.apply,
            reporter,
        };

        run(&self.roots, opts)
    }
}
