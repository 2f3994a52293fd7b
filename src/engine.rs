use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::entry::{Entry, EntryKind};
use crate::error::FsNormError;
use crate::normalizer::Normalizer;
use crate::report::Reporter;
use crate::results::{Results, ScanStats};

// ---------------------------------------------------------------------------
// Engine options
// ---------------------------------------------------------------------------

/// Internal options passed from the builder to `run()`.
pub(crate) struct EngineOptions {
    pub normalizer: Normalizer,
    pub apply: bool,
    pub reporter: Box<dyn Reporter>,
}

// ---------------------------------------------------------------------------
// Pass bookkeeping
// ---------------------------------------------------------------------------

/// Counters accumulated across every pass of every root.
#[derive(Default)]
struct Tally {
    changes: usize,
    collisions: usize,
    passes: usize,
    files: usize,
    dirs: usize,
}

/// How a single full tree walk ended.
enum PassOutcome {
    /// No directory was renamed; the pass is authoritative.
    Clean,

    /// A directory rename invalidated the remaining traversal state.
    /// The caller restarts the walk for this root from scratch.
    StructureChanged,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Walk every root and normalize entry names, renaming on disk when `apply`
/// is set.
///
/// This is the whole engine: strictly sequential, one pass at a time per
/// root, restarting a root whenever a pass renamed a directory. Dry runs
/// never change the tree, so they never restart. Called by
/// [`RunBuilder::run()`](crate::RunBuilder::run) after validating inputs.
pub(crate) fn run(roots: &[PathBuf], opts: EngineOptions) -> Result<Results, FsNormError> {
    let start = Instant::now();
    let mut tally = Tally::default();

    for root in roots {
        let meta = fs::metadata(root).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FsNormError::NotFound(root.clone())
            } else {
                FsNormError::Io {
                    path: root.clone(),
                    source: e,
                }
            }
        })?;
        if !meta.is_dir() {
            return Err(FsNormError::NotADirectory(root.clone()));
        }

        loop {
            tally.passes += 1;
            match scan_dir(root, &opts, &mut tally)? {
                PassOutcome::Clean => break,
                PassOutcome::StructureChanged => continue,
            }
        }
    }

    Ok(Results {
        changes: tally.changes,
        collisions: tally.collisions,
        passes: tally.passes,
        stats: ScanStats::compute(tally.files, tally.dirs, start.elapsed()),
    })
}

// ---------------------------------------------------------------------------
// scan_dir()
// ---------------------------------------------------------------------------

/// Process one directory and recurse into its subdirectories.
///
/// The listing is read once and snapshotted before anything is renamed, then
/// names are handled files first, directories second. A performed directory
/// rename aborts the pass after the current listing finishes: every path
/// computed for the renamed directory's descendants is stale, and recursing
/// with them would rename the wrong entries.
fn scan_dir(
    dir: &Path,
    opts: &EngineOptions,
    tally: &mut Tally,
) -> Result<PassOutcome, FsNormError> {
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    let listing = fs::read_dir(dir).map_err(|e| FsNormError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;
    for entry in listing {
        let entry = entry.map_err(|e| FsNormError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let ft = entry.file_type().map_err(|e| FsNormError::Io {
            path: entry.path(),
            source: e,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        match EntryKind::of(ft) {
            EntryKind::Dir => dirs.push(name),
            kind => files.push((name, kind)),
        }
    }

    tally.files += files.len();
    tally.dirs += dirs.len();

    let mut structure_changed = false;

    let candidates = files
        .iter()
        .map(|(name, kind)| (name.as_str(), *kind))
        .chain(dirs.iter().map(|name| (name.as_str(), EntryKind::Dir)));

    for (name, kind) in candidates {
        if !opts.normalizer.is_normalization_required(name) {
            continue;
        }

        let new_name = opts.normalizer.normalize(name);
        let entry = Entry {
            parent: dir.to_path_buf(),
            name: name.to_owned(),
            kind,
        };
        let target = dir.join(&new_name);

        // Reported unconditionally, collision or not, dry run or not.
        opts.reporter.renaming(&entry, &new_name);

        // Skip-on-collision: never overwrite an existing entry. Also covers
        // names that normalize to the empty string, since joining "" yields
        // the parent directory itself.
        if target.exists() {
            opts.reporter.collision(&entry, &target);
            tally.collisions += 1;
            continue;
        }

        if opts.apply {
            let from = entry.path();
            fs::rename(&from, &target).map_err(|e| FsNormError::Rename {
                from,
                to: target.clone(),
                source: e,
            })?;
            if entry.is_dir() {
                structure_changed = true;
            }
        }
        tally.changes += 1;
    }

    if structure_changed {
        return Ok(PassOutcome::StructureChanged);
    }

    // Descend using the snapshotted names. Safe: reaching this point means
    // no directory in this listing was renamed.
    for name in &dirs {
        if let PassOutcome::StructureChanged = scan_dir(&dir.join(name), opts, tally)? {
            return Ok(PassOutcome::StructureChanged);
        }
    }

    Ok(PassOutcome::Clean)
}
