use std::time::Duration;

/// The outcome of a completed run.
///
/// Counts accumulate across all roots and across restarted passes: a tree
/// that is scanned twice because a directory rename forced a restart
/// contributes its entries to [`ScanStats`] twice.
#[derive(Debug)]
pub struct Results {
    /// Entries whose names required normalization and had a free target.
    /// In apply mode these were renamed on disk; in a dry run they were
    /// only reported.
    pub changes: usize,

    /// Entries skipped because the normalized target path already existed.
    pub collisions: usize,

    /// Full tree walks performed. At least one per root; directory renames
    /// add one restart each.
    pub passes: usize,

    /// Scan statistics.
    pub stats: ScanStats,
}

/// Performance statistics for a completed run.
#[derive(Debug)]
pub struct ScanStats {
    /// Total number of file entries listed (normalized or not).
    pub files: usize,

    /// Total number of directory entries listed.
    pub dirs: usize,

    /// Wall-clock time from run start to completion.
    pub duration: Duration,

    /// Total entries listed per second. Convenience field, clamped to 0 on
    /// zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    /// Compute `entries_per_sec` from raw counts and duration.
    pub(crate) fn compute(files: usize, dirs: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            duration,
            entries_per_sec: eps,
        }
    }
}
