use std::path::PathBuf;

/// A single directory entry observed during a scan pass.
///
/// Ephemeral by design: entries are rebuilt from the directory listing on
/// every pass and never survive a restart. Nothing in the crate caches them,
/// so a renamed tree is always re-observed from scratch.
///
/// The full path is not stored. It is computed on demand from `parent` and
/// `name`, which keeps an `Entry` valid only for as long as its listing is.
pub struct Entry {
    /// Directory the entry was listed in.
    pub parent: PathBuf,

    /// The entry's name, lossily decoded to Unicode.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,
}

impl Entry {
    /// Full path to the entry: `parent` joined with `name`.
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }

    /// Whether renaming this entry changes the shape of the tree.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The kind of a scanned entry.
///
/// Only [`EntryKind::Dir`] affects traversal: renaming a directory
/// invalidates the rest of the pass. Symlinks are renamed like files and are
/// never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    pub(crate) fn of(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}
