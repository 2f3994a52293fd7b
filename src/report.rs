use std::path::Path;

use crate::entry::Entry;

/// Receives rename reports from the engine.
///
/// Implement this to control where reports go: the console, a log file, a
/// test buffer, or nowhere. The engine is single-threaded and calls these
/// methods sequentially, so no `Send`/`Sync` bounds are required.
///
/// # Call Order
///
/// [`renaming`](Reporter::renaming) fires for every entry whose name requires
/// normalization, before the collision check and regardless of dry-run mode.
/// [`collision`](Reporter::collision) follows it when the target path already
/// exists and the entry is being skipped.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use fsnorm::{Entry, Reporter};
///
/// struct CountingReporter(std::cell::Cell<usize>);
///
/// impl Reporter for CountingReporter {
///     fn renaming(&self, _entry: &Entry, _new_name: &str) {
///         self.0.set(self.0.get() + 1);
///     }
///
///     fn collision(&self, _entry: &Entry, _target: &Path) {}
/// }
/// ```
pub trait Reporter {
    /// An entry's name requires normalization. `new_name` is the proposed
    /// replacement within the same parent directory.
    fn renaming(&self, entry: &Entry, new_name: &str);

    /// The normalized target already exists; the entry is left untouched.
    fn collision(&self, entry: &Entry, target: &Path);
}

/// Line-oriented audit output on stdout. The default reporter.
///
/// For each candidate it prints the original path, the proposed path, and
/// the raw byte form of both names, so invisible and control code points are
/// visible when reviewing a run:
///
/// ```text
/// photos/cafe?.jpg
/// -> photos/cafe？.jpg
/// -> b"cafe?.jpg"
/// -> b"cafe\xef\xbc\x9f.jpg"
/// ```
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn renaming(&self, entry: &Entry, new_name: &str) {
        println!("{}", entry.path().display());
        println!("-> {}", entry.parent.join(new_name).display());
        println!("-> b\"{}\"", escape_bytes(&entry.name));
        println!("-> b\"{}\"", escape_bytes(new_name));
    }

    fn collision(&self, _entry: &Entry, _target: &Path) {
        println!("-> Target exists, skipping...");
    }
}

/// Discards every report. Used for quiet runs.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn renaming(&self, _entry: &Entry, _new_name: &str) {}

    fn collision(&self, _entry: &Entry, _target: &Path) {}
}

/// Render a name's UTF-8 bytes with non-printing bytes escaped.
///
/// `"café"` becomes `caf\xc3\xa9`. Custom [`Reporter`]s can reuse this to
/// keep their output auditable.
pub fn escape_bytes(name: &str) -> String {
    name.bytes()
        .flat_map(std::ascii::escape_default)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_non_ascii_bytes() {
        assert_eq!(escape_bytes("caf\u{00e9}"), r"caf\xc3\xa9");
    }

    #[test]
    fn escapes_control_bytes() {
        assert_eq!(escape_bytes("a\u{0007}b"), r"a\x07b");
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(escape_bytes("plain-name.txt"), "plain-name.txt");
    }
}
