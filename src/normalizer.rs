use unicode_normalization::UnicodeNormalization;

// ---------------------------------------------------------------------------
// NormalForm
// ---------------------------------------------------------------------------

/// Unicode normalization form applied to names.
///
/// Filesystems disagree on how they store equivalent code point sequences:
/// HFS+ and APFS keep names decomposed, essentially everything else keeps
/// them composed. The form must therefore stay selectable per target
/// environment rather than being hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalForm {
    /// Compatibility decomposition followed by canonical composition (NFKC).
    Nfkc,

    /// Compatibility decomposition only (NFKD).
    Nfkd,
}

impl NormalForm {
    /// The form matching the host filesystem convention.
    ///
    /// macOS filesystems store names decomposed, so hosts there get
    /// [`NormalForm::Nfkd`]; every other platform gets [`NormalForm::Nfkc`].
    pub fn for_host() -> Self {
        if cfg!(target_os = "macos") {
            NormalForm::Nfkd
        } else {
            NormalForm::Nfkc
        }
    }
}

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Pure mapping from a name to its canonicalized, filesystem-safe form.
///
/// Three steps, in order:
///
/// 1. Apply the configured Unicode normalization form.
/// 2. Drop every code point without an assigned Unicode name (unassigned
///    code points, controls). Dropped, not replaced.
/// 3. Substitute reserved filesystem characters (`< > : " \ / | ? * ~`) with
///    visually similar fullwidth or typographic equivalents.
///
/// The mapping is idempotent: normalizing an already-normalized name yields
/// the same name. Note the interplay behind that guarantee: NFKC/NFKD map the
/// fullwidth substitutes back to their ASCII originals, and step 3 then
/// restores them, so a second application lands on the same fixed point.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    form: NormalForm,
}

impl Normalizer {
    pub fn new(form: NormalForm) -> Self {
        Self { form }
    }

    /// The form this normalizer applies.
    pub fn form(&self) -> NormalForm {
        self.form
    }

    /// Produce the canonicalized, filesystem-safe form of `name`.
    ///
    /// An empty name normalizes to an empty name. A name consisting solely of
    /// unnamed code points normalizes to the empty string.
    pub fn normalize(&self, name: &str) -> String {
        let formed: String = match self.form {
            NormalForm::Nfkc => name.nfkc().collect(),
            NormalForm::Nfkd => name.nfkd().collect(),
        };

        formed
            .chars()
            .filter(|&c| has_unicode_name(c))
            .map(substitute_reserved)
            .collect()
    }

    /// Cheap skip-filter: does `name` differ from its normalized form?
    pub fn is_normalization_required(&self, name: &str) -> bool {
        self.normalize(name) != name
    }
}

/// Whether the code point has an assigned Unicode name.
///
/// Controls and unassigned code points (U+FFFE and friends) have none and
/// get stripped from names entirely.
fn has_unicode_name(c: char) -> bool {
    unicode_names2::name(c).is_some()
}

/// Map one reserved filesystem character to its safe substitute.
///
/// Targets never overlap inputs, so substitution order does not matter.
fn substitute_reserved(c: char) -> char {
    match c {
        '<' => '＜',
        '>' => '＞',
        ':' => '：',
        '"' => '”',
        '\\' => '＼',
        '/' => '／',
        '|' => '｜',
        '?' => '？',
        '*' => '＊',
        '~' => '〜',
        _ => c,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const RESERVED: &[char] = &['<', '>', ':', '"', '\\', '/', '|', '?', '*'];

    fn nfkc() -> Normalizer {
        Normalizer::new(NormalForm::Nfkc)
    }

    fn nfkd() -> Normalizer {
        Normalizer::new(NormalForm::Nfkd)
    }

    #[test]
    fn empty_name_is_a_noop() {
        assert_eq!(nfkc().normalize(""), "");
        assert!(!nfkc().is_normalization_required(""));
    }

    #[test]
    fn plain_ascii_is_untouched() {
        assert_eq!(nfkc().normalize("report_2024.txt"), "report_2024.txt");
        assert!(!nfkc().is_normalization_required("report_2024.txt"));
    }

    #[test]
    fn substitutes_every_reserved_character() {
        assert_eq!(
            nfkc().normalize(r#"<>:"\/|?*~"#),
            "＜＞：”＼／｜？＊〜"
        );
    }

    #[test]
    fn substitutes_inside_a_name() {
        assert_eq!(nfkc().normalize("a<b>c"), "a＜b＞c");
    }

    #[test]
    fn composes_decomposed_accents_under_nfkc() {
        // "cafe" + combining acute accent
        let decomposed = "cafe\u{0301}";
        let normalized = nfkc().normalize(decomposed);
        assert_eq!(normalized, "caf\u{00e9}");
        assert_eq!(normalized.chars().count(), 4);
    }

    #[test]
    fn decomposes_precomposed_accents_under_nfkd() {
        let precomposed = "caf\u{00e9}";
        let normalized = nfkd().normalize(precomposed);
        assert_eq!(normalized, "cafe\u{0301}");
        assert!(nfkd().is_normalization_required(precomposed));
    }

    #[test]
    fn strips_unnamed_code_points() {
        assert_eq!(nfkc().normalize("bad\u{fffe}name"), "badname");
        assert_eq!(nfkc().normalize("a\u{0007}b"), "ab");
    }

    #[test]
    fn name_of_only_unnamed_code_points_becomes_empty() {
        assert_eq!(nfkc().normalize("\u{fffe}\u{0007}"), "");
    }

    #[test]
    fn fullwidth_compatibility_characters_survive_as_substitutes() {
        // NFKC folds ＜ back to <, substitution restores it. Already at the
        // fixed point, so no rename is required.
        assert!(!nfkc().is_normalization_required("a＜b"));
    }

    #[test]
    fn idempotent_under_both_forms() {
        let samples = [
            "",
            "plain.txt",
            "a<b>c",
            "cafe\u{0301}",
            "caf\u{00e9}",
            "bad\u{fffe}name",
            r#"q:"w"~e"#,
            "ｆｕｌｌｗｉｄｔｈ",
            "한글 이름.hwp",
        ];
        for norm in [nfkc(), nfkd()] {
            for s in samples {
                let once = norm.normalize(s);
                assert_eq!(norm.normalize(&once), once, "not idempotent: {s:?}");
            }
        }
    }

    #[test]
    fn output_never_contains_reserved_characters() {
        let samples = ["a<b>c", r#"\\server\share"#, "why?.txt", "5:30 * ~draft~"];
        for s in samples {
            let normalized = nfkc().normalize(s);
            assert!(
                normalized.chars().all(|c| !RESERVED.contains(&c)),
                "reserved char left in {normalized:?}"
            );
        }
    }

    #[test]
    fn required_iff_normalized_form_differs() {
        let samples = ["plain", "a<b", "caf\u{00e9}", "x\u{fffe}"];
        for norm in [nfkc(), nfkd()] {
            for s in samples {
                assert_eq!(
                    norm.is_normalization_required(s),
                    norm.normalize(s) != s,
                );
            }
        }
    }

    #[test]
    fn host_form_is_composed_off_macos() {
        let expected = if cfg!(target_os = "macos") {
            NormalForm::Nfkd
        } else {
            NormalForm::Nfkc
        };
        assert_eq!(NormalForm::for_host(), expected);
    }
}
