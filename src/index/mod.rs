//! Translation index: the key -> translation mapping built from on-disk
//! language files.
//!
//! The index is an owned value with an explicit lifecycle: construct empty,
//! populate with [`TranslationIndex::load`], query with
//! [`TranslationIndex::lookup`], and drop everything with
//! [`TranslationIndex::clear`] before a full reload. There is no incremental
//! update path; any change to the underlying files means clear + load.

pub mod ini;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use walkdir::WalkDir;

/// Key prefixes that are indexed; everything else in a lang file is ignored.
pub const KEY_PREFIXES: &[&str] = &["LNG_", "LKP_"];

/// Directory under the workspace root that holds per-module trees.
pub const MODULES_DIR: &str = "modules";

/// Per-module path to the language files, relative to the module directory.
pub const LANG_SUBDIR: &str = "view/lang";

/// A locale supported by the lang file layout. The set is closed: every
/// module ships at most `lang.en.conf` and `lang.ar.conf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// File name of this locale's lang file inside a module's lang directory.
    pub fn file_name(&self) -> String {
        format!("lang.{}.conf", self.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One localization key's resolved state.
///
/// A locale that never contributed a value holds the empty string, never an
/// absent slot, so lookups stay branch-free for consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: String,
    pub en: String,
    pub ar: String,
    /// Name of the owning module directory.
    pub module: Option<String>,
    /// INI section the key was declared under.
    pub section: Option<String>,
    /// Last file path that contributed a value for this key.
    pub file_path: Option<String>,
}

impl TranslationEntry {
    pub fn value(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }

    fn set_value(&mut self, locale: Locale, value: String) {
        match locale {
            Locale::En => self.en = value,
            Locale::Ar => self.ar = value,
        }
    }

    /// True when no locale has a value for this key.
    pub fn is_untranslated(&self) -> bool {
        self.en.is_empty() && self.ar.is_empty()
    }
}

/// Diagnostics from one [`TranslationIndex::load`] pass.
///
/// Loading never hard-fails: structural absences are skipped and per-file
/// read/parse failures end up in `warnings` while the rest of the tree is
/// still processed. The worst outcome is an empty index.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Module directories that had a lang directory and were processed.
    pub modules: usize,
    /// Lang files successfully parsed.
    pub files: usize,
    /// Keys contributed by this pass (counting each key once per file).
    pub keys: usize,
    /// Per-file diagnostics: missing modules dir, unreadable files.
    pub warnings: Vec<String>,
}

/// The in-memory key -> [`TranslationEntry`] mapping.
///
/// Keys are unique across the whole index regardless of which module or
/// locale file defined them. Two independent merge rules apply when the same
/// key shows up in more than one file within or across load passes:
///
/// - locale values merge additively: a file contributing `ar` never clears a
///   previously loaded `en` value;
/// - module/section/file metadata is last-write-wins per contributing file.
#[derive(Debug, Default)]
pub struct TranslationIndex {
    entries: HashMap<String, TranslationEntry>,
    loaded: bool,
}

impl TranslationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the index from `root/modules/*/view/lang/lang.{en,ar}.conf`.
    ///
    /// One synchronous pass over the tree. A missing `modules` directory, a
    /// module without a lang directory, or a missing single locale file are
    /// expected layouts and are skipped; an unreadable lang file is isolated
    /// to a warning and the remaining files still load. The loaded flag is
    /// set at the end of a completed walk even when zero keys were found;
    /// a missing `modules` directory returns early and leaves it unset.
    ///
    /// Does not clear first: repeated loads layer onto current state, so
    /// stale entries persist until the caller issues [`Self::clear`].
    pub fn load(&mut self, root: &Path) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();

        let modules_path = root.join(MODULES_DIR);
        if !modules_path.is_dir() {
            outcome.warnings.push(format!(
                "modules directory not found at {} (expected <root>/modules/*/view/lang/lang.*.conf)",
                modules_path.display()
            ));
            return outcome;
        }

        // Immediate subdirectories only; sorted for deterministic
        // last-write-wins metadata across modules.
        let walker = WalkDir::new(&modules_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in walker.into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_dir() {
                continue;
            }
            let module = entry.file_name().to_string_lossy().into_owned();
            let lang_path = entry.path().join(LANG_SUBDIR);
            if !lang_path.is_dir() {
                continue;
            }

            outcome.modules += 1;
            for locale in Locale::ALL {
                self.load_lang_file(&lang_path, locale, &module, &mut outcome);
            }
        }

        self.loaded = true;
        outcome
    }

    /// Parse one locale file and merge its keys in. A missing file is not an
    /// error; a failed read contributes a warning and zero entries.
    fn load_lang_file(
        &mut self,
        lang_path: &Path,
        locale: Locale,
        module: &str,
        outcome: &mut LoadOutcome,
    ) {
        let file_path = lang_path.join(locale.file_name());
        if !file_path.is_file() {
            return;
        }

        let document = match ini::parse_ini_file(&file_path) {
            Ok(document) => document,
            Err(err) => {
                outcome
                    .warnings
                    .push(format!("skipped {}: {:#}", file_path.display(), err));
                return;
            }
        };

        outcome.files += 1;
        let file_path = file_path.to_string_lossy().into_owned();
        for section in document.sections {
            for (key, value) in section.pairs {
                if !KEY_PREFIXES.iter().any(|prefix| key.starts_with(prefix)) {
                    continue;
                }
                outcome.keys += 1;
                self.upsert(key, value, locale, module, &section.name, &file_path);
            }
        }
    }

    fn upsert(
        &mut self,
        key: String,
        value: String,
        locale: Locale,
        module: &str,
        section: &str,
        file_path: &str,
    ) {
        let entry = self
            .entries
            .entry(key.clone())
            .or_insert_with(|| TranslationEntry {
                key,
                ..TranslationEntry::default()
            });
        entry.set_value(locale, value);
        entry.module = Some(module.to_string());
        entry.section = Some(section.to_string());
        entry.file_path = Some(file_path.to_string());
    }

    /// Look up one key. Pure read, O(1) expected.
    pub fn lookup(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    /// Drop all entries and reset the loaded flag. Safe to call at any time,
    /// including before any load.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.loaded = false;
    }

    /// Number of distinct keys currently indexed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True after any completed load pass, even one that found no keys.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Snapshot of current keys; order is not significant.
    pub fn all_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    #[cfg(test)]
    pub(crate) fn insert_for_tests(&mut self, entry: TranslationEntry) {
        self.entries.insert(entry.key.clone(), entry);
        self.loaded = true;
    }
}
