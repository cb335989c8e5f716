//! Dictionary of base forms, compiled once per source revision.
//!
//! The raw source is a plain word list, one entry per line. Expanding it
//! (masculine adjectives also cover their feminine and neuter forms) is
//! done once; the result is archived with rkyv next to the SHA-1 of the
//! source, and later runs reuse the archive until the source changes.
//!
//! The cache is plain owned state. Callers sharing one between threads wrap
//! it in a `Mutex`: whoever finds the archive stale rebuilds it, and two
//! racing rebuilds write identical bytes.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, info, warn};
use rkyv::AlignedVec;
use sha1::{Digest, Sha1};
use sklon_protocol::CompiledDictionary;

use crate::error::DictionaryError;

/// File name of the compiled dictionary inside the temp directory.
pub const DEFAULT_CACHE_FILE: &str = "sklon-words.rkyv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Raw word list.
    pub source: PathBuf,
    /// Compiled archive.
    pub cache: PathBuf,
}

impl DictionaryConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            cache: std::env::temp_dir().join(DEFAULT_CACHE_FILE),
        }
    }

    pub fn with_cache(mut self, cache: impl Into<PathBuf>) -> Self {
        self.cache = cache.into();
        self
    }
}

/// How [`DictionaryCache::load`] obtained its words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Words were already in memory; nothing was read.
    AlreadyLoaded,
    /// The archive matched the source fingerprint.
    Reused,
    /// The source was expanded and the archive rewritten.
    Rebuilt,
}

/// Canonical spelling used for storage and lookup: trimmed, lower-case,
/// ё folded into е.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase().replace('ё', "е")
}

/// Base forms covered by one line of the raw source.
///
/// A masculine adjective (`-ый`, `-ий`) also yields its feminine (`-ая`,
/// `-яя`) and neuter (`-ое`) nominatives.
pub fn expand(line: &str) -> BTreeSet<String> {
    let mut forms = BTreeSet::new();
    let base = normalize(line);
    if base.is_empty() {
        return forms;
    }

    if let Some(stem) = base.strip_suffix("ый").or_else(|| base.strip_suffix("ий")) {
        for ending in ["ая", "яя", "ое"] {
            forms.insert(format!("{stem}{ending}"));
        }
    }

    forms.insert(base);
    forms
}

/// Hex SHA-1 of the raw source. Change detection only.
pub fn fingerprint(raw: &[u8]) -> String {
    format!("{:x}", Sha1::digest(raw))
}

/// Expands every line of `raw` into a compiled dictionary.
pub fn compile(raw: &[u8]) -> CompiledDictionary {
    let words: BTreeSet<String> = String::from_utf8_lossy(raw)
        .lines()
        .flat_map(expand)
        .collect();

    CompiledDictionary::new(fingerprint(raw), words.into_iter().collect())
}

#[derive(Debug)]
pub struct DictionaryCache {
    config: DictionaryConfig,
    words: HashSet<String>,
    fingerprint: Option<String>,
}

impl DictionaryCache {
    pub fn new(config: DictionaryConfig) -> Self {
        Self {
            config,
            words: HashSet::new(),
            fingerprint: None,
        }
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Fills the cache, reusing the compiled archive when the source is
    /// unchanged. A no-op once words are in memory.
    pub fn load(&mut self) -> Result<LoadOutcome, DictionaryError> {
        if !self.words.is_empty() {
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        let raw = fs::read(&self.config.source).map_err(|source| {
            DictionaryError::SourceUnavailable {
                path: self.config.source.clone(),
                source,
            }
        })?;
        let current = fingerprint(&raw);

        if let Some(compiled) = self.read_archive() {
            if compiled.fingerprint == current {
                debug!(
                    "dictionary {} unchanged ({}), reusing {}",
                    self.config.source.display(),
                    current,
                    self.config.cache.display()
                );
                self.install(compiled);
                return Ok(LoadOutcome::Reused);
            }
            debug!(
                "dictionary fingerprint changed: {} -> {}",
                compiled.fingerprint, current
            );
        }

        let compiled = compile(&raw);
        self.write_archive(&compiled)?;
        info!(
            "compiled {} base forms from {} into {}",
            compiled.words.len(),
            self.config.source.display(),
            self.config.cache.display()
        );
        self.install(compiled);
        Ok(LoadOutcome::Rebuilt)
    }

    /// Whether `word` is listed in its base form.
    ///
    /// An empty cache (never loaded, or an empty source) answers `true` for
    /// everything, so a missing dictionary never suppresses declension.
    pub fn is_base_form(&self, word: &str) -> bool {
        self.words.is_empty() || self.words.contains(&normalize(word))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Fingerprint of the source the words came from.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    fn install(&mut self, compiled: CompiledDictionary) {
        self.fingerprint = Some(compiled.fingerprint);
        self.words = compiled.words.into_iter().collect();
    }

    fn read_archive(&self) -> Option<CompiledDictionary> {
        let path = &self.config.cache;
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("no compiled dictionary at {}: {}", path.display(), e);
                return None;
            }
        };

        // Archives must be read from suitably aligned memory
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(&bytes);

        match rkyv::from_bytes::<CompiledDictionary>(&aligned) {
            Ok(compiled) => Some(compiled),
            Err(_) => {
                warn!("ignoring corrupt compiled dictionary {}", path.display());
                None
            }
        }
    }

    fn write_archive(&self, compiled: &CompiledDictionary) -> Result<(), DictionaryError> {
        let path = &self.config.cache;
        let unwritable = |source: io::Error| DictionaryError::CacheUnwritable {
            path: path.clone(),
            source,
        };

        let bytes = rkyv::to_bytes::<_, 4096>(compiled)
            .map_err(|e| unwritable(io::Error::new(io::ErrorKind::Other, format!("{e:?}"))))?;
        fs::write(path, &bytes).map_err(unwritable)
    }
}
