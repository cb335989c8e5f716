use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of [`DictionaryCache::load`](crate::dictionary::DictionaryCache::load).
///
/// Neither is retried: the caller either fixes the environment or declines
/// without the dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot find or open dictionary source {}", path.display())]
    SourceUnavailable { path: PathBuf, source: io::Error },

    #[error("cannot write compiled dictionary {}", path.display())]
    CacheUnwritable { path: PathBuf, source: io::Error },
}
