use rkyv::{Archive, Deserialize, Serialize};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// The persisted dictionary cache: the fingerprint of the raw word list
/// paired with its expanded set of base forms.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct CompiledDictionary {
    pub fingerprint: String,
    /// Sorted, deduplicated.
    pub words: Vec<String>,
}

impl CompiledDictionary {
    pub fn new(fingerprint: String, mut words: Vec<String>) -> Self {
        words.sort_unstable();
        words.dedup();
        Self { fingerprint, words }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
