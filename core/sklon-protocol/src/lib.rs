#![no_std] // The shared types stay usable from alloc-only targets

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod grammar;
pub mod model;

// Re-export core types for convenience
pub use grammar::*;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_case_serialization() {
        let original = Case::Instrumental;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Case");
        let deserialized: Case = from_bytes(&bytes).expect("Failed to deserialize Case");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_compiled_dictionary_archive() {
        let original = CompiledDictionary::new(
            "da39a3ee5e6b4b0d3255bfef95601890afd80709".to_string(),
            vec!["отдел".to_string(), "быстрый".to_string(), "быстрая".to_string()],
        );

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize dictionary");
        let restored: CompiledDictionary = from_bytes(&bytes).expect("Failed to deserialize dictionary");

        assert_eq!(restored.fingerprint, original.fingerprint);
        // Stored sorted, so the archive is stable across rebuilds
        assert_eq!(restored.words, vec!["быстрая", "быстрый", "отдел"]);
    }

    #[test]
    fn test_case_layout() {
        assert_eq!(core::mem::size_of::<Case>(), 1);
        for (row, case) in Case::ALL.iter().enumerate() {
            assert_eq!(case.index(), row);
        }
    }
}
