//! Declension of whole phrases ("главный инженер отдела кадров").

use log::trace;
use sklon_morph::decline_word;
use sklon_protocol::Case;

use crate::dictionary::DictionaryCache;
use crate::error::DictionaryError;
use crate::token::TokenKind;
use crate::Lexer;

/// Declines every base-form word of `phrase` into `case`, leaving
/// separators and unknown words exactly as written.
///
/// With a dictionary, only words it lists in their base form are declined;
/// the dictionary is loaded first if needed. Without one, every word is.
pub fn decline_collocation(
    phrase: &str,
    case: Case,
    dictionary: Option<&mut DictionaryCache>,
) -> Result<String, DictionaryError> {
    let dict = match dictionary {
        Some(dict) => {
            dict.load()?;
            Some(&*dict)
        }
        None => None,
    };

    let mut out = String::with_capacity(phrase.len() + 16);
    for token in Lexer::new(dict).tokenize(phrase) {
        match token.kind {
            TokenKind::BaseForm => out.push_str(&decline_word(token.text, case)),
            TokenKind::Unknown => {
                trace!("keeping '{}': not a base form", token.text);
                out.push_str(token.text);
            }
            TokenKind::Separator => out.push_str(token.text),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryConfig;
    use std::fs;
    use tempfile::TempDir;

    fn dictionary(dir: &TempDir, words: &str) -> DictionaryCache {
        let source = dir.path().join("words.txt");
        fs::write(&source, words).unwrap();
        DictionaryCache::new(DictionaryConfig::new(source).with_cache(dir.path().join("words.rkyv")))
    }

    #[test]
    fn test_unchecked_declines_every_word() {
        let out = decline_collocation("Главный инженер, ООО «Ромашка»", Case::Dative, None).unwrap();
        assert_eq!(out, "Главному инженеру, ООО «Ромашке»");
    }

    #[test]
    fn test_checked_skips_inflected_words() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = dictionary(&dir, "главный\nинженер\nотдел\n");

        let out = decline_collocation("главный инженер отдела", Case::Genitive, Some(&mut dict))
            .unwrap();
        assert_eq!(out, "главного инженера отдела");
    }

    #[test]
    fn test_checked_feminine_adjective_from_expansion() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = dictionary(&dir, "быстрый\nмашина\n");

        let out = decline_collocation("быстрая машина", Case::Genitive, Some(&mut dict)).unwrap();
        assert_eq!(out, "быстрой машины");
    }

    #[test]
    fn test_separators_are_preserved() {
        let out = decline_collocation("  отдел\t-  работа ", Case::Instrumental, None).unwrap();
        assert_eq!(out, "  отделом\t-  работой ");
        assert_eq!(decline_collocation("", Case::Genitive, None).unwrap(), "");
    }

    #[test]
    fn test_missing_dictionary_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = DictionaryCache::new(
            DictionaryConfig::new(dir.path().join("absent.txt"))
                .with_cache(dir.path().join("words.rkyv")),
        );

        let err = decline_collocation("отдел", Case::Genitive, Some(&mut dict)).unwrap_err();
        assert!(matches!(err, DictionaryError::SourceUnavailable { .. }));
    }
}
