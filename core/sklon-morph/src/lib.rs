//! Heuristic declension of Russian words into the five oblique cases.
//!
//! Each word category has its own ordered rule cascade backed by a table of
//! case endings (see [`cascade`] and [`tables`]). Every operation is total:
//! a word no rule recognises comes back unchanged.

pub mod cascade;
pub mod casing;
pub mod name;
pub mod profession;
pub mod surname;
pub mod tables;
pub mod word;

pub use sklon_protocol::{Case, Gender, WordCategory};

pub use casing::title_case;
pub use name::{decline_name, decline_patronymic, infer_sex_from_patronymic, name_to_nominative};
pub use profession::{decline_profession, profession_to_base};
pub use surname::decline_surname;
pub use word::{decline_word, decline_word_plural, STOPLIST};

/// Declines `word` as a member of `category`.
///
/// `gender` only matters for names, patronymics and surnames.
pub fn decline(word: &str, category: WordCategory, gender: Gender, case: Case) -> String {
    match category {
        WordCategory::PersonalName => decline_name(word, gender, case),
        WordCategory::Patronymic => decline_patronymic(word, gender, case),
        WordCategory::Surname => decline_surname(word, gender, case),
        WordCategory::ProfessionTitle => decline_profession(word, case),
        WordCategory::CommonSingular => decline_word(word, case),
        WordCategory::CommonPlural => decline_word_plural(word, case),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CATEGORIES: [WordCategory; 6] = [
        WordCategory::PersonalName,
        WordCategory::Patronymic,
        WordCategory::Surname,
        WordCategory::ProfessionTitle,
        WordCategory::CommonSingular,
        WordCategory::CommonPlural,
    ];

    #[test]
    fn test_dispatch() {
        assert_eq!(
            decline("Павел", WordCategory::PersonalName, Gender::Male, Case::Dative),
            "Павлу"
        );
        assert_eq!(
            decline("Иванова", WordCategory::Surname, Gender::Female, Case::Genitive),
            "Ивановой"
        );
        assert_eq!(
            decline("главный инженер", WordCategory::ProfessionTitle, Gender::Female, Case::Dative),
            "главному инженеру"
        );
        assert_eq!(
            decline("отдел", WordCategory::CommonPlural, Gender::Male, Case::Instrumental),
            "отделами"
        );
    }

    #[test]
    fn test_empty_input_is_identity() {
        for category in CATEGORIES {
            for gender in [Gender::Male, Gender::Female] {
                for case in Case::ALL {
                    assert_eq!(decline("", category, gender, case), "", "{category:?} {gender} {case}");
                }
            }
        }
    }

    #[test]
    fn test_every_table_covers_its_cascade() {
        // Forces every Lazy cascade to compile, which asserts slot bounds
        let name_rules = name::NAME_CASCADE.rules().count();
        let male = surname::MALE_SURNAME_CASCADE.rules().count();
        let female = surname::FEMALE_SURNAME_CASCADE.rules().count();
        let singular = word::WORD_CASCADE.rules().count();
        let plural = word::PLURAL_CASCADE.rules().count();
        assert_eq!(
            (name_rules, male, female, singular, plural),
            (8, 12, 6, 15, 16)
        );
    }

    fn any_category() -> impl Strategy<Value = WordCategory> {
        prop::sample::select(CATEGORIES.to_vec())
    }

    fn any_case() -> impl Strategy<Value = Case> {
        prop::sample::select(Case::ALL.to_vec())
    }

    fn any_gender() -> impl Strategy<Value = Gender> {
        prop::sample::select(vec![Gender::Male, Gender::Female])
    }

    proptest! {
        #[test]
        fn test_declension_is_deterministic(
            word in "[а-яА-ЯёЁ]{0,12}",
            category in any_category(),
            gender in any_gender(),
            case in any_case(),
        ) {
            let first = decline(&word, category, gender, case);
            let second = decline(&word, category, gender, case);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_declension_is_total(
            word in "\\PC{0,24}",
            category in any_category(),
            gender in any_gender(),
            case in any_case(),
        ) {
            // Must not panic on arbitrary text
            let _ = decline(&word, category, gender, case);
            let _ = profession_to_base(&word);
            let _ = name_to_nominative(&word);
            let _ = infer_sex_from_patronymic(&word);
        }

        #[test]
        fn test_non_cyrillic_words_pass_through(word in "[a-z0-9]{1,10}", case in any_case()) {
            prop_assert_eq!(decline_word(&word, case), word.clone());
            prop_assert_eq!(decline_word_plural(&word, case), word);
        }
    }
}
