//! Personal names, patronymics and the helpers that work on full names.

use once_cell::sync::Lazy;
use regex::Regex;
use sklon_protocol::{Case, Gender};

use crate::cascade::{Cascade, Guard, Rule};
use crate::casing::title_case;
use crate::tables::NAME_ENDINGS;

/// Names whose oblique stem loses the fleeting vowel.
const IRREGULAR_STEMS: &[(&str, &str)] = &[("павел", "павл"), ("лев", "льв")];

pub(crate) const NAME_RULES: &[Rule] = &[
    Rule::keep("vowel-final", "[уеыоэию]"),
    Rule::replace("hushing+а", "[хгшжчщ]а", 1, 0),
    Rule::replace("я-final", "я", 1, 1),
    Rule::replace("-ка", "ка", 1, 0),
    Rule::replace("а-final", "а", 1, 2),
    Rule::replace("masculine й/ь", "[йь]", 1, 3).when(Guard::Gender(Gender::Male)),
    Rule::append("masculine consonant", ".", 4).when(Guard::Gender(Gender::Male)),
    Rule::replace("feminine ь", "ь", 1, 5).when(Guard::Gender(Gender::Female)),
];

pub(crate) static NAME_CASCADE: Lazy<Cascade<6>> =
    Lazy::new(|| Cascade::new("name", NAME_RULES, &NAME_ENDINGS));

static FEMALE_PATRONYMIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)на$|кызы").expect("static regex"));

static GENITIVE_FEMININE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)ой$").expect("static regex"));
static OBLIQUE_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:а|у|ого|ую)$").expect("static regex"));
static GLUED_INITIALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?P<initials>[а-я]\.[а-я]\.)(?P<rest>[а-я])").expect("static regex")
});

/// Declines a first name. The result is title-cased.
pub fn decline_name(name: &str, gender: Gender, case: Case) -> String {
    let lowered = name.to_lowercase();
    let stem = IRREGULAR_STEMS
        .iter()
        .find(|(nominative, _)| *nominative == lowered)
        .map_or(lowered.as_str(), |(_, stem)| stem);

    // Callers print the result as-is, so it comes back title-cased.
    title_case(&NAME_CASCADE.apply(stem, Some(gender), case))
}

/// Patronymics decline exactly like first names.
pub fn decline_patronymic(patronymic: &str, gender: Gender, case: Case) -> String {
    decline_name(patronymic, gender, case)
}

/// Female for `-на` patronymics and the Turkic `кызы`, male otherwise.
pub fn infer_sex_from_patronymic(patronymic: &str) -> Gender {
    if FEMALE_PATRONYMIC.is_match(patronymic) {
        Gender::Female
    } else {
        Gender::Male
    }
}

/// Best-effort return of a name string to the nominative.
///
/// Undoes the most frequent oblique endings at the end of the string and
/// restores the space after glued initials (`И.И.Иванову` -> `И.И. Иванов`).
pub fn name_to_nominative(full_name: &str) -> String {
    let restored = if GENITIVE_FEMININE.is_match(full_name) {
        GENITIVE_FEMININE.replace(full_name, "а").into_owned()
    } else {
        OBLIQUE_TAIL.replace(full_name, "").into_owned()
    };

    GLUED_INITIALS
        .replace(&restored, |caps: &regex::Captures| {
            format!("{} {}", &caps["initials"], &caps["rest"])
        })
        .into_owned()
}
