use once_cell::sync::Lazy;
use regex::Regex;
use sklon_protocol::{Case, Gender};

use crate::cascade::{Cascade, Guard, Rule};
use crate::casing::title_case;
use crate::tables::SURNAME_ENDINGS;

pub(crate) const MALE_SURNAME_RULES: &[Rule] = &[
    Rule::replace("velar+а", "[кгх]а", 1, 0),
    Rule::replace("а-final", "а", 1, 1),
    // Медя, Месся
    Rule::replace("consonant+я", "[цкнгшщзхфвпрлджчсмтб]я", 1, 11),
    Rule::keep("indeclinable vowel", "[оихяэе]"),
    // Жирновой, but not Гой
    Rule::replace("-ой", "ой", 2, 4).when(Guard::LongerThan(5)),
    Rule::replace("vowel+й", "[уеаоэяю]й", 1, 2),
    Rule::replace("-ца", "ца", 1, 3),
    Rule::replace("й-final", "й", 2, 4),
    Rule::replace("-ец", "ец", 2, 5),
    Rule::replace("ь-final", "ь", 1, 6),
    // Шляхтёнок, but not Флёк
    Rule::splice("-ок/-ек", "[ое]к", 2, "к", 7).when(Guard::LongerThan(4)),
    Rule::append("consonant", ".", 7),
];

pub(crate) const FEMALE_SURNAME_RULES: &[Rule] = &[
    Rule::keep("consonant-final", "[бвгдежзийлкмнпорстуфхцчьшщ]"),
    Rule::replace("consonant+я", "[цкнгшщзхфвпрлджчсмтб]я", 1, 11),
    // Бахмутская
    Rule::replace("-ая/-яя", "я", 2, 8).when(Guard::LongerThan(3)),
    Rule::replace("п/ц+а", "[пц]а", 1, 9),
    Rule::keep("т/к/б+а", "[ткб]а"),
    Rule::replace("vowel-final", ".", 1, 10),
];

pub(crate) static MALE_SURNAME_CASCADE: Lazy<Cascade<12>> =
    Lazy::new(|| Cascade::new("male surname", MALE_SURNAME_RULES, &SURNAME_ENDINGS));

pub(crate) static FEMALE_SURNAME_CASCADE: Lazy<Cascade<12>> =
    Lazy::new(|| Cascade::new("female surname", FEMALE_SURNAME_RULES, &SURNAME_ENDINGS));

// Воробей -> Воробья, Соловей -> Соловьём: the е drops once an ending follows
static SOFT_SIGN_STEMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?P<stem>вороб|солов)е(?P<next>[^й])").expect("static regex"));

pub fn decline_surname(surname: &str, gender: Gender, case: Case) -> String {
    let declined = match gender {
        Gender::Male => {
            let declined = MALE_SURNAME_CASCADE.apply(surname, Some(gender), case);
            SOFT_SIGN_STEMS
                .replace_all(&declined, |caps: &regex::Captures| {
                    format!("{}ь{}", &caps["stem"], &caps["next"])
                })
                .into_owned()
        }
        Gender::Female => FEMALE_SURNAME_CASCADE.apply(surname, Some(gender), case),
    };

    title_case(&declined)
}
