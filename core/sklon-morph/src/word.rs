//! Common nouns and adjectives, singular and plural.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use sklon_protocol::Case;

use crate::cascade::{Cascade, Guard, Rule};
use crate::tables::{PLURAL_ENDINGS, WORD_ENDINGS};

/// Prepositions, adverbs and indeclinable borrowings. Checked before any
/// rule, ignoring letter case.
pub const STOPLIST: &[&str] = &[
    "по", "о", "об", "над", "пальто", "метро", "кофе", "бюро", "на", "постоянно", "регулярно",
    "вечно",
];

const AGENT_SUFFIXES: &str = "[аиеёот]р|ист|ик|[ае]нт|ог|юрисконсульт|ч|вед|аз|ен";
const AGENT_SUFFIXES_BUT_IK: &str = "[аиеёот]р|ист|[ае]нт|ог|юрисконсульт|ч|вед|аз|ен";

pub(crate) const WORD_RULES: &[Rule] = &[
    Rule::replace("-ский", "ский", 2, 0),
    Rule::replace("hushing -ий", "[чшщ]ий", 2, 1),
    Rule::replace("-ый/-ое", "ый|ое", 2, 2),
    Rule::append("agent noun", AGENT_SUFFIXES, 3),
    Rule::replace("-ель/-арь", "(?:ел|ар)ь", 1, 4),
    Rule::replace("hushing -ая/-яя", "[жчщш][ая]я", 2, 5),
    Rule::replace("-ая/-яя", "[ая]я", 2, 6),
    Rule::replace("hushing/velar+а", "[гжкчхшщ]а", 1, 7),
    Rule::replace("consonant+а", "[цнзвпрлдсмтб]а", 1, 8),
    Rule::replace("-ия", "ия", 1, 9),
    Rule::replace("-ть", "ть", 1, 10),
    Rule::replace("-ние", "ние", 1, 11),
    Rule::replace("-ок", "ок", 2, 12).when(Guard::LongerThan(4)),
    // отдел, but not бармен (taken by the agent class above)
    Rule::append("о/е+consonant", "[ое][бвгдлнх]", 13),
    Rule::replace("neuter -о", "[цкнгшщзхфвпрлджчсмтб]о", 1, 14),
];

pub(crate) const PLURAL_RULES: &[Rule] = &[
    Rule::replace("-ский", "ский", 2, 0),
    Rule::replace("hushing -ий", "[чшщ]ий", 2, 0),
    Rule::replace("-ый/-ое", "ый|ое", 2, 1),
    Rule::append("diminutive -ик", "ик", 2),
    Rule::append("agent noun", AGENT_SUFFIXES_BUT_IK, 3),
    Rule::replace("-ель/-арь", "(?:ел|ар)ь", 1, 4),
    Rule::replace("hushing -ая/-яя", "[жчщш][ая]я", 2, 0),
    Rule::replace("-ая/-яя", "[ая]я", 2, 1),
    Rule::replace("hushing/velar+а", "[гжкчхшщ]а", 1, 5).then(break_final_cluster),
    Rule::replace("consonant+а", "[цнзвпрлдсмтб]а", 1, 6),
    Rule::replace("-ия", "ия", 1, 7),
    Rule::replace("-ть", "ть", 1, 8),
    Rule::replace("-ние", "ние", 1, 9),
    Rule::replace("-ок", "ок", 2, 10).when(Guard::LongerThan(4)),
    Rule::append("о/е+consonant", "[ое][бвгдлнх]", 11),
    Rule::replace("neuter -о", "[цкнгшщзхфвпрлджчсмтб]о", 1, 12),
];

pub(crate) static WORD_CASCADE: Lazy<Cascade<15>> =
    Lazy::new(|| Cascade::new("word", WORD_RULES, &WORD_ENDINGS));

pub(crate) static PLURAL_CASCADE: Lazy<Cascade<13>> =
    Lazy::new(|| Cascade::new("plural word", PLURAL_RULES, &PLURAL_ENDINGS));

static FINAL_CLUSTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<head>[бвджзйлмнпрстфхчшщь])к$").expect("static regex")
});

/// Genitive plural of -ка nouns leaves a bare cluster (точк, сумк, копейк);
/// put the fleeting vowel back before the final к.
fn break_final_cluster(word: String) -> String {
    FINAL_CLUSTER
        .replace(&word, |caps: &Captures| {
            let head = &caps["head"];
            match head.to_lowercase().as_str() {
                "ж" | "ч" | "ш" | "щ" => format!("{head}ек"),
                "ь" | "й" => "ек".to_string(),
                _ => format!("{head}ок"),
            }
        })
        .into_owned()
}

fn is_indeclinable(word: &str) -> bool {
    let lowered = word.to_lowercase();
    STOPLIST.contains(&lowered.as_str())
}

/// Declines a common noun or adjective in the singular.
pub fn decline_word(word: &str, case: Case) -> String {
    if is_indeclinable(word) {
        return word.to_string();
    }
    WORD_CASCADE.apply(word, None, case)
}

/// Declines a common noun or adjective, given in the nominative singular,
/// into the plural of `case`.
pub fn decline_word_plural(word: &str, case: Case) -> String {
    if is_indeclinable(word) {
        return word.to_string();
    }
    PLURAL_CASCADE.apply(word, None, case)
}
