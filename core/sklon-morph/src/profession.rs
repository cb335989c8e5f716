//! Profession titles.
//!
//! Unlike the single-word cascades, a title is a phrase and every
//! substitution runs over the whole of it, each one on the output of the
//! previous. A title such as "старший инженер-программист" thus has its
//! adjective and both nouns declined in one pass.

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use sklon_protocol::Case;

use crate::tables::PROFESSION_ENDINGS;

/// `stem` is kept, the ending in `slot` is inserted after it and `tail`
/// (the delimiter that closed the word) is put back.
struct Substitution {
    label: &'static str,
    pattern: &'static str,
    slot: usize,
}

const SUBSTITUTIONS: &[Substitution] = &[
    Substitution {
        label: "-ский",
        pattern: r"(?P<stem>ск)ий(?P<tail> )",
        slot: 0,
    },
    Substitution {
        label: "hushing -ий",
        pattern: r"(?P<stem>[чшщ])ий(?P<tail> )",
        slot: 1,
    },
    Substitution {
        label: "-ый",
        pattern: r"(?P<stem>)ый(?P<tail> )",
        slot: 4,
    },
    Substitution {
        label: "professional noun",
        pattern: r"(?P<stem>[аиео]р|ист|ик|[ае]нт|ог|юрисконсульт|ч|вед|ен)(?P<tail>[ \-])",
        slot: 2,
    },
    Substitution {
        label: "-ель/-арь",
        pattern: r"(?P<stem>ел|ар)ь(?P<tail>[ \-])",
        slot: 3,
    },
];

/// Undoes one suffix family: `stem` is kept and `suffix` appended.
struct Restoration {
    label: &'static str,
    pattern: &'static str,
    suffix: &'static str,
}

const RESTORATIONS: &[Restoration] = &[
    Restoration {
        label: "hard adjective",
        pattern: r"(?P<stem>[внт])(?:ый|ого|ому|ым)\b",
        suffix: "ый",
    },
    // -ом alone is too common on nouns (специалистом) to take the т stems
    Restoration {
        label: "hard adjective, prepositional",
        pattern: r"(?P<stem>[вн])ом\b",
        suffix: "ый",
    },
    Restoration {
        label: "soft adjective",
        pattern: r"(?P<stem>[кчшщ])(?:ий|ему|ому|его|ого|им|ем)\b",
        suffix: "ий",
    },
    Restoration {
        label: "-ский, prepositional",
        pattern: r"(?P<stem>ск)ом\b",
        suffix: "ий",
    },
    Restoration {
        label: "-тель",
        pattern: r"(?P<stem>тел)(?:ь|ем|я|ю|е)?\b",
        suffix: "ь",
    },
    Restoration {
        label: "-ик",
        pattern: r"(?P<stem>[мнртчщ]ик)(?:ом|а|у|е)?\b",
        suffix: "",
    },
    Restoration {
        label: "-ор/-ер/-ог",
        pattern: r"(?P<stem>ор|ер|ог)(?:ом|а|у|е)?\b",
        suffix: "",
    },
];

static COMPILED_SUBSTITUTIONS: Lazy<Vec<(Regex, &'static Substitution)>> = Lazy::new(|| {
    SUBSTITUTIONS
        .iter()
        .map(|s| (compile(s.label, s.pattern), s))
        .collect()
});

static COMPILED_RESTORATIONS: Lazy<Vec<(Regex, &'static Restoration)>> = Lazy::new(|| {
    RESTORATIONS
        .iter()
        .map(|r| (compile(r.label, r.pattern), r))
        .collect()
});

fn compile(label: &str, pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}"))
        .unwrap_or_else(|e| panic!("profession rule '{label}': {e}"))
}

/// Declines a profession title given in the nominative.
pub fn decline_profession(title: &str, case: Case) -> String {
    // Every word, the last one included, must be closed by a delimiter
    let mut phrase = format!("{} ", title.trim());

    for (regex, substitution) in COMPILED_SUBSTITUTIONS.iter() {
        let ending = PROFESSION_ENDINGS.ending(case, substitution.slot);
        let next = regex.replace_all(&phrase, |caps: &Captures| {
            format!("{}{}{}", &caps["stem"], ending, &caps["tail"])
        });
        if next != phrase {
            trace!("profession: '{}' applied to '{}'", substitution.label, phrase);
        }
        phrase = next.into_owned();
    }

    phrase.trim().to_string()
}

/// Best-effort recovery of the nominative title from any case.
///
/// Works on four suffix families (adjectives, -тель, -ик, -ор/-ер/-ог), so
/// titles built from other nouns come back unchanged.
pub fn profession_to_base(title: &str) -> String {
    let mut phrase = title.to_string();

    for (regex, restoration) in COMPILED_RESTORATIONS.iter() {
        let next = regex.replace_all(&phrase, |caps: &Captures| {
            format!("{}{}", &caps["stem"], restoration.suffix)
        });
        if next != phrase {
            trace!("profession base: '{}' applied to '{}'", restoration.label, phrase);
        }
        phrase = next.into_owned();
    }

    phrase
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decline_profession() {
        assert_eq!(decline_profession("главный инженер", Case::Genitive), "главного инженера");
        assert_eq!(decline_profession("главный инженер", Case::Instrumental), "главным инженером");
        assert_eq!(decline_profession("старший преподаватель", Case::Dative), "старшему преподавателю");
        assert_eq!(
            decline_profession("  технический директор ", Case::Prepositional),
            "техническом директоре"
        );
    }

    #[test]
    fn test_substitutions_compose_over_the_phrase() {
        assert_eq!(
            decline_profession("ведущий инженер-программист", Case::Genitive),
            "ведущего инженера-программиста"
        );
    }

    #[test]
    fn test_unknown_titles_pass_through() {
        assert_eq!(decline_profession("", Case::Dative), "");
        assert_eq!(decline_profession("CEO", Case::Dative), "CEO");
    }

    #[test]
    fn test_profession_to_base() {
        assert_eq!(profession_to_base("главного инженера"), "главный инженер");
        assert_eq!(profession_to_base("старшему преподавателю"), "старший преподаватель");
        assert_eq!(profession_to_base("технического директора"), "технический директор");
        assert_eq!(profession_to_base("сотрудником"), "сотрудник");
        assert_eq!(profession_to_base("главный инженер"), "главный инженер");
    }

    #[test]
    fn test_round_trip_for_common_titles() {
        for title in ["главный инженер", "старший преподаватель", "технический директор"] {
            for case in Case::ALL {
                let declined = decline_profession(title, case);
                assert_eq!(profession_to_base(&declined), title, "{case}: {declined}");
            }
        }
    }
}
