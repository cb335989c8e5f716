use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use core::fmt;
use core::str::FromStr;

/// The five oblique cases. The nominative is the input form of every
/// operation and is never a target.
///
/// The discriminant doubles as the row index into every ending table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Case {
    Genitive = 0,
    Dative = 1,
    Accusative = 2,
    Instrumental = 3,
    Prepositional = 4,
}

impl Case {
    pub const ALL: [Case; 5] = [
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// Row of this case in an ending table.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Prepositional => "prepositional",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = ParseGrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // "genetive" is the historical spelling still found in callers' data
            "genitive" | "genetive" | "gen" => Ok(Case::Genitive),
            "dative" | "dat" => Ok(Case::Dative),
            "accusative" | "acc" => Ok(Case::Accusative),
            "instrumental" | "ins" => Ok(Case::Instrumental),
            "prepositional" | "prep" => Ok(Case::Prepositional),
            _ => Err(ParseGrammarError::UnknownCase),
        }
    }
}

/// Grammatical gender as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    Male = 1,
    Female = 2,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ParseGrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ParseGrammarError::UnknownGender),
        }
    }
}

/// Selects the rule cascade and ending table used for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum WordCategory {
    PersonalName = 0,
    Patronymic = 1,    // Shares the personal-name cascade
    Surname = 2,
    ProfessionTitle = 3,
    CommonSingular = 4,
    CommonPlural = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseGrammarError {
    UnknownCase,
    UnknownGender,
}

impl fmt::Display for ParseGrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseGrammarError::UnknownCase => write!(
                f,
                "expected one of: genitive, dative, accusative, instrumental, prepositional"
            ),
            ParseGrammarError::UnknownGender => write!(f, "expected one of: male, female"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseGrammarError {}
