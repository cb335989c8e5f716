//! Case ending tables.
//!
//! Each table has one row per oblique case (in [`Case::ALL`] order) and one
//! column ("slot") per ending family. Cascade rules refer to endings by slot,
//! so columns must never be reordered without reordering the rules that
//! point at them.

use sklon_protocol::Case;

#[derive(Debug)]
pub struct EndingTable<const N: usize> {
    rows: [[&'static str; N]; 5],
}

impl<const N: usize> EndingTable<N> {
    pub const fn new(rows: [[&'static str; N]; 5]) -> Self {
        Self { rows }
    }

    /// Ending for `case` in column `slot`.
    ///
    /// Panics when `slot` is out of range: a rule pointing past the table is
    /// a bug in the rule set, not a property of the input.
    pub fn ending(&self, case: Case, slot: usize) -> &'static str {
        self.rows[case.index()][slot]
    }

    pub const fn slots(&self) -> usize {
        N
    }
}

/// Personal names and patronymics.
pub static NAME_ENDINGS: EndingTable<6> = EndingTable::new([
    // hushing+а  я      а     й/ь    consonant  fem ь
    ["и",  "и",  "ы",  "я",  "а",  "и"],
    ["е",  "е",  "е",  "ю",  "у",  "и"],
    ["у",  "ю",  "у",  "я",  "а",  "ь"],
    ["ой", "ей", "ой", "ем", "ом", "ью"],
    ["е",  "е",  "е",  "е",  "е",  "и"],
]);

/// Surnames, both genders. Columns 0-7 serve the male cascade, 8-10 the
/// female one, 11 is shared by the consonant+я class.
pub static SURNAME_ENDINGS: EndingTable<12> = EndingTable::new([
    ["и",  "ы",  "я",  "ы",  "ого", "ца",  "я",  "а",  "ой", "ы",  "ой", "и"],
    ["е",  "е",  "ю",  "е",  "ому", "цу",  "ю",  "у",  "ой", "е",  "ой", "е"],
    ["у",  "у",  "я",  "у",  "ого", "ца",  "я",  "а",  "ую", "у",  "у",  "ю"],
    ["ой", "ой", "ем", "ей", "ым",  "цом", "ем", "ом", "ой", "ой", "ой", "ей"],
    ["е",  "е",  "е",  "е",  "ом",  "це",  "е",  "е",  "ой", "е",  "ой", "е"],
]);

/// Profession titles.
pub static PROFESSION_ENDINGS: EndingTable<5> = EndingTable::new([
    // -ский  hushing -ий  noun  -ель/-арь  -ый
    ["ого", "его", "а",  "я",  "ого"],
    ["ому", "ему", "у",  "ю",  "ому"],
    ["ого", "его", "а",  "я",  "ого"],
    ["им",  "им",  "ом", "ем", "ым"],
    ["ом",  "ем",  "е",  "е",  "ом"],
]);

/// Common words, singular.
pub static WORD_ENDINGS: EndingTable<15> = EndingTable::new([
    ["ого", "его", "ого", "а",  "я",  "ей", "ой", "и",  "ы",  "и",  "и",  "я",  "ка",  "а",  "а"],
    ["ому", "ему", "ому", "у",  "ю",  "ей", "ой", "е",  "е",  "и",  "и",  "ю",  "ку",  "у",  "у"],
    ["ого", "его", "ого", "а",  "я",  "ую", "ую", "у",  "у",  "ю",  "ь",  "е",  "ок",  "",   "о"],
    ["им",  "им",  "ым",  "ом", "ем", "ей", "ой", "ой", "ой", "ей", "ью", "ем", "ком", "ом", "ом"],
    ["ом",  "ем",  "ом",  "е",  "е",  "ей", "ой", "е",  "е",  "и",  "и",  "и",  "ке",  "е",  "е"],
]);

/// Common words, plural. The input is still the nominative singular.
pub static PLURAL_ENDINGS: EndingTable<13> = EndingTable::new([
    ["их",  "ых",  "ов",  "ов",  "ей",  "",    "",    "й",   "ей",  "й",   "ков",  "ов",  ""],
    ["им",  "ым",  "ам",  "ам",  "ям",  "ам",  "ам",  "ям",  "ям",  "ям",  "кам",  "ам",  "ам"],
    ["их",  "ых",  "и",   "ов",  "ей",  "и",   "ы",   "и",   "и",   "я",   "ки",   "ы",   "а"],
    ["ими", "ыми", "ами", "ами", "ями", "ами", "ами", "ями", "ями", "ями", "ками", "ами", "ами"],
    ["их",  "ых",  "ах",  "ах",  "ях",  "ах",  "ах",  "ях",  "ях",  "ях",  "ках",  "ах",  "ах"],
]);
