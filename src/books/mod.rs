//! Canonical book catalogue.
//!
//! Every supported book is one row of static data: the lookup key handed to
//! the scripture tool, localized display names, and the alias spellings the
//! reference resolver accepts. Tables are keyed by `CanonicalBookId` so the
//! resolver and the renderer agree on a single identifier set.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

mod data;

use data::BOOKS;

/// Number of books in the protestant canon; apocrypha follow in declaration order.
const CANONICAL_COUNT: usize = 66;

/// Books whose text is a single chapter, so a bare number is a verse.
const SINGLE_CHAPTER: [CanonicalBookId; 5] = [
    CanonicalBookId::Jude,
    CanonicalBookId::Obadiah,
    CanonicalBookId::Philemon,
    CanonicalBookId::John2,
    CanonicalBookId::John3,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CanonicalBookId {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    Samuel1,
    Samuel2,
    Kings1,
    Kings2,
    Chronicles1,
    Chronicles2,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSolomon,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    Corinthians1,
    Corinthians2,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    Thessalonians1,
    Thessalonians2,
    Timothy1,
    Timothy2,
    Titus,
    Philemon,
    Hebrews,
    James,
    Peter1,
    Peter2,
    John1,
    John2,
    John3,
    Jude,
    Revelation,
    Tobit,
    Judith,
    Wisdom,
    Sirach,
    Baruch,
    LetterOfJeremiah,
    Maccabees1,
    Maccabees2,
    Maccabees3,
    Maccabees4,
    AdditionsToEsther,
    PrayerOfAzariah,
    Susanna,
    BelAndTheDragon,
    PrayerOfManasseh,
}

/// One catalogue row.
#[derive(Debug)]
pub struct BookInfo {
    pub id: CanonicalBookId,
    /// Identifier understood by the lookup tool. Lamentations keeps the
    /// tool's short form `Lam`.
    pub key: &'static str,
    pub english: &'static str,
    pub english_abbr: &'static str,
    pub dutch: &'static str,
    pub dutch_abbr: &'static str,
    pub aliases: &'static [&'static str],
}

impl CanonicalBookId {
    pub fn info(self) -> &'static BookInfo {
        &BOOKS[self as usize]
    }

    /// Lookup key emitted into compound references.
    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn is_apocryphal(self) -> bool {
        self as usize >= CANONICAL_COUNT
    }

    pub fn is_single_chapter(self) -> bool {
        SINGLE_CHAPTER.contains(&self)
    }

    /// Localized display name.
    pub fn display_name(self, locale: Locale, style: NameStyle) -> &'static str {
        let info = self.info();
        match (locale, style) {
            (Locale::Dutch, NameStyle::Full) => info.dutch,
            (Locale::Dutch, NameStyle::Abbreviated) => info.dutch_abbr,
            (Locale::English, NameStyle::Full) => info.english,
            (Locale::English, NameStyle::Abbreviated) => info.english_abbr,
        }
    }
}

impl fmt::Display for CanonicalBookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// All catalogue rows; apocrypha only when requested.
pub fn catalogue(include_apocrypha: bool) -> &'static [BookInfo] {
    if include_apocrypha {
        &BOOKS
    } else {
        &BOOKS[..CANONICAL_COUNT]
    }
}

/// Language of the localized book-name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Locale {
    #[serde(rename = "nl")]
    #[value(name = "nl")]
    Dutch,
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
}

/// Modules whose citations use Dutch book names.
const DUTCH_MODULES: [&str; 7] = ["HSV", "DutSVV", "DutSVVA", "NBV21", "BGT", "GBS", "GBS2"];

impl Locale {
    pub fn for_module(module: Option<&str>) -> Self {
        match module {
            Some(module) if DUTCH_MODULES.contains(&module) => Locale::Dutch,
            _ => Locale::English,
        }
    }
}

/// Whether citations spell book names out or abbreviate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStyle {
    Full,
    Abbreviated,
}

/// Explicit version tags; unlisted modules tag as themselves.
const VERSION_TAGS: [(&str, &str); 3] = [("DutSVV", "SV"), ("DutSVVA", "SV"), ("GBS2", "SV-GBS")];

pub fn version_tag(module: &str) -> &str {
    VERSION_TAGS
        .iter()
        .find(|(name, _)| *name == module)
        .map(|(_, tag)| *tag)
        .unwrap_or(module)
}
