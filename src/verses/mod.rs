//! Scripture payload parsing.
//!
//! The lookup tool emits either a plain line listing or tag-annotated markup.
//! Both shapes are first split into raw verses, then every verse body runs
//! through the same markup state machine.

mod annotate;
mod group;
mod markup;
mod model;
mod plain;
mod tagged;

pub use annotate::AnnotationOptions;
pub use group::group;
pub use markup::{process_markup, MarkupOptions, RawMode, VerseContent};
pub use model::{Line, Note, NoteKind, Passage, Segment, Verse, VerseRange};

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use plain::RawVerse;
use regex::Regex;

static TAGGED_MODULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(([A-Za-z0-9_.-]+)\)\s*</body>").expect("valid tagged module pattern")
});
static PLAIN_MODULE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*\(([A-Za-z0-9_.-]+)\)[ \t]*\r?$").expect("valid plain module pattern")
});
static SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<span[^>]*>").expect("valid span pattern"));

/// Options for turning a payload into verses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub mode: RawMode,
    pub annotations: AnnotationOptions,
}

/// The payload's shape, chosen by the presence of span wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Plain,
    Tagged,
}

pub fn detect_kind(payload: &str) -> PayloadKind {
    if SPAN.is_match(payload) {
        PayloadKind::Tagged
    } else {
        PayloadKind::Plain
    }
}

/// Module named by the payload's trailing `(MODULE)` sentinel.
pub fn extract_module(payload: &str) -> Option<String> {
    TAGGED_MODULE
        .captures_iter(payload)
        .last()
        .or_else(|| PLAIN_MODULE.captures_iter(payload).last())
        .map(|caps| caps[1].to_string())
}

/// Parse a payload into verses in source order.
///
/// Verses whose text reduces to nothing are dropped. Fails with
/// `EmptyPayload` for blank input and `NoVersesFound` when nothing survives.
pub fn parse_payload(payload: &str, options: &ParseOptions) -> Result<Vec<Verse>> {
    if payload.trim().is_empty() {
        return Err(Error::EmptyPayload);
    }

    let kind = detect_kind(payload);
    let raw = match kind {
        PayloadKind::Plain => plain::split_plain(payload, extract_module(payload).as_deref()),
        PayloadKind::Tagged => tagged::split_tagged(payload),
    };
    let markup_options = MarkupOptions {
        mode: options.mode,
        annotations: options.annotations,
        newline_breaks: kind == PayloadKind::Plain,
    };

    let verses: Vec<Verse> = raw
        .into_iter()
        .filter_map(|raw| build_verse(raw, &markup_options))
        .collect();
    tracing::debug!(?kind, verses = verses.len(), "parsed payload");

    if verses.is_empty() {
        return Err(Error::NoVersesFound);
    }
    Ok(verses)
}

fn build_verse(raw: RawVerse, options: &MarkupOptions) -> Option<Verse> {
    let content = process_markup(&raw.body, options);
    if content.lines.is_empty() {
        return None;
    }
    Some(Verse {
        book: raw.book,
        chapter: raw.chapter,
        verse: raw.verse,
        lines: content.lines,
        has_small_caps: content.has_small_caps,
        notes: content.notes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "\
Psalms 23:1: The <hi type=\"small-caps\">LORD</hi> is my shepherd;
I shall not want.
Psalms 23:2: <note type=\"crossReference\"></note>
Psalms 23:3: He restoreth my soul
(KJV)
";

    const TAGGED: &str = concat!(
        "<html><body>",
        "Psalms 23:1: <span><l sID=\"a\"/>The LORD is my shepherd;<l eID=\"a\"/> ",
        "<l sID=\"b\"/>I shall not want.<l eID=\"b\"/></span><br />\n",
        "Psalms 23:2: <span><note n=\"x\"/></span><br />\n",
        "(KJV)\n</body></html>"
    );

    #[test]
    fn plain_payload_keeps_continuation_lines() {
        let verses = parse_payload(PLAIN, &ParseOptions::default()).expect("parse");
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[0].lines.len(), 2);
        assert!(verses[0].has_small_caps);
        assert_eq!(verses[1].verse, 3);
    }

    #[test]
    fn verse_with_only_an_empty_note_is_dropped() {
        let verses = parse_payload(TAGGED, &ParseOptions::default()).expect("parse");
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].verse, 1);
        let lines: Vec<String> = verses[0].lines.iter().map(ToString::to_string).collect();
        assert_eq!(lines, ["The LORD is my shepherd;", "I shall not want."]);
    }

    #[test]
    fn detects_payload_kind() {
        assert_eq!(detect_kind(PLAIN), PayloadKind::Plain);
        assert_eq!(detect_kind(TAGGED), PayloadKind::Tagged);
    }

    #[test]
    fn extracts_module_sentinel() {
        assert_eq!(extract_module(PLAIN).as_deref(), Some("KJV"));
        assert_eq!(extract_module(TAGGED).as_deref(), Some("KJV"));
        assert_eq!(extract_module("Genesis 1:1: text").as_deref(), None);
    }

    #[test]
    fn empty_and_verseless_payloads_fail() {
        assert_eq!(
            parse_payload("  \n ", &ParseOptions::default()).unwrap_err(),
            Error::EmptyPayload
        );
        assert_eq!(
            parse_payload("no verses here\n(KJV)", &ParseOptions::default()).unwrap_err(),
            Error::NoVersesFound
        );
    }
}
