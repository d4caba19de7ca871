use serde::Serialize;
use std::fmt;

/// Whether a note is a general footnote or a cross-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Note,
    CrossReference,
}

impl NoteKind {
    pub fn label(self) -> &'static str {
        match self {
            NoteKind::Note => "note",
            NoteKind::CrossReference => "ref",
        }
    }
}

/// A footnote or cross-reference extracted from one verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub kind: NoteKind,
    /// Explicit `n` marker from the source, or the 1-based position in its verse.
    pub marker: String,
    pub content: String,
}

/// One run of verse text with uniform presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    Text(String),
    SmallCaps(String),
    Italic(String),
    /// Index into the owning verse's `notes`.
    NoteRef(usize),
}

/// One visible line of a verse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn text(text: &str) -> Self {
        Self::new(vec![Segment::Text(text.to_string())])
    }

    /// True when the line shows nothing: no text and no note call.
    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|segment| match segment {
            Segment::Text(text) | Segment::SmallCaps(text) | Segment::Italic(text) => {
                text.trim().is_empty()
            }
            Segment::NoteRef(_) => false,
        })
    }
}

/// Bare text, small caps shown as `*X*`, note calls omitted.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) | Segment::Italic(text) => f.write_str(text)?,
                Segment::SmallCaps(text) => write!(f, "*{text}*")?,
                Segment::NoteRef(_) => {}
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    /// Book name as printed by the lookup tool.
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    /// Never empty; verses without visible text are dropped by the parser.
    pub lines: Vec<Line>,
    pub has_small_caps: bool,
    pub notes: Vec<Note>,
}

impl Verse {
    pub fn is_poetic(&self) -> bool {
        self.lines.len() > 1
    }
}

/// Consecutive verses sharing one book and chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passage {
    pub book: String,
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

/// How a passage's verse numbers read in a citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseRange {
    Single(u32),
    Range(u32, u32),
    List(Vec<u32>),
}

impl fmt::Display for VerseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerseRange::Single(verse) => write!(f, "{verse}"),
            VerseRange::Range(first, last) => write!(f, "{first}-{last}"),
            VerseRange::List(verses) => {
                let joined = verses
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                f.write_str(&joined)
            }
        }
    }
}

impl Passage {
    pub fn first_verse(&self) -> Option<u32> {
        self.verses.first().map(|verse| verse.verse)
    }

    pub fn last_verse(&self) -> Option<u32> {
        self.verses.last().map(|verse| verse.verse)
    }

    /// Every adjacent pair of verse numbers differs by exactly one.
    pub fn is_consecutive(&self) -> bool {
        self.verses
            .windows(2)
            .all(|pair| pair[0].verse.checked_add(1) == Some(pair[1].verse))
    }

    pub fn verse_range(&self) -> Option<VerseRange> {
        let first = self.first_verse()?;
        let last = self.last_verse()?;
        if first == last {
            return Some(VerseRange::Single(first));
        }
        if self.is_consecutive() {
            return Some(VerseRange::Range(first, last));
        }
        Some(VerseRange::List(
            self.verses.iter().map(|verse| verse.verse).collect(),
        ))
    }

    /// True when any verse spans more than one line.
    pub fn has_poetry(&self) -> bool {
        self.verses.iter().any(Verse::is_poetic)
    }
}
