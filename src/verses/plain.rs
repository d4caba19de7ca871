use once_cell::sync::Lazy;
use regex::Regex;

static VERSE_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+(\d+):(\d+):\s*(.*)$").expect("valid verse start pattern")
});

/// A verse as found in the payload, before markup processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RawVerse {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub body: String,
}

#[derive(Default)]
struct PlainState {
    current: Option<(String, u32, u32)>,
    parts: Vec<String>,
    out: Vec<RawVerse>,
}

impl PlainState {
    fn flush(&mut self) {
        let parts = std::mem::take(&mut self.parts);
        if let Some((book, chapter, verse)) = self.current.take() {
            self.out.push(RawVerse {
                book,
                chapter,
                verse,
                body: parts.join("\n"),
            });
        }
    }
}

/// Split a line-oriented listing into raw verses.
///
/// A verse starts at `Book C:V: text`; following non-blank lines are its
/// continuation lines until the next verse start or the `(MODULE)` sentinel.
/// Blank lines never end a verse.
pub(super) fn split_plain(payload: &str, module: Option<&str>) -> Vec<RawVerse> {
    let sentinel = module.map(|module| format!("({module})"));
    let mut state = PlainState::default();

    for raw in payload.lines() {
        let line = raw.trim();
        if handle_sentinel(line, sentinel.as_deref(), &mut state) {
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if handle_verse_start(line, &mut state) {
            continue;
        }
        if state.current.is_some() {
            state.parts.push(line.to_string());
        }
    }

    state.flush();
    state.out
}

fn handle_sentinel(line: &str, sentinel: Option<&str>, state: &mut PlainState) -> bool {
    if sentinel != Some(line) {
        return false;
    }
    state.flush();
    true
}

fn handle_verse_start(line: &str, state: &mut PlainState) -> bool {
    let Some(caps) = VERSE_START.captures(line) else {
        return false;
    };
    let (Ok(chapter), Ok(verse)) = (caps[2].parse::<u32>(), caps[3].parse::<u32>()) else {
        return false;
    };
    state.flush();
    state.current = Some((caps[1].trim().to_string(), chapter, verse));
    let text = caps[4].trim();
    if !text.is_empty() {
        state.parts.push(text.to_string());
    }
    true
}
